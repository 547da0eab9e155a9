use crate::color::BallColor;

/// The occupancy of a single board cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A ball of some color rests here; routes may not pass through.
    Ball {
        /// The ball's color.
        color: BallColor,
    },
    /// Nothing here.
    #[default]
    Empty,
}

impl Cell {
    /// Whether this cell holds no ball.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The color of the ball here, if any.
    pub fn color(&self) -> Option<BallColor> {
        match self {
            Self::Ball { color } => Some(*color),
            Self::Empty => None,
        }
    }
}
