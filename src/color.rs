use strum::VariantArray;

/// A ball color from the fixed seven-color palette.
///
/// The spawner draws uniformly from [`VARIANTS`](strum::VariantArray::VARIANTS);
/// nothing else in the engine distinguishes one color from another.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum BallColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Magenta,
    Orange,
}

impl BallColor {
    /// The character standing in for this color in a board's text rendering.
    pub fn display(&self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Yellow => 'Y',
            Self::Cyan => 'C',
            Self::Magenta => 'M',
            Self::Orange => 'O',
        }
    }
}
