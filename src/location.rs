use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

/// Scalar type of board coordinates.
pub type Coord = usize;
/// A board dimension, in cells.
pub type Dimension = NonZero<Coord>;

/// A cell position as a `(column, row)` pair.
///
/// Both coordinates are 1-based: columns count rightward from 1, rows count
/// downward from 1, so the top-left cell of any board is `Location(1, 1)`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Location(pub Coord, pub Coord);

impl Location {
    // (row, column), 0-based; wraps on underflow so that coordinates below 1
    // land outside any array and fail `get` like coordinates above the dims do
    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.1.wrapping_sub(1), self.0.wrapping_sub(1))
    }

    /// Offset this location by a signed `(columns, rows)` pair.
    pub fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(
            self.0.wrapping_add_signed(rhs.0),
            self.1.wrapping_add_signed(rhs.1),
        )
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.1 + 1, value.0 + 1)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
