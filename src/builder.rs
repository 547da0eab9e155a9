use std::num::NonZero;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};

use crate::board::Board;
use crate::cell::Cell;
use crate::color::BallColor;
use crate::location::{Dimension, Location};
use crate::spawn::Spawner;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A ball was placed outside the bounds specified by `dims` on a builder.
    PlacementOutOfBounds,
}

/// A builder for [`Board`]s.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone)]
pub struct BoardBuilder {
    // width, height
    dims: (Dimension, Dimension),
    cells: Array2<Cell>,
    seed: u64,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for BoardBuilder {
    /// A builder for the classic game: a 9 by 9 board, spawner seeded with 0.
    fn default() -> Self {
        Self::with_dims((NonZero::new(9).unwrap(), NonZero::new(9).unwrap()))
    }
}

impl BoardBuilder {
    /// Construct a new builder with the specified dimensions, specified in `(columns, rows)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            cells: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), Cell::default),
            seed: 0,
            invalid_reasons: Default::default(),
        }
    }

    /// Seed the board's ball spawner.
    ///
    /// Two boards built with the same dimensions, placements, and seed and
    /// fed the same actions replay identically.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// Place a ball of `color` at `location` before play begins. Placing over
    /// an existing ball replaces it.
    ///
    /// May cause the builder to enter a [`PlacementOutOfBounds`](BuilderInvalidReason::PlacementOutOfBounds) invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn place(&mut self, color: BallColor, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if !(1..=self.dims.0.get()).contains(&location.0) || !(1..=self.dims.1.get()).contains(&location.1) {
            self.invalid_reasons.push(BuilderInvalidReason::PlacementOutOfBounds);
            return self;
        }

        self.cells.index_mut(location.as_index()).assign_elem(Cell::Ball { color });
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Board`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Board, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(Board {
            cells: self.cells.clone(),
            dims: self.dims,
            selected: None,
            score: 0,
            spawner: Spawner::new(self.seed),
        })
    }
}
