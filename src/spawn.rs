use std::ops::IndexMut;

use itertools::Itertools;
use ndarray::{Array2, AssignElem};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strum::VariantArray;

use crate::cell::Cell;
use crate::color::BallColor;
use crate::event::Event;
use crate::location::Location;

/// Number of balls dealt per spawn round, i.e. in the opening deal and after
/// every move that completes no line.
pub const SPAWN_COUNT: usize = 3;

/// Deals random balls onto random empty cells.
///
/// The spawner owns all randomness in the engine. Its generator is seeded at
/// construction, so two boards built with the same seed and fed the same
/// actions produce identical games.
#[derive(Clone, Debug)]
pub(crate) struct Spawner {
    rng: SmallRng,
}

impl Spawner {
    pub(crate) fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Run one spawn round against `cells`: up to [`SPAWN_COUNT`] balls, each
    /// placed on a uniformly random empty cell in a uniformly random color.
    ///
    /// Emptiness is re-checked before every placement. The round ends early
    /// with a [`GameOver`](Event::GameOver) the moment no empty cell remains,
    /// whether a placement just took the last one or the round started with
    /// the board already full.
    pub(crate) fn spawn(&mut self, cells: &mut Array2<Cell>) -> Vec<Event> {
        let mut events = Vec::with_capacity(SPAWN_COUNT + 1);

        for _ in 0..SPAWN_COUNT {
            // empty cells in row-major order, so a given RNG stream always
            // picks the same cell from the same board state
            let empty = cells.indexed_iter()
                .filter(|(_, cell)| cell.is_empty())
                .map(|(index, _)| Location::from(index))
                .collect_vec();

            if empty.is_empty() {
                events.push(Event::GameOver);
                break;
            }

            let location = empty[self.rng.gen_range(0..empty.len())];
            let color = BallColor::VARIANTS[self.rng.gen_range(0..BallColor::VARIANTS.len())];

            cells.index_mut(location.as_index()).assign_elem(Cell::Ball { color });
            events.push(Event::AddBall { location, color });

            if empty.len() == 1 {
                // that placement took the last empty cell
                events.push(Event::GameOver);
                break;
            }
        }

        events
    }
}
