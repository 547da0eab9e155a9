use std::collections::BTreeSet;

use itertools::Itertools;
use ndarray::Array2;

use crate::cell::Cell;
use crate::location::Location;

/// Minimum number of same-colored balls, landing ball included, for a
/// straight run to count as a completed line.
pub const MIN_RUN_LENGTH: usize = 5;

// each axis as a pair of opposing half-axis steps; a run along an axis is the
// landing cell plus everything reached by walking each half until the color changes
#[cfg(not(feature = "diagonal-lines"))]
const AXES: [[(isize, isize); 2]; 2] = [
    [(-1, 0), (1, 0)],
    [(0, -1), (0, 1)],
];
#[cfg(feature = "diagonal-lines")]
const AXES: [[(isize, isize); 2]; 4] = [
    [(-1, 0), (1, 0)],
    [(0, -1), (0, 1)],
    [(-1, -1), (1, 1)],
    [(-1, 1), (1, -1)],
];

/// Collect every cell belonging to a completed line through `landing`.
///
/// Each axis is scanned outward from `landing` independently and qualifies on
/// its own length; qualifying runs are unioned, deduplicated, and returned
/// sorted by column, then row. Empty result means nothing to clear.
pub(crate) fn completed_runs(cells: &Array2<Cell>, landing: Location) -> Vec<Location> {
    let color = match cells.get(landing.as_index()).and_then(Cell::color) {
        Some(color) => color,
        None => return Vec::new(),
    };

    let mut cleared = BTreeSet::new();
    for axis in AXES {
        let mut run = vec![landing];

        for step in axis {
            let mut cursor = landing.offset_by(step);
            while cells.get(cursor.as_index()).and_then(Cell::color) == Some(color) {
                run.push(cursor);
                cursor = cursor.offset_by(step);
            }
        }

        if run.len() >= MIN_RUN_LENGTH {
            cleared.extend(run);
        }
    }

    cleared.into_iter().collect_vec()
}
