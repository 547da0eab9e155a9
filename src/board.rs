use std::fmt::{Display, Formatter};
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use thiserror::Error;

use crate::cell::Cell;
use crate::color::BallColor;
use crate::event::Event;
use crate::location::{Dimension, Location};
use crate::matcher;
use crate::router::Router;
use crate::spawn::Spawner;

/// An action addressed a cell outside the board.
///
/// Callers translate pointer positions to board coordinates and are expected
/// to discard clicks that land outside the grid, so this is a caller error,
/// reported apart from the event stream rather than in it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("location {location} is outside the {} x {} board", dims.0, dims.1)]
pub struct OutOfBounds {
    /// The offending coordinates.
    pub location: Location,
    /// The dimensions of the board that rejected them, in `(columns, rows)` order.
    pub dims: (Dimension, Dimension),
}

/// A Color Lines board: a rectangular grid of cells plus the selection and
/// score state of the game being played on it.
///
/// [`Board`]s should be built using a [`BoardBuilder`](crate::builder::BoardBuilder).
/// Deal the opening balls with [`start`](Board::start), then submit player
/// clicks through [`click`](Board::click). Every observable change comes back
/// as an ordered sequence of [`Event`]s; consumers that replay each sequence
/// in order stay in lockstep with the board.
pub struct Board {
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) selected: Option<Location>,
    pub(crate) score: u32,
    pub(crate) spawner: Spawner,
}

impl Board {
    /// Deal the opening balls: one spawn round, reported as events.
    ///
    /// Call once, before the first [`click`](Board::click). On boards too
    /// small for the opening deal this can already end the game, which the
    /// returned events report as usual.
    pub fn start(&mut self) -> Vec<Event> {
        self.spawner.spawn(&mut self.cells)
    }

    /// Apply a player click at `location` and return the events it caused.
    ///
    /// A click either changes the selection or requests a move:
    /// * no selection, clicked a ball: select it;
    /// * no selection, clicked an empty cell: nothing happens;
    /// * clicked the selected ball: deselect it;
    /// * clicked another ball: move the selection there;
    /// * clicked an empty cell while a ball is selected: move the selected
    ///   ball along a shortest open route, or report
    ///   [`ImpossibleMove`](Event::ImpossibleMove) (keeping the selection)
    ///   when every route is blocked.
    ///
    /// A completed move clears the selection. If the move finishes a line,
    /// the line's balls come off and the score grows by one per ball; if not,
    /// a spawn round deals new balls before the events return.
    pub fn click(&mut self, location: Location) -> Result<Vec<Event>, OutOfBounds> {
        let clicked = self.cell(location)?;

        Ok(match self.selected {
            None => match clicked {
                Cell::Empty => Vec::new(),
                Cell::Ball { .. } => {
                    self.selected = Some(location);
                    vec![Event::SelectBall { location }]
                }
            },
            Some(selected) if selected == location => {
                self.selected = None;
                vec![Event::DeselectBall { location }]
            }
            Some(selected) => match clicked {
                Cell::Ball { .. } => {
                    self.selected = Some(location);
                    vec![
                        Event::DeselectBall { location: selected },
                        Event::SelectBall { location },
                    ]
                }
                Cell::Empty => self.attempt_move(selected, location),
            },
        })
    }

    // `from` holds the selected ball, `to` is empty and in bounds
    fn attempt_move(&mut self, from: Location, to: Location) -> Vec<Event> {
        let path = match Router::over(&self.cells, from).route(from, to) {
            Some(path) => path,
            None => return vec![Event::ImpossibleMove],
        };

        let color = match self.cells[from.as_index()] {
            Cell::Ball { color } => color,
            _ => unreachable!(),
        };

        self.cells.index_mut(to.as_index()).assign_elem(Cell::Ball { color });
        self.cells.index_mut(from.as_index()).assign_elem(Cell::Empty);
        self.selected = None;

        let mut events = vec![Event::MoveBall { path, color }];

        let completed = matcher::completed_runs(&self.cells, to);
        if completed.is_empty() {
            // a move that clears nothing costs the player a spawn round
            events.extend(self.spawner.spawn(&mut self.cells));
        } else {
            for location in &completed {
                self.cells.index_mut(location.as_index()).assign_elem(Cell::Empty);
            }

            self.score += completed.len() as u32;
            events.push(Event::LineCompleted { cells: completed });
            events.push(Event::UpdateScore { score: self.score });
        }

        events
    }

    /// The cell at `location`.
    pub fn cell(&self, location: Location) -> Result<Cell, OutOfBounds> {
        self.cells
            .get(location.as_index())
            .copied()
            .ok_or(OutOfBounds { location, dims: self.dims })
    }

    /// The dimensions of this board, in `(columns, rows)` order.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The location of the currently selected ball, if there is one.
    pub fn selected(&self) -> Option<Location> {
        self.selected
    }

    /// The cumulative score: one point per ball cleared so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// How many balls are on the board.
    pub fn ball_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Every ball on the board with its location, in row-major order.
    pub fn balls(&self) -> impl Iterator<Item = (Location, BallColor)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|(index, cell)| cell.color().map(|color| (Location::from(index), color)))
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for (index, cell) in self.cells.indexed_iter() {
            let location = Location::from(index);

            out.push(match cell {
                // the selected ball renders lowercase
                Cell::Ball { color } => match self.selected == Some(location) {
                    true => color.display().to_ascii_lowercase(),
                    false => color.display(),
                },
                Cell::Empty => '.',
            });

            if location.0 == self.dims.0.get() {
                out.push('\n');
            }
        }

        write!(f, "{}", out)
    }
}
