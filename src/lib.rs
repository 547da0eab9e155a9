#![warn(missing_docs)]

//! # `quintet`
//!
//! A rules engine for [Color Lines](https://en.wikipedia.org/wiki/Color_Lines) and its many "Lines 98" style clones.
//! Begin by building a board object using a [`BoardBuilder`](builder::BoardBuilder), deal the opening balls with [`start()`](crate::Board::start),
//! then feed player clicks to [`click()`](crate::Board::click) one at a time.
//! Every action returns the ordered sequence of [`Event`]s it caused; a frontend that replays each sequence over its previous view stays in lockstep with the board, with no other output channel to watch.
//!
//! `quintet` makes no rendering, input, or timing decisions.
//! A frontend maps its pointer coordinates to 1-based `(column, row)` [`Location`]s and draws whatever the events say; the engine does everything else.
//!
//! # Rules
//! Colored balls sit on a rectangular grid of cells.
//! A click on a ball selects it; a click on an empty cell asks the selected ball to travel there, which it may do only through 4-connected empty cells.
//! If the completed move lines up [`MIN_RUN_LENGTH`] or more same-colored balls along a row or column (or a diagonal, with the `diagonal-lines` feature), those balls come off and score one point each.
//! Any move that clears nothing is punished with [`SPAWN_COUNT`] new balls dealt onto random empty cells, and the game ends when the board fills up.
//!
//! # Internals
//! Cells live in a dense two-dimensional array.
//! Each move attempt re-expresses the currently open cells as an undirected graph G: a vertex corresponds to an empty cell (plus one for the origin, which the ball vacates), and edges encode 4-adjacency between vertices.
//! A breadth-first search over G yields a shortest route, with costs and predecessors held in per-search maps and ties between equal-length routes broken by the fixed row-major vertex order.
//! Line detection scans outward from the landing cell along each axis independently and unions the qualifying runs, so a ball landing at the bend of two lines clears both while being counted once.
//! All randomness is drawn from a single seeded generator owned by the board's spawner: the same seed and the same clicks always replay the same game.

pub use board::{Board, OutOfBounds};
pub use builder::{BoardBuilder, BuilderInvalidReason};
pub use cell::Cell;
pub use color::BallColor;
pub use event::Event;
pub use location::{Coord, Dimension, Location};
pub use matcher::MIN_RUN_LENGTH;
pub use spawn::SPAWN_COUNT;

pub(crate) mod board;
pub(crate) mod location;
pub(crate) mod color;
pub(crate) mod cell;
pub(crate) mod step;
pub(crate) mod event;
pub(crate) mod router;
pub(crate) mod matcher;
pub(crate) mod spawn;
pub mod builder;
