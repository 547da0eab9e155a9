use crate::color::BallColor;
use crate::location::Location;

/// One observable consequence of an action on a [`Board`](crate::Board).
///
/// Events are the engine's only output channel: every action returns the
/// ordered sequence of events it caused, and replaying that sequence over the
/// prior state reproduces the board exactly. Payloads are values copied at
/// emission time, never references into live board state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A ball appeared at `location`, in the opening deal or a post-move spawn round.
    AddBall {
        /// The cell the ball appeared on.
        location: Location,
        /// The ball's color.
        color: BallColor,
    },
    /// The ball at `location` became the current selection.
    SelectBall {
        /// The selected cell.
        location: Location,
    },
    /// The ball at `location` stopped being the current selection.
    DeselectBall {
        /// The formerly selected cell.
        location: Location,
    },
    /// A ball travelled along `path` from its first location to its last.
    MoveBall {
        /// Every cell visited, origin and destination inclusive, in travel order.
        path: Vec<Location>,
        /// The color of the moved ball.
        color: BallColor,
    },
    /// The balls on `cells` formed completed lines and were removed.
    ///
    /// `cells` is deduplicated (a cell shared by two qualifying lines appears
    /// once) and sorted by column, then row. Always immediately followed by
    /// an [`UpdateScore`](Event::UpdateScore).
    LineCompleted {
        /// The cleared cells.
        cells: Vec<Location>,
    },
    /// The score changed after a clear.
    UpdateScore {
        /// The cumulative score for the whole game so far.
        score: u32,
    },
    /// The requested move has no open route; the board did not change.
    ImpossibleMove,
    /// The board filled up and no further move is possible.
    ///
    /// Emitted at most once per action, directly after the [`AddBall`](Event::AddBall)
    /// that took the last empty cell (or alone, if a spawn round began on an
    /// already full board).
    GameOver,
}
