use serde::{Deserialize, Serialize};

use crate::types::Coord;

/// Notifications pushed by the grid to a single subscriber, typically the
/// presentation layer. Subscribe once per game instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridEvent {
    /// Flag accounting changed; re-read the flagged count to refresh a
    /// mines-remaining display.
    CounterChanged,
    /// One time unit passed; re-read the elapsed time.
    TimeElapsed,
    /// A specific cell should be opened, fired during flood fill for each
    /// neighbor that gets auto-opened.
    RevealRequested { row: Coord, col: Coord },
    /// The board is fully solved. Never fired for a loss: revealing a mined
    /// cell is the caller's business to detect and act on.
    Won,
}
