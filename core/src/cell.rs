use serde::{Deserialize, Serialize};

/// State of a single grid position: mined, flagged, revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mined: bool,
    is_flagged: bool,
    is_revealed: bool,
}

impl Cell {
    pub(crate) const fn from_mined(is_mined: bool) -> Self {
        Self {
            is_mined,
            is_flagged: false,
            is_revealed: false,
        }
    }

    pub const fn is_mined(self) -> bool {
        self.is_mined
    }

    pub const fn is_flagged(self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(self) -> bool {
        self.is_revealed
    }

    /// One-way transition: a revealed cell never reverts.
    pub(crate) fn reveal(&mut self) {
        self.is_revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.is_flagged = !self.is_flagged;
    }
}
