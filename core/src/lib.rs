//! Rules engine for a Minesweeper game: grid construction with randomized
//! mine placement, reveal/flag state transitions, flood-fill disclosure,
//! flag-based win detection, and elapsed-time tracking. Rendering and input
//! handling live in frontend crates that call into [`Grid`] and consume its
//! [`GridEvent`] notifications.

pub use cell::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use grid::*;
pub use types::*;

mod cell;
mod error;
mod event;
mod generator;
mod grid;
mod timer;
mod types;
