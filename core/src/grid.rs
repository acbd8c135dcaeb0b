use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, unbounded};
use ndarray::Array2;

use crate::cell::Cell;
use crate::error::{GridError, Result};
use crate::event::GridEvent;
use crate::generator::{MinePlacer, RandomPlacer};
use crate::timer::Ticker;
use crate::types::{Coord, neighbors};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// The rules engine of a Minesweeper game: a rectangular grid of cells,
/// randomized mine placement, reveal/flag state transitions, flood-fill
/// disclosure, flag-based win detection, and a passive elapsed-time ticker.
///
/// Cells are indexed `[row, col]` with the row axis bounded by `width` and
/// the column axis by `height`. Win is the only terminal state the grid
/// detects itself; the caller is responsible for stopping the grid and
/// reporting a loss after revealing a mined cell.
pub struct Grid {
    width: Coord,
    height: Coord,
    mines: i32,
    cells: Array2<Cell>,
    correct_flags: i32,
    wrong_flags: i32,
    elapsed: Arc<AtomicU32>,
    won: bool,
    tick_interval: Duration,
    ticker: Option<Ticker>,
    events_tx: Sender<GridEvent>,
    events_rx: Receiver<GridEvent>,
}

impl Grid {
    /// Validates the configuration and stores it. Cells are not allocated
    /// until [`start`](Self::start).
    pub fn new(width: Coord, height: Coord, mines: i32) -> Result<Self> {
        Self::with_tick_interval(width, height, mines, DEFAULT_TICK_INTERVAL)
    }

    /// Same as [`new`](Self::new) with a custom timer period.
    pub fn with_tick_interval(
        width: Coord,
        height: Coord,
        mines: i32,
        tick_interval: Duration,
    ) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidConfiguration);
        }
        let total = width
            .checked_mul(height)
            .ok_or(GridError::InvalidConfiguration)?;
        if mines < 0 || mines >= total {
            return Err(GridError::InvalidConfiguration);
        }

        let (events_tx, events_rx) = unbounded();
        Ok(Self {
            width,
            height,
            mines,
            cells: Array2::default((0, 0)),
            correct_flags: 0,
            wrong_flags: 0,
            elapsed: Arc::new(AtomicU32::new(0)),
            won: false,
            tick_interval,
            ticker: None,
            events_tx,
            events_rx,
        })
    }

    /// Notification stream. A single consumer is expected; subscribe again
    /// on every new grid instance.
    pub fn subscribe(&self) -> Receiver<GridEvent> {
        self.events_rx.clone()
    }

    /// (Re)initializes a playable game: fresh cells, random mines, timer
    /// running from zero.
    pub fn start(&mut self) {
        self.start_with(&mut RandomPlacer::from_entropy());
    }

    /// Deterministic variant of [`start`](Self::start) for tests and replays.
    pub fn start_seeded(&mut self, seed: u64) {
        self.start_with(&mut RandomPlacer::seeded(seed));
    }

    pub fn start_with(&mut self, placer: &mut dyn MinePlacer) {
        self.stop();
        self.correct_flags = 0;
        self.wrong_flags = 0;
        self.elapsed.store(0, Ordering::Relaxed);
        self.won = false;

        let mask = placer.place(self.width, self.height, self.mines);
        self.cells = mask.mapv(Cell::from_mined);
        log::debug!(
            "grid started: {}x{} with {} mines",
            self.width,
            self.height,
            self.mines
        );

        self.ticker = Some(Ticker::spawn(
            self.tick_interval,
            Arc::clone(&self.elapsed),
            self.events_tx.clone(),
        ));
    }

    /// Halts the timer. Idempotent; reveal and flag calls remain possible.
    pub fn stop(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.stop();
        }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn mine_count(&self) -> i32 {
        self.mines
    }

    /// Number of currently flagged cells, right or wrong.
    pub fn flagged_count(&self) -> i32 {
        self.correct_flags + self.wrong_flags
    }

    /// Time units elapsed since the current game started.
    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed.load(Ordering::Relaxed)
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    /// Single source of truth for bounds checking. The row axis is bounded
    /// by `width` and the column axis by `height`, as laid out by the
    /// original board.
    pub fn is_in_grid(&self, row: Coord, col: Coord) -> bool {
        row >= 0 && row < self.width && col >= 0 && col < self.height
    }

    /// Snapshot of a cell's state, `None` out of bounds or before `start`.
    pub fn cell_at(&self, row: Coord, col: Coord) -> Option<Cell> {
        self.cell(row, col).copied()
    }

    /// `false` out of bounds rather than failing: the flood fill probes
    /// positions outside the grid and treats them as "no bomb here".
    pub fn is_bomb(&self, row: Coord, col: Coord) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_mined())
    }

    pub fn is_flagged(&self, row: Coord, col: Coord) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_flagged())
    }

    pub fn is_revealed(&self, row: Coord, col: Coord) -> bool {
        self.cell(row, col).is_some_and(|cell| cell.is_revealed())
    }

    /// Reveals the cell and returns its surrounding-mine count, flood-filling
    /// the connected zero-count region when that count is 0. Returns 0
    /// without effect on an already-revealed or flagged cell. Fails with
    /// [`GridError::InvalidCoordinate`] out of bounds; correct callers
    /// validate coordinates first, so that path is a caller bug.
    pub fn reveal_plate(&mut self, row: Coord, col: Coord) -> Result<u8> {
        if self.cell(row, col).is_none() {
            return Err(GridError::InvalidCoordinate);
        }

        let count = self.check_cell(row, col);
        self.check_finish();
        Ok(count)
    }

    /// Toggles the flag on a cell, keeping the correct/wrong counters in
    /// step, then re-evaluates the win condition. Emits
    /// [`GridEvent::CounterChanged`] unconditionally.
    pub fn flag_mine(&mut self, row: Coord, col: Coord) -> Result<()> {
        let Some(cell) = self.cell_at(row, col) else {
            return Err(GridError::InvalidCoordinate);
        };

        // counter bookkeeping keys off the pre-toggle state
        let delta = if cell.is_flagged() { -1 } else { 1 };
        if cell.is_mined() {
            self.correct_flags += delta;
        } else {
            self.wrong_flags += delta;
        }
        self.cells[(row as usize, col as usize)].toggle_flag();

        self.check_finish();
        self.emit(GridEvent::CounterChanged);
        Ok(())
    }

    /// Requests that a single cell be opened by the presentation layer,
    /// emitting [`GridEvent::RevealRequested`]. Silently tolerates
    /// out-of-bounds and already-revealed cells: this is the recursive
    /// neighbor-expansion entry point and redundant calls are expected.
    pub fn open_plate(&mut self, row: Coord, col: Coord) {
        if let Some(cell) = self.cell(row, col)
            && !cell.is_revealed()
        {
            self.emit(GridEvent::RevealRequested { row, col });
        }
    }

    fn cell(&self, row: Coord, col: Coord) -> Option<&Cell> {
        if self.is_in_grid(row, col) {
            // before `start` the array is empty and every reference misses
            self.cells.get((row as usize, col as usize))
        } else {
            None
        }
    }

    fn emit(&self, event: GridEvent) {
        let _ = self.events_tx.send(event);
    }

    fn adjacent_mines(&self, row: Coord, col: Coord) -> u8 {
        neighbors(row, col)
            .filter(|&(r, c)| self.is_bomb(r, c))
            .count() as u8
    }

    /// The check algorithm: reveal first, count the 8 neighbors, and expand
    /// the whole zero-count region through an explicit worklist. Each cell
    /// transitions to revealed at most once, so the traversal terminates on
    /// any grid. Auto-opened neighbors are announced with
    /// [`GridEvent::RevealRequested`]; flagged ones are announced but kept
    /// shut, the flag acting as a reveal guard.
    fn check_cell(&mut self, row: Coord, col: Coord) -> u8 {
        {
            let cell = &self.cells[(row as usize, col as usize)];
            if cell.is_revealed() || cell.is_flagged() {
                return 0;
            }
        }

        // revealed first, so the expansion below can never re-enter this cell
        self.cells[(row as usize, col as usize)].reveal();
        let count = self.adjacent_mines(row, col);
        log::debug!("revealed ({row}, {col}), {count} adjacent mines");

        if count == 0 {
            let mut to_visit: VecDeque<(Coord, Coord)> = neighbors(row, col).collect();

            while let Some((visit_row, visit_col)) = to_visit.pop_front() {
                let Some(cell) = self.cell_at(visit_row, visit_col) else {
                    // out-of-grid probes are expected here
                    continue;
                };
                if cell.is_revealed() {
                    continue;
                }

                self.emit(GridEvent::RevealRequested {
                    row: visit_row,
                    col: visit_col,
                });
                if cell.is_flagged() {
                    continue;
                }

                self.cells[(visit_row as usize, visit_col as usize)].reveal();
                let visit_count = self.adjacent_mines(visit_row, visit_col);
                log::trace!("flood fill opened ({visit_row}, {visit_col}), {visit_count} adjacent mines");

                if visit_count == 0 {
                    to_visit.extend(neighbors(visit_row, visit_col));
                }
            }
        }

        count
    }

    /// Won iff there are no wrong flags, the flagged count equals the mine
    /// count, and no safe cell is left unrevealed. All three are re-checked
    /// after every flag/reveal mutation; the grid never detects a loss.
    fn check_finish(&mut self) {
        if self.won {
            return;
        }
        if self.wrong_flags != 0 || self.flagged_count() != self.mines {
            return;
        }

        let finished = self
            .cells
            .iter()
            .all(|cell| cell.is_revealed() || cell.is_mined());
        if finished {
            self.won = true;
            self.stop();
            log::info!("grid solved in {}s", self.elapsed_secs());
            self.emit(GridEvent::Won);
        }
    }
}

impl Drop for Grid {
    fn drop(&mut self) {
        self.stop();
    }
}
