use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{RecvTimeoutError, Sender, bounded};

use crate::event::GridEvent;

/// Recurring tick source: once per interval it bumps the shared elapsed
/// counter by 1 and pushes a [`GridEvent::TimeElapsed`] notification. Its
/// only shared state is that counter.
pub(crate) struct Ticker {
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub(crate) fn spawn(
        interval: Duration,
        elapsed: Arc<AtomicU32>,
        events: Sender<GridEvent>,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);
        let handle = thread::spawn(move || {
            loop {
                match shutdown_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        elapsed.fetch_add(1, Ordering::Relaxed);
                        if events.send(GridEvent::TimeElapsed).is_err() {
                            break;
                        }
                    }
                    _ => break,
                }
            }
        });

        Self {
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// Halts future ticks. Safe to call repeatedly.
    pub(crate) fn stop(&mut self) {
        // dropping the sender wakes the blocked ticker thread
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
