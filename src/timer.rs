//! Lightweight debug timer.
//!
//! Logs the time elapsed between consecutive checkpoints at debug level.

use std::time::{Duration, Instant};
use tracing::debug;

/// Checkpoint timer owned by the caller.
#[derive(Debug, Clone)]
pub struct Timer {
    last: Instant,
    counter: usize,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Starts a new timer.
    pub fn new() -> Self {
        debug!("[timer] start");
        Self {
            last: Instant::now(),
            counter: 0,
        }
    }

    /// Records a checkpoint and returns the time since the previous one.
    pub fn tick(&mut self, title: &str) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        debug!(
            "[timer{:2}] {:.8} -> {}",
            self.counter,
            elapsed.as_secs_f64(),
            title
        );

        self.last = now;
        self.counter += 1;
        elapsed
    }

    /// Number of checkpoints recorded so far.
    pub fn count(&self) -> usize {
        self.counter
    }
}
