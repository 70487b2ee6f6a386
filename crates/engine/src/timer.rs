//! Drop timer: wall-clock gate that decides when gravity fires.

use std::time::{Duration, Instant};

/// Interval gate over [`Instant`]. `expired` returning true also resets the
/// reference point, so one elapsed interval can never fire twice.
#[derive(Debug)]
pub struct GameTimer {
    last: Instant,
    interval: Duration,
    paused: bool,
}

impl GameTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            last: Instant::now(),
            interval,
            paused: false,
        }
    }

    /// True once per elapsed interval. Never fires while paused.
    pub fn expired(&mut self) -> bool {
        if self.paused {
            return false;
        }
        if self.last.elapsed() >= self.interval {
            self.last = Instant::now();
            return true;
        }
        false
    }

    /// Pausing freezes the gate; resuming restarts a full interval rather
    /// than crediting time that passed while paused.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused && !paused {
            self.last = Instant::now();
        }
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Level changes adjust the interval in place; the current reference
    /// point is kept.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Forces the next `expired` call to fire.
    pub fn force_expire(&mut self) {
        if let Some(past) = Instant::now().checked_sub(self.interval) {
            self.last = past;
        }
    }
}
