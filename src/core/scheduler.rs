//! Fixed-interval tick scheduler.
//!
//! The main loop feeds elapsed wall-clock time in; the scheduler answers how
//! many ticks are due. Time only accumulates while the scheduler is started.

use super::constants::MAX_FRAME_DT_MS;

#[derive(Debug, Clone)]
pub struct Scheduler {
    interval_ms: u64,
    running: bool,
    /// Sub-interval time accumulator (milliseconds).
    accumulated_ms: u64,
}

impl Scheduler {
    /// A stopped scheduler firing every `interval_ms` once started.
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            running: false,
            accumulated_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start firing. The first tick comes one full interval later.
    /// Starting a running scheduler changes nothing.
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.accumulated_ms = 0;
        }
    }

    /// Stop firing and drop any partial interval. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated_ms = 0;
    }

    /// Account for `dt_ms` of elapsed time and return the number of ticks due.
    ///
    /// `dt_ms` is clamped so a long stall cannot release a burst of ticks.
    pub fn advance(&mut self, dt_ms: u64) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulated_ms += dt_ms.min(MAX_FRAME_DT_MS);

        let mut due = 0;
        while self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms -= self.interval_ms;
            due += 1;
        }
        due
    }

    /// Milliseconds until the next tick, if running.
    pub fn time_to_next_ms(&self) -> Option<u64> {
        self.running
            .then(|| self.interval_ms.saturating_sub(self.accumulated_ms))
    }
}
