//! Time system for fixed-timestep games
//!
//! - `Tick` - Logical time unit
//! - `Clock` - Tick counter with pause state
//! - `FixedStep` - Turns elapsed wall time into a number of due ticks

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A discrete tick identifier (logical time unit)
pub type Tick = u64;

/// Simulation clock state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clock {
    /// Number of ticks executed so far
    pub tick: Tick,
    /// Whether ticking is suspended
    pub paused: bool,
}

impl Clock {
    /// Create a new running clock at tick zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next tick
    pub fn advance(&mut self) {
        self.tick += 1;
    }

    /// Check if the clock is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Toggle pause, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Back to tick zero, running
    pub fn reset(&mut self) {
        self.tick = 0;
        self.paused = false;
    }
}

/// Fixed-timestep accumulator
///
/// Elapsed time is accumulated and drained in whole `interval`s. At most
/// `max_catch_up` ticks are reported per call; any older backlog is dropped.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    accumulator: Duration,
    max_catch_up: u32,
}

impl FixedStep {
    /// Default number of ticks allowed to run back-to-back after a stall
    pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

    /// Create an accumulator ticking every `interval`
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::InvalidConfig(
                "tick interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            interval,
            accumulator: Duration::ZERO,
            max_catch_up: Self::DEFAULT_MAX_CATCH_UP,
        })
    }

    /// Override the catch-up limit (minimum 1)
    pub fn with_max_catch_up(mut self, max: u32) -> Self {
        self.max_catch_up = max.max(1);
        self
    }

    /// The tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated towards the next tick
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulator)
    }

    /// Add `elapsed` and return how many ticks are due
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            due += 1;
            if due == self.max_catch_up {
                // drop the backlog, keep the phase
                while self.accumulator >= self.interval {
                    self.accumulator -= self.interval;
                }
                break;
            }
        }
        due
    }

    /// Forget any accumulated time
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
