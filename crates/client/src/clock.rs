//! Tick pacing with pause and single-step.
use std::time::{Duration, Instant};

/// Decides when the next tick may run.
///
/// A running clock fires once more than `period` has passed since the last
/// tick. A paused clock fires only when a step was requested, once per
/// request.
#[derive(Clone, Debug)]
pub struct TickClock {
    period: Duration,
    paused: bool,
    step_requested: bool,
    last_tick: Option<Instant>,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            paused: false,
            step_requested: false,
            last_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
        self.step_requested = false;
    }

    /// Ask a paused clock for exactly one tick. No effect while running.
    pub fn request_step(&mut self) {
        if self.paused {
            self.step_requested = true;
        }
    }

    /// Returns whether a tick should run at `now`, recording it if so.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let due = if self.paused {
            std::mem::take(&mut self.step_requested)
        } else {
            self.last_tick
                .is_none_or(|last| now.saturating_duration_since(last) > self.period)
        };

        if due {
            self.last_tick = Some(now);
        }
        due
    }

    /// How long a running clock has to wait from `now` before it is due.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) if !self.paused => {
                self.period.saturating_sub(now.saturating_duration_since(last))
            }
            _ => Duration::ZERO,
        }
    }
}
