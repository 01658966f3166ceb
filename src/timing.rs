//! Debounce and throttle over host-driven time.
//!
//! Neither type owns a timer. The debouncer hands out tickets that the host
//! carries through a scheduled task; only the newest ticket is still live when
//! its task comes back. The throttle is fed timestamps by the caller.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// Trailing-edge debounce.
///
/// Each `arm` supersedes every earlier ticket, so a burst of triggers yields
/// one live ticket: the one armed last, fired after the quiet period.
#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    generation: u64,
    fired: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trigger and return the ticket for its delayed task.
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Consume a returning ticket. True only for the newest, unfired ticket.
    pub fn fire(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.fired == ticket {
            return false;
        }
        self.fired = ticket;
        true
    }
}

/// Leading-edge throttle: at most one pass per `interval_ms`.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    #[must_use]
    pub fn new(interval_ms: u32) -> Self {
        Self { interval_ms: f64::from(interval_ms), last_ms: None }
    }

    /// Whether a call at `now_ms` may run. Records the pass when it may.
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_ms = Some(now_ms);
                true
            }
        }
    }
}
