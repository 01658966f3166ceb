//! Linear counter tween for the stats counters.

#[cfg(test)]
#[path = "tween_test.rs"]
mod tween_test;

/// Counts from 0 to `target` in equal steps, one step per tick.
///
/// The raw value after `n` ticks is `target * n / steps`; the display is its
/// floor until the raw value reaches the target, then exactly the target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTween {
    target: i64,
    steps: u32,
    tick: u32,
    done: bool,
}

impl CounterTween {
    /// `duration_ms / tick_ms` ticks; at least one.
    #[must_use]
    pub fn new(target: i64, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = (duration_ms / tick_ms.max(1)).max(1);
        Self { target, steps, tick: 0, done: false }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Stop early. Later steps return the target without advancing.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    /// Advance one tick and return the value to display.
    ///
    /// Once finished, keeps returning the target.
    pub fn step(&mut self) -> i64 {
        if self.done {
            return self.target;
        }
        self.tick = self.tick.saturating_add(1);
        let target = as_f64(self.target);
        let raw = target * f64::from(self.tick) / f64::from(self.steps);
        if raw >= target {
            self.done = true;
            return self.target;
        }
        floor_i64(raw)
    }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(value: i64) -> f64 {
    value as f64
}

#[allow(clippy::cast_possible_truncation)]
fn floor_i64(value: f64) -> i64 {
    value.floor() as i64
}
