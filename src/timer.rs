use std::time::Duration;

/// A single repeating timer carrying the step it hands back when it fires.
///
/// There is no separate cancel handle: the owner cancels by dropping or
/// replacing the value.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatingTimer {
    period: Duration,
    elapsed: Duration,
    step: i64,
}

impl RepeatingTimer {
    pub fn new(period: Duration, step: i64) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
            step,
        }
    }

    #[cfg(test)]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[cfg(test)]
    pub fn period(&self) -> Duration {
        self.period
    }

    #[cfg(test)]
    pub fn remaining(&self) -> Duration {
        self.period.saturating_sub(self.elapsed)
    }

    /// Adds `dt` to the accumulated time. Returns the step once a full period
    /// has passed; the remainder keeps counting towards the next firing.
    pub fn tick(&mut self, dt: Duration) -> Option<i64> {
        self.elapsed += dt;
        if self.period.is_zero() || self.elapsed < self.period {
            return None;
        }
        self.elapsed -= self.period;
        Some(self.step)
    }
}
