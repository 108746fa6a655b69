//! The progress counter: a current count against an optional total.
//!
//! # Overflow and underflow policy
//!
//! The counter is saturating in both directions: decrementing never goes
//! below zero, and when a total is known, incrementing or assigning never
//! goes above it — the bar never renders past 100%. With an unknown total
//! the count grows freely.

/// Current count and optional total defining completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    current: u64,
    total: Option<u64>,
}

impl Progress {
    /// Creates a counter at zero. `total` of `None` means unknown
    /// (indeterminate mode).
    pub fn new(total: Option<u64>) -> Self {
        Self { current: 0, total }
    }

    /// The current count.
    pub fn current(&self) -> u64 {
        self.current
    }

    /// The total, if known.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Advances the count by one.
    pub fn increment(&mut self) {
        self.increment_by(1);
    }

    /// Advances the count by `step`, clamped to the total when one is known.
    pub fn increment_by(&mut self, step: u64) {
        self.set(self.current.saturating_add(step));
    }

    /// Moves the count back by one.
    pub fn decrement(&mut self) {
        self.decrement_by(1);
    }

    /// Moves the count back by `step`, saturating at zero.
    pub fn decrement_by(&mut self, step: u64) {
        self.current = self.current.saturating_sub(step);
    }

    /// Assigns the count directly, clamped to the total when one is known.
    pub fn set(&mut self, value: u64) {
        self.current = match self.total {
            Some(total) => value.min(total),
            None => value,
        };
    }

    /// Replaces the total. A shrinking total clamps the current count.
    pub fn set_total(&mut self, total: Option<u64>) {
        self.total = total;
        if let Some(total) = total {
            self.current = self.current.min(total);
        }
    }

    /// Jumps the count to the total, when one is known.
    pub fn finish(&mut self) {
        if let Some(total) = self.total {
            self.current = total;
        }
    }

    /// Returns the counter to `starting_at`, keeping the total.
    pub fn reset(&mut self, starting_at: u64) {
        self.current = 0;
        self.set(starting_at);
    }

    /// True when the total is known and the count has reached it.
    pub fn is_finished(&self) -> bool {
        match self.total {
            Some(total) => self.current >= total,
            None => false,
        }
    }

    /// Completion as a fraction in `0.0..=1.0`, or `None` when the total is
    /// unknown or zero (callers render a placeholder instead of dividing).
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(0) | None => None,
            Some(total) => Some((self.current as f64 / total as f64).clamp(0.0, 1.0)),
        }
    }
}
