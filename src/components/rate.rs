//! Rate component and the smoothing estimator behind it.
//!
//! The estimator keeps a bounded window of `(elapsed, count)` samples and
//! reports a simple moving average of the per-sample rates, which keeps
//! the displayed figure from jittering with every increment. The
//! [`Rate`] component itself is stateless; the façade owns the estimator
//! and feeds its result into the render snapshot.

use std::collections::VecDeque;
use std::time::Duration;

use super::RenderContext;

/// Number of samples the smoothing window retains.
const WINDOW_CAPACITY: usize = 16;

/// Smooths progress deltas into a counts-per-second figure.
#[derive(Debug, Clone)]
pub struct RateEstimator {
    samples: VecDeque<(Duration, u64)>,
}

impl RateEstimator {
    /// Creates an empty estimator.
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(WINDOW_CAPACITY),
        }
    }

    /// Records one `(elapsed, count)` observation.
    pub fn record(&mut self, elapsed: Duration, count: u64) {
        if let Some(&(last_elapsed, last_count)) = self.samples.back() {
            if last_elapsed == elapsed && last_count == count {
                return;
            }
        }
        if self.samples.len() == WINDOW_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back((elapsed, count));
    }

    /// The smoothed rate in counts per second.
    ///
    /// `None` until at least two samples separated in time exist — before
    /// the first sample interval has elapsed the rate is undefined and
    /// callers render a placeholder.
    pub fn rate(&self) -> Option<f64> {
        let mut rates = Vec::new();
        for pair in self.samples.iter().zip(self.samples.iter().skip(1)) {
            let (&(t0, c0), &(t1, c1)) = pair;
            let dt = t1.saturating_sub(t0).as_secs_f64();
            if dt > 0.0 {
                let dc = c1 as f64 - c0 as f64;
                rates.push(dc / dt);
            }
        }
        if rates.is_empty() {
            return None;
        }
        let mean = rates.iter().sum::<f64>() / rates.len() as f64;
        mean.is_finite().then_some(mean)
    }

    /// Drops every sample.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

impl Default for RateEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the smoothed rate, e.g. `12.5`, or `?` while it is undefined.
#[derive(Debug, Clone)]
pub struct Rate {
    precision: usize,
}

impl Rate {
    /// Creates a renderer showing `precision` decimal places.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Renders the rate; `precision` overrides the configured decimal
    /// places for this call only.
    pub fn render(&self, ctx: &RenderContext, precision: Option<usize>) -> String {
        let precision = precision.unwrap_or(self.precision);
        match ctx.rate {
            Some(rate) => format!("{:.*}", precision, rate),
            None => "?".to_string(),
        }
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self::new(1)
    }
}
