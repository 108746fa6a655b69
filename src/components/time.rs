//! Time component: elapsed and estimated-remaining durations.

use std::time::Duration;

use super::{format_clock, RenderContext};

/// Placeholder shown while the estimate is undefined.
const UNKNOWN_ESTIMATE: &str = "--:--";

/// Renders elapsed time and, when a total and a rate exist, the
/// estimated time remaining.
#[derive(Debug, Clone, Default)]
pub struct Time;

impl Time {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }

    /// Renders elapsed time as `MM:SS` (or `H:MM:SS`).
    pub fn render_elapsed(&self, ctx: &RenderContext) -> String {
        format_clock(ctx.elapsed)
    }

    /// Renders the estimated time remaining.
    ///
    /// The estimate is remaining progress divided by the smoothed rate.
    /// It is undefined — rendered as `--:--` — when the total is unknown
    /// or the rate is missing, non-positive, or non-finite. A finished
    /// bar always renders `00:00`.
    pub fn render_estimated(&self, ctx: &RenderContext) -> String {
        if ctx.finished {
            return format_clock(Duration::ZERO);
        }
        let total = match ctx.total {
            Some(total) => total,
            None => return UNKNOWN_ESTIMATE.to_string(),
        };
        let rate = match ctx.rate {
            Some(rate) if rate.is_finite() && rate > 0.0 => rate,
            _ => return UNKNOWN_ESTIMATE.to_string(),
        };

        let remaining = total.saturating_sub(ctx.current) as f64;
        format_clock(Duration::from_secs_f64(remaining / rate))
    }
}
