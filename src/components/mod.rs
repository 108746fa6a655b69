//! Display components for a progress bar.
//!
//! Each component is a stateless renderer: it holds only its own display
//! configuration and reads everything else from a [`RenderContext`]
//! snapshot taken by the façade at render time. The context is the only
//! surface a component can see, which keeps the read path explicit — no
//! component reaches back into the bar's mutable state.

pub mod bar;
pub mod percentage;
pub mod rate;
pub mod time;
pub mod title;

pub use bar::{Bar, BarStyle, ASCII, BLOCK, HASH};
pub use percentage::Percentage;
pub use rate::{Rate, RateEstimator};
pub use time::Time;
pub use title::Title;

use std::time::Duration;

/// A read-only snapshot of the bar's state, taken once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    /// Current progress count.
    pub current: u64,
    /// Total count, if known.
    pub total: Option<u64>,
    /// Completion fraction in `0.0..=1.0`; `None` when the total is
    /// unknown or zero.
    pub percent: Option<f64>,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
    /// Smoothed progress rate in counts per second; `None` before the
    /// first sample interval has elapsed.
    pub rate: Option<f64>,
    /// Whether the timer has been started.
    pub started: bool,
    /// Whether the bar has finished.
    pub finished: bool,
}

/// The component set a template renders from, borrowed from the façade.
#[derive(Debug)]
pub struct Components<'a> {
    /// Title renderer.
    pub title: &'a Title,
    /// Bar glyph renderer.
    pub bar: &'a Bar,
    /// Percentage renderer.
    pub percentage: &'a Percentage,
    /// Rate renderer.
    pub rate: &'a Rate,
    /// Elapsed/estimated time renderer.
    pub time: &'a Time,
}

/// Formats a duration as `MM:SS`, or `H:MM:SS` once hours are involved.
pub(crate) fn format_clock(duration: Duration) -> String {
    let seconds = duration.as_secs();
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::from_secs(0)), "00:00");
        assert_eq!(format_clock(Duration::from_secs(59)), "00:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "01:01");
        assert_eq!(format_clock(Duration::from_secs(3600)), "1:00:00");
        assert_eq!(format_clock(Duration::from_secs(3723)), "1:02:03");
    }
}
