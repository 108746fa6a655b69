//! Percentage component.

use super::RenderContext;

/// Renders completion as a percentage, e.g. `42%` or `66.7%`.
///
/// When the total is unknown (or zero) there is no fraction to show and
/// the component renders the `?%` placeholder instead.
#[derive(Debug, Clone)]
pub struct Percentage {
    precision: usize,
}

impl Percentage {
    /// Creates a renderer showing `precision` decimal places.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Renders the percentage; `precision` overrides the configured
    /// decimal places for this call only.
    pub fn render(&self, ctx: &RenderContext, precision: Option<usize>) -> String {
        let precision = precision.unwrap_or(self.precision);
        match ctx.percent {
            Some(percent) => {
                let percent = percent.clamp(0.0, 1.0) * 100.0;
                format!("{:.*}%", precision, percent)
            }
            None => "?%".to_string(),
        }
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::new(0)
    }
}
