//! Bar component: the glyph strip showing completion, or motion when the
//! total is unknown.

use once_cell::sync::Lazy;

use super::RenderContext;

/// Glyphs used to draw the bar.
///
/// Each glyph is expected to occupy a single terminal column. `fill`
/// draws completed cells, `head` draws the leading edge of the filled
/// region while work is in flight, and `remainder` draws everything
/// still to come.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarStyle {
    /// Glyph for completed cells.
    pub fill: String,
    /// Glyph for the cell at the front of the filled region.
    pub head: String,
    /// Glyph for cells not yet reached.
    pub remainder: String,
}

/// Solid block style: `█████░░░░░`.
pub static BLOCK: Lazy<BarStyle> = Lazy::new(|| BarStyle {
    fill: "█".to_string(),
    head: "█".to_string(),
    remainder: "░".to_string(),
});

/// Classic ASCII style with a leading edge: `====>-----`.
pub static ASCII: Lazy<BarStyle> = Lazy::new(|| BarStyle {
    fill: "=".to_string(),
    head: ">".to_string(),
    remainder: "-".to_string(),
});

/// Hash style: `#####.....`.
pub static HASH: Lazy<BarStyle> = Lazy::new(|| BarStyle {
    fill: "#".to_string(),
    head: "#".to_string(),
    remainder: ".".to_string(),
});

/// Milliseconds per step of the indeterminate animation.
const INDETERMINATE_STEP_MS: u128 = 125;

/// Renders the bar strip for a given cell width.
///
/// With a known total the strip fills proportionally to completion. With
/// an unknown total it shows a segment bouncing across the strip; the
/// segment's position is derived purely from elapsed time, so renders
/// are deterministic for a given timer reading.
#[derive(Debug, Clone)]
pub struct Bar {
    style: BarStyle,
}

impl Bar {
    /// Creates a bar using the given glyph style.
    pub fn new(style: BarStyle) -> Self {
        Self { style }
    }

    /// Replaces the fill glyph (and the head, which tracks it).
    pub fn set_progress_mark(&mut self, mark: impl Into<String>) {
        let mark = mark.into();
        self.style.head = mark.clone();
        self.style.fill = mark;
    }

    /// Replaces the remainder glyph.
    pub fn set_remainder_mark(&mut self, mark: impl Into<String>) {
        self.style.remainder = mark.into();
    }

    /// Draws the strip at `width` cells for the given snapshot.
    pub fn render(&self, ctx: &RenderContext, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        match ctx.percent {
            Some(percent) => self.render_determinate(percent, ctx.finished, width),
            None if ctx.finished => self.render_determinate(1.0, true, width),
            None => self.render_indeterminate(ctx, width),
        }
    }

    fn render_determinate(&self, percent: f64, finished: bool, width: usize) -> String {
        let percent = percent.clamp(0.0, 1.0);
        let filled = ((width as f64) * percent).floor() as usize;
        let filled = filled.min(width);

        let mut out = String::with_capacity(width * 3);
        if finished || filled == width {
            for _ in 0..width {
                out.push_str(&self.style.fill);
            }
            return out;
        }
        if filled > 0 {
            for _ in 0..filled - 1 {
                out.push_str(&self.style.fill);
            }
            out.push_str(&self.style.head);
        }
        for _ in filled..width {
            out.push_str(&self.style.remainder);
        }
        out
    }

    fn render_indeterminate(&self, ctx: &RenderContext, width: usize) -> String {
        let segment = (width / 4).max(1).min(width);
        let travel = width - segment;

        let position = if travel == 0 || !ctx.started {
            0
        } else {
            // Bounce: 0 -> travel -> 0, one step per interval.
            let period = 2 * travel;
            let step = (ctx.elapsed.as_millis() / INDETERMINATE_STEP_MS) as usize % period;
            if step <= travel {
                step
            } else {
                period - step
            }
        };

        let mut out = String::with_capacity(width * 3);
        for cell in 0..width {
            if cell >= position && cell < position + segment {
                out.push_str(&self.style.fill);
            } else {
                out.push_str(&self.style.remainder);
            }
        }
        out
    }
}

impl Default for Bar {
    fn default() -> Self {
        Self::new(BLOCK.clone())
    }
}
