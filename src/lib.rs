#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/barline/")]

//! # barline
//!
//! A synchronous, single-line terminal progress bar: a counter, a timer
//! and a handful of display components assembled through a format
//! template and redrawn in place after every state change.
//!
//! ## Overview
//!
//! Everything is driven by the caller — there is no background thread,
//! no internal locking and no hidden refresh loop. Each mutating call on
//! [`ProgressBar`] updates the counter and/or timer and then performs
//! exactly one synchronous write to the output sink. On a terminal the
//! line is overwritten in place; on a pipe or file each refresh appends
//! a plain line instead, so redirected output stays readable.
//!
//! ## Components
//!
//! - **Timer** — elapsed wall-clock time across start/pause/resume/stop
//! - **Progress** — current count against an optional total
//! - **Title / Bar / Percentage / Rate / Time** — the rendered fields
//! - **Output** — the sink, terminal detection and redraw mechanics
//! - **Template** — the format string gluing the fields together
//!
//! ## Quick Start
//!
//! ```no_run
//! use barline::{with_title, with_total, ProgressBar};
//!
//! fn main() -> barline::Result<()> {
//!     let mut bar = ProgressBar::new([with_total(100), with_title("copying")])?;
//!     for _ in 0..100 {
//!         bar.increment()?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Format templates
//!
//! The rendered line is described by a template such as
//! `"{title}: [{bar}] {pos}/{len} {percent} ({elapsed}, {eta})"`. The
//! bar is elastic: it absorbs whatever width the other fields leave
//! over, and is the first thing compressed when the terminal is narrow.
//! See the [`format`] module for the full syntax.
//!
//! ## Unknown totals
//!
//! A bar built without [`with_total`] runs in indeterminate mode:
//! the strip shows a bouncing segment, and percentage/ETA fields render
//! placeholders instead of dividing by an unknown.

pub mod components;
pub mod error;
pub mod format;
pub mod output;
pub mod progress;
pub mod progress_bar;
pub mod timer;

pub use components::{BarStyle, ASCII, BLOCK, HASH};
pub use error::{Error, Result};
pub use format::DEFAULT_FORMAT;
pub use output::Output;
pub use progress::Progress;
pub use progress_bar::{
    with_bar_style, with_clock, with_format, with_output, with_progress_mark,
    with_remainder_mark, with_starting_at, with_throttle, with_title, with_total,
    without_autofinish, without_autostart, ProgressBar, ProgressBarOption,
};
pub use timer::{Clock, MonotonicClock, Timer};

/// Prelude module for convenient imports.
///
/// ```no_run
/// use barline::prelude::*;
///
/// # fn main() -> barline::Result<()> {
/// let mut bar = ProgressBar::new([with_total(10)])?;
/// bar.increment()?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::components::{BarStyle, ASCII, BLOCK, HASH};
    pub use crate::error::{Error, Result};
    pub use crate::output::Output;
    pub use crate::progress_bar::{
        with_bar_style, with_clock, with_format, with_output, with_progress_mark,
        with_remainder_mark, with_starting_at, with_throttle, with_title, with_total,
        without_autofinish, without_autostart, ProgressBar, ProgressBarOption,
    };
    pub use crate::timer::{Clock, MonotonicClock};
}
