//! Error handling for barline.
//!
//! All fallible operations in the crate return [`Result`]. There are only
//! two failure classes: a malformed format template, surfaced at the first
//! render after the template is set, and an I/O failure on the output sink,
//! surfaced to the caller of the operation that triggered the write.
//!
//! Invalid lifecycle transitions (pausing a bar that is not running,
//! resuming one that was never started, and so on) are deliberately *not*
//! errors; they are silent no-ops so that progress-reporting code never has
//! to guard its own state.

use std::io;
use thiserror::Error;

/// Errors that can happen when driving a progress bar.
#[derive(Error, Debug)]
pub enum Error {
    /// The format template could not be parsed.
    ///
    /// Returned by the first render after a bad template was installed,
    /// either at construction (with `autostart`) or from
    /// [`ProgressBar::set_format`](crate::ProgressBar::set_format).
    #[error("invalid format template: {0}")]
    Format(String),

    /// Writing to the output sink failed.
    ///
    /// The error is propagated from the operation that triggered the
    /// refresh; nothing is retried.
    #[error("I/O error")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a barline [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
