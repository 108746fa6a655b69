//! The output sink: owns the stream, knows whether it is a terminal, and
//! performs the redraw-in-place or append-a-line write for each refresh.
//!
//! On a terminal the previous line is overwritten using cursor-control
//! sequences (and cleared first when the new line is shorter). On
//! anything else — a pipe, a file, a capture buffer — control sequences
//! are suppressed and every refresh appends one newline-terminated line,
//! so redirected output stays readable.

use std::fmt;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::MoveToColumn;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::tty::IsTty;
use unicode_width::UnicodeWidthStr;

use crate::error::Result;

/// Width assumed when the sink is not a terminal (or its size is
/// unavailable).
const FALLBACK_WIDTH: usize = 80;

enum Sink {
    Stderr(io::Stderr),
    Stdout(io::Stdout),
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Sink::Stderr(w) => w,
            Sink::Stdout(w) => w,
            Sink::Writer(w) => w,
        }
    }
}

/// The destination a progress bar draws to.
pub struct Output {
    sink: Sink,
    terminal: bool,
    width_override: Option<usize>,
    throttle: Duration,
    last_refresh: Option<Instant>,
    /// Visible width of the last rendered line, used to decide whether the
    /// next overwrite needs an explicit clear.
    last_line_width: usize,
}

impl Output {
    /// Draws to standard error (the default sink).
    pub fn stderr() -> Self {
        let terminal = io::stderr().is_tty();
        Self::build(Sink::Stderr(io::stderr()), terminal, None)
    }

    /// Draws to standard output.
    pub fn stdout() -> Self {
        let terminal = io::stdout().is_tty();
        Self::build(Sink::Stdout(io::stdout()), terminal, None)
    }

    /// Draws to an arbitrary writer in non-terminal (append-only) mode.
    pub fn writer(writer: Box<dyn Write + Send>) -> Self {
        Self::build(Sink::Writer(writer), false, None)
    }

    /// Draws to an arbitrary writer with terminal semantics and a fixed
    /// width. Useful for capturing terminal-mode output in tests.
    pub fn terminal_writer(writer: Box<dyn Write + Send>, width: usize) -> Self {
        Self::build(Sink::Writer(writer), true, Some(width))
    }

    fn build(sink: Sink, terminal: bool, width_override: Option<usize>) -> Self {
        Self {
            sink,
            terminal,
            width_override,
            throttle: Duration::ZERO,
            last_refresh: None,
            last_line_width: 0,
        }
    }

    /// Whether the sink is treated as an interactive terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Sets the minimum interval between unforced refreshes.
    pub fn set_throttle(&mut self, interval: Duration) {
        self.throttle = interval;
    }

    /// The width available for one rendered line.
    pub fn width(&self) -> usize {
        if let Some(width) = self.width_override {
            return width;
        }
        if self.terminal {
            if let Ok((columns, _rows)) = terminal::size() {
                return columns as usize;
            }
        }
        FALLBACK_WIDTH
    }

    /// Writes one rendered line.
    ///
    /// Unforced refreshes arriving faster than the throttle interval are
    /// skipped. In terminal mode the line overwrites the previous one; in
    /// append mode it is written with a trailing newline.
    pub fn refresh(&mut self, line: &str, force: bool) -> Result<()> {
        let now = Instant::now();
        if !force && self.throttle > Duration::ZERO {
            if let Some(last) = self.last_refresh {
                if now.duration_since(last) < self.throttle {
                    return Ok(());
                }
            }
        }
        self.last_refresh = Some(now);

        let line_width = UnicodeWidthStr::width(line);
        let needs_clear = line_width < self.last_line_width;

        if self.terminal {
            let mut writer = self.sink.writer();
            crossterm::queue!(&mut writer, MoveToColumn(0))?;
            if needs_clear {
                crossterm::queue!(&mut writer, Clear(ClearType::CurrentLine))?;
            }
            writer.write_all(line.as_bytes())?;
            writer.flush()?;
        } else {
            let writer = self.sink.writer();
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }

        self.last_line_width = line_width;
        Ok(())
    }

    /// Prints `message` on its own line without corrupting the bar.
    ///
    /// In terminal mode the current line is cleared first and `redraw` —
    /// the bar's rendered line, when one is wanted — is drawn again
    /// beneath the message. In append mode the message is simply written
    /// through.
    pub fn log(&mut self, message: &str, redraw: Option<&str>) -> Result<()> {
        if self.terminal {
            let mut writer = self.sink.writer();
            crossterm::queue!(&mut writer, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            writer.write_all(message.as_bytes())?;
            writer.write_all(b"\n")?;
            if let Some(line) = redraw {
                writer.write_all(line.as_bytes())?;
            }
            writer.flush()?;
            self.last_line_width = redraw.map(UnicodeWidthStr::width).unwrap_or(0);
        } else {
            let writer = self.sink.writer();
            writer.write_all(message.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Erases the current line in terminal mode; a no-op otherwise.
    pub fn clear(&mut self) -> Result<()> {
        if self.terminal {
            let mut writer = self.sink.writer();
            crossterm::queue!(&mut writer, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            writer.flush()?;
            self.last_line_width = 0;
        }
        Ok(())
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = match &self.sink {
            Sink::Stderr(_) => "stderr",
            Sink::Stdout(_) => "stdout",
            Sink::Writer(_) => "writer",
        };
        f.debug_struct("Output")
            .field("sink", &sink)
            .field("terminal", &self.terminal)
            .field("throttle", &self.throttle)
            .finish()
    }
}
