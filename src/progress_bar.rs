//! The progress bar façade.
//!
//! [`ProgressBar`] owns the timer, the counter, the display components
//! and the output sink, and wires them together: every mutating call
//! updates the counter and/or timer and then performs exactly one
//! refresh. Lifecycle calls outside their valid transition are silent
//! no-ops.
//!
//! Construction uses the option pattern:
//!
//! ```no_run
//! use barline::{with_title, with_total, ProgressBar};
//!
//! # fn main() -> barline::Result<()> {
//! let mut bar = ProgressBar::new([with_total(50), with_title("files")])?;
//! for _ in 0..50 {
//!     bar.increment()?;
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::time::Duration;

use crate::components::{Bar, BarStyle, Components, Percentage, Rate, RateEstimator, RenderContext, Time, Title, BLOCK};
use crate::error::Result;
use crate::format::{Template, DEFAULT_FORMAT};
use crate::output::Output;
use crate::progress::Progress;
use crate::timer::{Clock, Timer};

/// A configuration option for [`ProgressBar::new`].
///
/// Built by the free `with_*`/`without_*` functions in this module and
/// applied in order over the defaults.
#[derive(Debug)]
pub enum ProgressBarOption {
    /// Sets the total count.
    Total(u64),
    /// Sets the title text.
    Title(String),
    /// Sets the format template.
    Format(String),
    /// Sets the initial progress count.
    StartingAt(u64),
    /// Controls whether the timer starts at construction.
    Autostart(bool),
    /// Controls whether reaching the total finishes the bar implicitly.
    Autofinish(bool),
    /// Sets the fill glyph (and its head).
    ProgressMark(String),
    /// Sets the remainder glyph.
    RemainderMark(String),
    /// Sets the whole glyph style.
    Style(BarStyle),
    /// Sets the minimum interval between unforced redraws.
    Throttle(Duration),
    /// Sets the output sink.
    Sink(Output),
    /// Sets the time source.
    TimeSource(Box<dyn Clock>),
}

/// Sets the total count; without this option the total is unknown and
/// the bar renders in indeterminate mode.
pub fn with_total(total: u64) -> ProgressBarOption {
    ProgressBarOption::Total(total)
}

/// Sets the title text (default: `"Progress"`).
pub fn with_title(title: impl Into<String>) -> ProgressBarOption {
    ProgressBarOption::Title(title.into())
}

/// Sets the format template (default: [`DEFAULT_FORMAT`]).
///
/// A malformed template is reported at the first render after
/// construction, not when the option is applied.
pub fn with_format(format: impl Into<String>) -> ProgressBarOption {
    ProgressBarOption::Format(format.into())
}

/// Starts the count at `value` instead of zero.
pub fn with_starting_at(value: u64) -> ProgressBarOption {
    ProgressBarOption::StartingAt(value)
}

/// Leaves the timer idle at construction; call
/// [`ProgressBar::start`] to begin timing.
pub fn without_autostart() -> ProgressBarOption {
    ProgressBarOption::Autostart(false)
}

/// Keeps the bar unfinished when the count reaches the total; only an
/// explicit [`ProgressBar::finish`] finishes it.
pub fn without_autofinish() -> ProgressBarOption {
    ProgressBarOption::Autofinish(false)
}

/// Sets the glyph drawn for completed bar cells.
pub fn with_progress_mark(mark: impl Into<String>) -> ProgressBarOption {
    ProgressBarOption::ProgressMark(mark.into())
}

/// Sets the glyph drawn for bar cells not yet reached.
pub fn with_remainder_mark(mark: impl Into<String>) -> ProgressBarOption {
    ProgressBarOption::RemainderMark(mark.into())
}

/// Sets the whole bar glyph style, e.g. [`crate::components::ASCII`].
pub fn with_bar_style(style: BarStyle) -> ProgressBarOption {
    ProgressBarOption::Style(style)
}

/// Skips unforced redraws that arrive within `interval` of the previous
/// one. Lifecycle transitions always redraw.
pub fn with_throttle(interval: Duration) -> ProgressBarOption {
    ProgressBarOption::Throttle(interval)
}

/// Sends output to `output` instead of standard error.
pub fn with_output(output: Output) -> ProgressBarOption {
    ProgressBarOption::Sink(output)
}

/// Reads time from `clock` instead of the real monotonic clock. Intended
/// for deterministic tests.
pub fn with_clock(clock: Box<dyn Clock>) -> ProgressBarOption {
    ProgressBarOption::TimeSource(clock)
}

/// Typed construction defaults; options mutate this in order.
#[derive(Debug)]
struct Config {
    autostart: bool,
    autofinish: bool,
    total: Option<u64>,
    starting_at: u64,
    title: String,
    format: String,
    style: BarStyle,
    throttle: Duration,
    output: Option<Output>,
    clock: Option<Box<dyn Clock>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autostart: true,
            autofinish: true,
            total: None,
            starting_at: 0,
            title: "Progress".to_string(),
            format: DEFAULT_FORMAT.to_string(),
            style: BLOCK.clone(),
            throttle: Duration::ZERO,
            output: None,
            clock: None,
        }
    }
}

impl ProgressBarOption {
    fn apply(self, config: &mut Config) {
        match self {
            Self::Total(total) => config.total = Some(total),
            Self::Title(title) => config.title = title,
            Self::Format(format) => config.format = format,
            Self::StartingAt(value) => config.starting_at = value,
            Self::Autostart(autostart) => config.autostart = autostart,
            Self::Autofinish(autofinish) => config.autofinish = autofinish,
            Self::ProgressMark(mark) => {
                config.style.head = mark.clone();
                config.style.fill = mark;
            }
            Self::RemainderMark(mark) => config.style.remainder = mark,
            Self::Style(style) => config.style = style,
            Self::Throttle(interval) => config.throttle = interval,
            Self::Sink(output) => config.output = Some(output),
            Self::TimeSource(clock) => config.clock = Some(clock),
        }
    }
}

/// A single-line terminal progress bar.
///
/// State machine: created → started → (paused ⇄ resumed) →
/// stopped/finished. Calls outside a valid transition are no-ops; the
/// only errors are I/O failures on the sink and malformed format
/// templates.
pub struct ProgressBar {
    timer: Timer,
    progress: Progress,
    title: Title,
    bar: Bar,
    percentage: Percentage,
    rate: Rate,
    time: Time,
    estimator: RateEstimator,
    output: Output,
    format: String,
    /// Parsed-template cache; `None` after a format or mark change.
    template: Option<Template>,
    autofinish: bool,
    finished: bool,
    starting_at: u64,
}

impl ProgressBar {
    /// Builds a bar from the given options and, unless
    /// [`without_autostart`] was passed, starts it and draws the first
    /// line.
    ///
    /// # Errors
    ///
    /// The autostart refresh surfaces a malformed format template or a
    /// sink write failure.
    pub fn new(options: impl IntoIterator<Item = ProgressBarOption>) -> Result<Self> {
        let mut config = Config::default();
        for option in options {
            option.apply(&mut config);
        }

        let timer = match config.clock {
            Some(clock) => Timer::with_clock(clock),
            None => Timer::new(),
        };
        let mut output = config.output.unwrap_or_else(Output::stderr);
        output.set_throttle(config.throttle);

        let mut progress = Progress::new(config.total);
        progress.set(config.starting_at);

        let mut bar = Self {
            timer,
            progress,
            title: Title::new(config.title),
            bar: Bar::new(config.style),
            percentage: Percentage::default(),
            rate: Rate::default(),
            time: Time::new(),
            estimator: RateEstimator::new(),
            output,
            format: config.format,
            template: None,
            autofinish: config.autofinish,
            finished: false,
            starting_at: config.starting_at,
        };

        if config.autostart {
            bar.start()?;
        }
        Ok(bar)
    }

    /// Starts the timer and draws the bar. No-op if already started.
    pub fn start(&mut self) -> Result<()> {
        if self.timer.started() {
            return Ok(());
        }
        self.output.clear()?;
        self.timer.start();
        self.estimator
            .record(self.timer.elapsed(), self.progress.current());
        self.refresh(true)
    }

    /// Finishes the bar: jumps the count to the total (when known),
    /// stops the timer and forces one final redraw. Idempotent.
    pub fn finish(&mut self) -> Result<()> {
        if self.is_finished() {
            return Ok(());
        }
        self.finished = true;
        self.progress.finish();
        self.timer.stop();
        self.refresh(true)
    }

    /// Freezes the timer. No-op while not running.
    pub fn pause(&mut self) -> Result<()> {
        if !self.timer.running() {
            return Ok(());
        }
        self.timer.pause();
        self.refresh(true)
    }

    /// Stops the timer; elapsed time is constant afterwards. No-op when
    /// already stopped or finished.
    pub fn stop(&mut self) -> Result<()> {
        if self.stopped() {
            return Ok(());
        }
        self.timer.stop();
        self.refresh(true)
    }

    /// Resumes a paused or stopped timer. No-op otherwise, and a
    /// finished bar stays finished.
    pub fn resume(&mut self) -> Result<()> {
        if self.is_finished() || !(self.timer.paused() || self.timer.stopped()) {
            return Ok(());
        }
        self.timer.resume();
        self.refresh(true)
    }

    /// Returns the bar to its initial state: count back to the starting
    /// value, timer and rate window cleared, finished flag dropped.
    pub fn reset(&mut self) -> Result<()> {
        self.finished = false;
        self.progress.reset(self.starting_at);
        self.timer.reset();
        self.estimator.reset();
        self.refresh(true)
    }

    /// Advances the count by one.
    pub fn increment(&mut self) -> Result<()> {
        self.update_progress(|progress| progress.increment())
    }

    /// Advances the count by `step`.
    pub fn increment_by(&mut self, step: u64) -> Result<()> {
        self.update_progress(|progress| progress.increment_by(step))
    }

    /// Moves the count back by one (never below zero).
    pub fn decrement(&mut self) -> Result<()> {
        self.update_progress(|progress| progress.decrement())
    }

    /// Moves the count back by `step` (never below zero).
    pub fn decrement_by(&mut self, step: u64) -> Result<()> {
        self.update_progress(|progress| progress.decrement_by(step))
    }

    /// Assigns the count directly.
    pub fn set_progress(&mut self, value: u64) -> Result<()> {
        self.update_progress(|progress| progress.set(value))
    }

    /// Replaces the total; `None` switches to indeterminate mode.
    pub fn set_total(&mut self, total: Option<u64>) -> Result<()> {
        self.update_progress(|progress| progress.set_total(total))
    }

    /// Replaces the title and redraws.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        self.refresh_with_format_change(|bar| bar.title.set_text(title))
    }

    /// Replaces the fill glyph and redraws.
    pub fn set_progress_mark(&mut self, mark: impl Into<String>) -> Result<()> {
        let mark = mark.into();
        self.refresh_with_format_change(|bar| bar.bar.set_progress_mark(mark))
    }

    /// Replaces the remainder glyph and redraws.
    pub fn set_remainder_mark(&mut self, mark: impl Into<String>) -> Result<()> {
        let mark = mark.into();
        self.refresh_with_format_change(|bar| bar.bar.set_remainder_mark(mark))
    }

    /// Replaces the format template and redraws.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`](crate::Error::Format) if the new
    /// template does not parse — surfaced here because the redraw is the
    /// first render after the change.
    pub fn set_format(&mut self, format: impl Into<String>) -> Result<()> {
        self.format = format.into();
        self.template = None;
        self.refresh(true)
    }

    /// Renders the current state to a string without writing to the
    /// sink.
    ///
    /// A `format` override replaces the configured template, exactly as
    /// [`set_format`](Self::set_format) would, and is used for this and
    /// subsequent renders.
    pub fn render(&mut self, format: Option<&str>) -> Result<String> {
        if let Some(format) = format {
            self.format = format.to_string();
            self.template = None;
        }
        let width = self.output.width();
        self.render_line(width)
    }

    /// Prints `message` above the bar without corrupting it, then
    /// redraws.
    pub fn log(&mut self, message: &str) -> Result<()> {
        let width = self.output.width();
        let line = self.render_line(width)?;
        self.output.log(message, Some(&line))
    }

    /// Erases the bar's line from a terminal sink.
    pub fn clear(&mut self) -> Result<()> {
        self.output.clear()
    }

    /// The current count.
    pub fn current(&self) -> u64 {
        self.progress.current()
    }

    /// The total, if known.
    pub fn total(&self) -> Option<u64> {
        self.progress.total()
    }

    /// Completion as a fraction, when the total is known and non-zero.
    pub fn percent(&self) -> Option<f64> {
        self.progress.percent()
    }

    /// The current title text.
    pub fn title(&self) -> &str {
        self.title.text()
    }

    /// Elapsed running time.
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed()
    }

    /// Whether the bar has been started.
    pub fn started(&self) -> bool {
        self.timer.started()
    }

    /// Whether the timer is paused.
    pub fn paused(&self) -> bool {
        self.timer.paused()
    }

    /// Whether the bar is stopped or finished.
    pub fn stopped(&self) -> bool {
        self.timer.stopped() || self.is_finished()
    }

    /// Whether the bar is finished: explicitly via
    /// [`finish`](Self::finish), or implicitly once the count reaches a
    /// known total (unless [`without_autofinish`] was passed).
    pub fn is_finished(&self) -> bool {
        self.finished || (self.autofinish && self.progress.is_finished())
    }

    /// Mutates the counter, feeds the rate window, then performs exactly
    /// one refresh. Reaching the total stops the timer when autofinish
    /// is on.
    fn update_progress<F: FnOnce(&mut Progress)>(&mut self, mutate: F) -> Result<()> {
        mutate(&mut self.progress);
        self.estimator
            .record(self.timer.elapsed(), self.progress.current());
        if self.is_finished() {
            self.timer.stop();
            self.refresh(true)
        } else {
            self.refresh(false)
        }
    }

    /// Applies a display-configuration change, drops the cached
    /// template, and forces a redraw.
    fn refresh_with_format_change<F: FnOnce(&mut Self)>(&mut self, change: F) -> Result<()> {
        change(self);
        self.template = None;
        self.refresh(true)
    }

    fn refresh(&mut self, force: bool) -> Result<()> {
        let width = self.output.width();
        let line = self.render_line(width)?;
        self.output.refresh(&line, force)
    }

    fn render_line(&mut self, width: usize) -> Result<String> {
        let template = match self.template.take() {
            Some(template) => template,
            None => Template::parse(&self.format)?,
        };
        let ctx = self.snapshot();
        let components = Components {
            title: &self.title,
            bar: &self.bar,
            percentage: &self.percentage,
            rate: &self.rate,
            time: &self.time,
        };
        let line = template.process(&components, &ctx, width);
        self.template = Some(template);
        Ok(line)
    }

    fn snapshot(&self) -> RenderContext {
        let finished = self.is_finished();
        RenderContext {
            current: self.progress.current(),
            total: self.progress.total(),
            percent: if finished {
                Some(1.0)
            } else {
                self.progress.percent()
            },
            elapsed: self.timer.elapsed(),
            rate: self.estimator.rate(),
            started: self.timer.started(),
            finished,
        }
    }
}

impl fmt::Debug for ProgressBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.progress.total() {
            Some(total) => write!(f, "ProgressBar({}/{})", self.progress.current(), total),
            None => write!(f, "ProgressBar({}/unknown)", self.progress.current()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ASCII;
    use crate::error::Error;
    use crate::output::test_support::SharedBuf;
    use crate::timer::ManualClock;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    /// A bar wired to a manual clock and an in-memory append-mode sink.
    fn test_bar(
        extra: impl IntoIterator<Item = ProgressBarOption>,
    ) -> (ProgressBar, ManualClock, SharedBuf) {
        let clock = ManualClock::new();
        let buf = SharedBuf::new();
        let mut options = vec![
            with_clock(Box::new(clock.clone())),
            with_output(Output::writer(Box::new(buf.clone()))),
            with_bar_style(ASCII.clone()),
        ];
        options.extend(extra);
        let bar = ProgressBar::new(options).expect("bar construction should succeed");
        (bar, clock, buf)
    }

    #[test]
    fn test_autostart_draws_the_first_line() {
        let (bar, _clock, buf) = test_bar([with_total(10)]);
        assert!(bar.started());
        assert_eq!(buf.contents().lines().count(), 1);
        assert!(buf.contents().contains("0%"));
    }

    #[test]
    fn test_without_autostart_stays_idle() {
        let (mut bar, _clock, buf) = test_bar([with_total(10), without_autostart()]);
        assert!(!bar.started());
        assert_eq!(buf.contents(), "");

        bar.start().unwrap();
        assert!(bar.started());
        assert_eq!(buf.contents().lines().count(), 1);
    }

    #[test]
    fn test_half_way_renders_fifty_percent() {
        let (mut bar, _clock, _buf) = test_bar([with_total(10)]);
        for _ in 0..5 {
            bar.increment().unwrap();
        }
        let line = bar.render(None).unwrap();
        assert!(line.contains("50%"), "unexpected line: {line}");
        assert!(line.contains("5/10"));
    }

    #[test]
    fn test_reaching_total_finishes_and_stops_the_timer() {
        let (mut bar, clock, _buf) = test_bar([with_total(10)]);
        clock.advance(secs(2));
        for _ in 0..10 {
            bar.increment().unwrap();
        }
        assert!(bar.is_finished());
        assert!(bar.stopped());

        // Elapsed time is frozen after the implicit finish.
        let frozen = bar.elapsed();
        clock.advance(secs(30));
        assert_eq!(bar.elapsed(), frozen);

        let line = bar.render(None).unwrap();
        assert!(line.contains("100%"));
    }

    #[test]
    fn test_without_autofinish_requires_explicit_finish() {
        let (mut bar, _clock, _buf) = test_bar([with_total(3), without_autofinish()]);
        bar.increment_by(3).unwrap();
        assert!(!bar.is_finished());

        bar.finish().unwrap();
        assert!(bar.is_finished());
    }

    #[test]
    fn test_finish_is_idempotent() {
        let (mut bar, _clock, buf) = test_bar([with_total(10)]);
        bar.increment_by(4).unwrap();
        bar.finish().unwrap();
        assert_eq!(bar.current(), 10);

        let after_first = buf.contents();
        bar.finish().unwrap();
        bar.finish().unwrap();
        assert_eq!(buf.contents(), after_first);
    }

    #[test]
    fn test_start_is_idempotent() {
        let (mut bar, _clock, buf) = test_bar([with_total(10)]);
        let after_autostart = buf.contents();
        bar.start().unwrap();
        assert_eq!(buf.contents(), after_autostart);
    }

    #[test]
    fn test_lifecycle_guards_outside_valid_transitions() {
        let (mut bar, clock, _buf) = test_bar([with_total(10), without_autostart()]);

        // Nothing is running yet: pause/stop/resume all no-op.
        bar.pause().unwrap();
        bar.resume().unwrap();
        assert!(!bar.started());

        bar.start().unwrap();
        clock.advance(secs(1));
        bar.pause().unwrap();
        bar.pause().unwrap();
        assert!(bar.paused());

        clock.advance(secs(5));
        assert_eq!(bar.elapsed(), secs(1));

        bar.resume().unwrap();
        bar.resume().unwrap();
        clock.advance(secs(1));
        assert_eq!(bar.elapsed(), secs(2));

        bar.stop().unwrap();
        bar.stop().unwrap();
        assert!(bar.stopped());
    }

    #[test]
    fn test_resume_does_not_revive_a_finished_bar() {
        let (mut bar, _clock, _buf) = test_bar([with_total(2)]);
        bar.increment_by(2).unwrap();
        assert!(bar.is_finished());
        bar.resume().unwrap();
        assert!(bar.stopped());
    }

    #[test]
    fn test_progress_never_goes_negative() {
        let (mut bar, _clock, _buf) = test_bar([with_total(10)]);
        bar.decrement().unwrap();
        bar.decrement_by(100).unwrap();
        assert_eq!(bar.current(), 0);

        bar.increment_by(3).unwrap();
        bar.decrement_by(5).unwrap();
        assert_eq!(bar.current(), 0);
    }

    #[test]
    fn test_starting_at_and_reset_round_trip() {
        let (mut bar, clock, _buf) =
            test_bar([with_total(10), with_starting_at(2), without_autostart()]);
        assert_eq!(bar.current(), 2);

        let drive = |bar: &mut ProgressBar, clock: &ManualClock| -> String {
            bar.start().unwrap();
            clock.advance(secs(1));
            bar.increment().unwrap();
            clock.advance(secs(1));
            bar.increment_by(2).unwrap();
            bar.render(None).unwrap()
        };

        let first = drive(&mut bar, &clock);
        bar.reset().unwrap();
        assert_eq!(bar.current(), 2);
        assert!(!bar.started());

        let second = drive(&mut bar, &clock);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_total_renders_placeholders() {
        let (mut bar, _clock, _buf) = test_bar([with_format("{bar:12} {percent} {eta}")]);
        for _ in 0..3 {
            bar.increment().unwrap();
        }
        let line = bar.render(None).unwrap();
        assert!(line.contains("?%"), "unexpected line: {line}");
        assert!(line.contains("--:--"));
        // Indeterminate strip: partially filled but nowhere near complete.
        assert!(line.contains('='));
        assert!(line.contains('-'));
        assert!(!bar.is_finished());
    }

    #[test]
    fn test_rate_appears_once_time_advances() {
        let (mut bar, clock, _buf) =
            test_bar([with_total(100), with_format("{rate}")]);
        assert_eq!(bar.render(None).unwrap(), "?");

        clock.advance(secs(1));
        bar.increment_by(10).unwrap();
        clock.advance(secs(1));
        bar.increment_by(10).unwrap();

        let line = bar.render(None).unwrap();
        assert_eq!(line, "10.0");
    }

    #[test]
    fn test_eta_from_smoothed_rate() {
        let (mut bar, clock, _buf) = test_bar([with_total(100), with_format("{eta}")]);
        clock.advance(secs(1));
        bar.increment_by(10).unwrap();
        clock.advance(secs(1));
        bar.increment_by(10).unwrap();

        // 80 remaining at 10/s.
        assert_eq!(bar.render(None).unwrap(), "00:08");
    }

    #[test]
    fn test_each_mutation_appends_one_line_to_a_plain_sink() {
        let (mut bar, _clock, buf) = test_bar([with_total(4)]);
        bar.increment().unwrap();
        bar.increment().unwrap();
        bar.set_progress(3).unwrap();
        // autostart + 3 mutations.
        assert_eq!(buf.contents().lines().count(), 4);
    }

    #[test]
    fn test_log_interleaves_with_the_bar() {
        let (mut bar, _clock, buf) = test_bar([with_total(4)]);
        bar.increment().unwrap();
        bar.log("checkpoint reached").unwrap();
        assert!(buf.contents().contains("checkpoint reached\n"));
    }

    #[test]
    fn test_set_title_redraws_with_new_text() {
        let (mut bar, _clock, buf) = test_bar([with_total(4), with_title("old")]);
        bar.set_title("new").unwrap();
        assert_eq!(bar.title(), "new");
        let last = buf.contents().lines().last().unwrap().to_string();
        assert!(last.contains("new:"));
    }

    #[test]
    fn test_mark_setters_change_the_strip() {
        let (mut bar, _clock, _buf) =
            test_bar([with_total(4), with_format("{bar:4}")]);
        bar.increment_by(2).unwrap();
        bar.set_progress_mark("*").unwrap();
        bar.set_remainder_mark(" ").unwrap();
        assert_eq!(bar.render(None).unwrap(), "**  ");
    }

    #[test]
    fn test_bad_format_surfaces_at_first_render() {
        let (mut bar, _clock, _buf) = test_bar([with_total(4)]);
        let err = bar.set_format("{nope}").unwrap_err();
        assert!(matches!(err, Error::Format(_)));

        // Construction with autostart hits the same path.
        let clock = ManualClock::new();
        let buf = SharedBuf::new();
        let result = ProgressBar::new([
            with_clock(Box::new(clock.clone())),
            with_output(Output::writer(Box::new(buf))),
            with_format("{bar"),
        ]);
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_render_with_format_override_persists() {
        let (mut bar, _clock, _buf) = test_bar([with_total(10)]);
        bar.increment_by(3).unwrap();
        assert_eq!(bar.render(Some("{pos}/{len}")).unwrap(), "3/10");
        // The override replaces the configured format, as set_format would.
        assert_eq!(bar.render(None).unwrap(), "3/10");
    }

    #[test]
    fn test_set_total_switches_between_modes() {
        let (mut bar, _clock, _buf) = test_bar([with_format("{percent}")]);
        bar.increment_by(5).unwrap();
        assert_eq!(bar.render(None).unwrap(), "?%");

        bar.set_total(Some(20)).unwrap();
        assert_eq!(bar.render(None).unwrap(), "25%");

        bar.set_total(None).unwrap();
        assert_eq!(bar.render(None).unwrap(), "?%");
    }

    #[test]
    fn test_debug_shows_count_and_total() {
        let (mut bar, _clock, _buf) = test_bar([with_total(10)]);
        bar.increment_by(4).unwrap();
        assert_eq!(format!("{:?}", bar), "ProgressBar(4/10)");

        let (bar, _clock, _buf) = test_bar([]);
        assert_eq!(format!("{:?}", bar), "ProgressBar(0/unknown)");
    }
}
