//! Wall-clock tracking for a progress bar.
//!
//! The [`Timer`] tracks one run of work: it can be started once, paused and
//! resumed any number of times, and stopped. Elapsed time accumulates only
//! while the timer is running, so a paused bar reports a frozen duration.
//!
//! Time is read through the [`Clock`] trait rather than `Instant::now()`
//! directly, which lets tests drive the timer deterministically.

use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// Returns the time elapsed since the clock's own origin. The default
/// implementation is [`MonotonicClock`]; tests inject a manually advanced
/// clock to make renders reproducible.
pub trait Clock: std::fmt::Debug {
    /// Monotonic time since the clock was created.
    fn now(&self) -> Duration;
}

/// The default [`Clock`], backed by [`Instant`].
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the moment of the call.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// At most one of these holds at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Tracks elapsed wall-clock time across start/pause/resume/stop.
#[derive(Debug)]
pub struct Timer {
    clock: Box<dyn Clock>,
    state: State,
    /// Clock reading when the current running leg began.
    leg_started: Duration,
    /// Elapsed time accumulated by completed legs.
    accumulated: Duration,
}

impl Timer {
    /// Creates an idle timer using the real monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock::new()))
    }

    /// Creates an idle timer reading time from `clock`.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            clock,
            state: State::Idle,
            leg_started: Duration::ZERO,
            accumulated: Duration::ZERO,
        }
    }

    /// Starts the timer. No-op if it was already started.
    pub fn start(&mut self) {
        if self.state == State::Idle {
            self.leg_started = self.clock.now();
            self.state = State::Running;
        }
    }

    /// Freezes elapsed accumulation. No-op unless running.
    pub fn pause(&mut self) {
        if self.state == State::Running {
            self.accumulated += self.clock.now() - self.leg_started;
            self.state = State::Paused;
        }
    }

    /// Continues accumulation after a pause or stop. No-op otherwise.
    pub fn resume(&mut self) {
        if self.state == State::Paused || self.state == State::Stopped {
            self.leg_started = self.clock.now();
            self.state = State::Running;
        }
    }

    /// Fixes the elapsed time; [`elapsed`](Self::elapsed) is constant after.
    pub fn stop(&mut self) {
        match self.state {
            State::Running => {
                self.accumulated += self.clock.now() - self.leg_started;
                self.state = State::Stopped;
            }
            State::Paused => self.state = State::Stopped,
            State::Idle | State::Stopped => {}
        }
    }

    /// Clears all accumulated time back to the uninitialized state.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.leg_started = Duration::ZERO;
        self.accumulated = Duration::ZERO;
    }

    /// Elapsed running time: frozen while paused or stopped, zero when idle.
    pub fn elapsed(&self) -> Duration {
        match self.state {
            State::Idle => Duration::ZERO,
            State::Running => self.accumulated + (self.clock.now() - self.leg_started),
            State::Paused | State::Stopped => self.accumulated,
        }
    }

    /// Elapsed time in whole-and-fractional seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Whether `start` has been called since the last reset.
    pub fn started(&self) -> bool {
        self.state != State::Idle
    }

    /// Whether the timer is actively accumulating time.
    pub fn running(&self) -> bool {
        self.state == State::Running
    }

    /// Whether the timer is paused.
    pub fn paused(&self) -> bool {
        self.state == State::Paused
    }

    /// Whether the timer has been stopped.
    pub fn stopped(&self) -> bool {
        self.state == State::Stopped
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

/// A hand-driven clock for deterministic tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct ManualClock {
    time: std::rc::Rc<std::cell::Cell<Duration>>,
}

#[cfg(test)]
impl ManualClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance(&self, by: Duration) {
        self.time.set(self.time.get() + by);
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.time.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_idle_timer_reports_zero() {
        let timer = Timer::with_clock(Box::new(ManualClock::new()));
        assert!(!timer.started());
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_start_accumulates_elapsed() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(3));

        assert!(timer.started());
        assert!(timer.running());
        assert_eq!(timer.elapsed(), secs(3));
    }

    #[test]
    fn test_start_twice_is_a_noop() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(2));
        timer.start(); // must not restart the leg
        clock.advance(secs(1));

        assert_eq!(timer.elapsed(), secs(3));
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(2));
        timer.pause();
        assert!(timer.paused());

        clock.advance(secs(10)); // paused time must not count
        assert_eq!(timer.elapsed(), secs(2));

        timer.resume();
        clock.advance(secs(1));
        assert_eq!(timer.elapsed(), secs(3));
    }

    #[test]
    fn test_pause_when_not_running_is_a_noop() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.pause();
        assert!(!timer.paused());

        timer.start();
        timer.stop();
        timer.pause();
        assert!(timer.stopped());
    }

    #[test]
    fn test_stop_fixes_elapsed() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(5));
        timer.stop();
        clock.advance(secs(60));

        assert!(timer.stopped());
        assert_eq!(timer.elapsed(), secs(5));
    }

    #[test]
    fn test_resume_after_stop_continues_accumulation() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(4));
        timer.stop();
        clock.advance(secs(9));
        timer.resume();
        clock.advance(secs(1));

        assert!(timer.running());
        assert_eq!(timer.elapsed(), secs(5));
    }

    #[test]
    fn test_resume_when_never_started_is_a_noop() {
        let mut timer = Timer::with_clock(Box::new(ManualClock::new()));
        timer.resume();
        assert!(!timer.started());
    }

    #[test]
    fn test_reset_returns_to_uninitialized() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(secs(7));
        timer.stop();
        timer.reset();

        assert!(!timer.started());
        assert_eq!(timer.elapsed(), Duration::ZERO);

        // A reset timer can be started again.
        timer.start();
        clock.advance(secs(2));
        assert_eq!(timer.elapsed(), secs(2));
    }

    #[test]
    fn test_elapsed_seconds() {
        let clock = ManualClock::new();
        let mut timer = Timer::with_clock(Box::new(clock.clone()));

        timer.start();
        clock.advance(Duration::from_millis(1500));
        assert!((timer.elapsed_seconds() - 1.5).abs() < 1e-9);
    }
}
