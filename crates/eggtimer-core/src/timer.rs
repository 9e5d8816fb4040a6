//! The egg timer state machine.

use crate::{ParseDurationError, Progress, ProgressIncrement, parse_duration};

/// The phase an [`EggTimer`] is in, derived from its boiling flag and
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TimerPhase {
    /// Not boiling. Ticks are ignored.
    Idle,
    /// Boiling and not yet done. Ticks advance the progress.
    Running,
    /// Boiling and done. Ticks are ignored until the timer is stopped.
    Complete,
}

/// A single countdown.
///
/// The timer tracks whether the egg is boiling, the target duration captured
/// when boiling started and the accumulated progress fraction.
///
/// Progress only moves forward while the timer is running and never leaves
/// `[0, 1]`. Pausing keeps the progress; only [`EggTimer::reset`] clears it.
/// The target duration is recomputed only when boiling starts, scaled so that
/// the remaining time is correct for the progress already made.
///
/// # Example
///
/// ```
/// use eggtimer_core::{EggTimer, ProgressIncrement, TimerPhase};
///
/// let mut timer = EggTimer::new();
/// timer.start("4").unwrap();
/// timer.apply_tick(ProgressIncrement::new(0.5).unwrap());
/// timer.pause();
/// assert_eq!(timer.phase(), TimerPhase::Idle);
///
/// // Resuming with the remaining time keeps the countdown consistent.
/// timer.start("2").unwrap();
/// assert_eq!(timer.target_duration_secs(), 4.0);
/// assert_eq!(timer.remaining_seconds(), Some(2.0));
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EggTimer {
    boiling: bool,
    target_duration_secs: f32,
    progress: Progress,
}

impl EggTimer {
    /// Creates an idle timer with no progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        match (self.boiling, self.progress.is_complete()) {
            (false, _) => TimerPhase::Idle,
            (true, false) => TimerPhase::Running,
            (true, true) => TimerPhase::Complete,
        }
    }

    /// Returns the accumulated progress.
    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Returns the target duration captured at the last start.
    #[must_use]
    pub fn target_duration_secs(&self) -> f32 {
        self.target_duration_secs
    }

    /// Starts boiling with the duration typed by the user.
    ///
    /// `entered` is the time still to go, so the stored target duration is
    /// `entered / (1 - progress)`. If progress is already complete the timer
    /// goes straight to [`TimerPhase::Complete`] and the target is `entered`.
    ///
    /// Does nothing if the timer is already boiling.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDurationError`] if `entered` is not a non-negative
    /// number. The timer is left unchanged in that case.
    pub fn start(&mut self, entered: &str) -> Result<(), ParseDurationError> {
        if self.boiling {
            return Ok(());
        }
        let entered_secs = parse_duration(entered)?;
        self.target_duration_secs = if self.progress.is_complete() {
            entered_secs
        } else {
            entered_secs / self.progress.remaining()
        };
        self.boiling = true;
        Ok(())
    }

    /// Stops boiling and keeps the progress made so far.
    pub fn pause(&mut self) {
        self.boiling = false;
    }

    /// Stops boiling and clears all progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Starts the timer when idle, otherwise pauses it.
    ///
    /// This is what the main button does.
    ///
    /// # Errors
    ///
    /// Returns [`ParseDurationError`] when starting with malformed input.
    pub fn toggle(&mut self, entered: &str) -> Result<(), ParseDurationError> {
        if self.boiling {
            self.pause();
            Ok(())
        } else {
            self.start(entered)
        }
    }

    /// Advances the progress by one tick.
    ///
    /// Only has an effect while [`TimerPhase::Running`]. Returns `true` if the
    /// progress changed, meaning the display needs a redraw.
    pub fn apply_tick(&mut self, increment: ProgressIncrement) -> bool {
        if !self.phase().is_running() {
            return false;
        }
        let next = self.progress.advanced_by(increment);
        let changed = next != self.progress;
        self.progress = next;
        changed
    }

    /// Returns the seconds still to go while running.
    ///
    /// Returns `None` when idle or complete.
    #[must_use]
    pub fn remaining_seconds(&self) -> Option<f32> {
        self.phase()
            .is_running()
            .then(|| self.progress.remaining() * self.target_duration_secs)
    }
}

/// Formats a remaining time with one decimal place.
///
/// Halves are rounded away from zero before formatting.
///
/// # Example
///
/// ```
/// use eggtimer_core::format_remaining;
///
/// assert_eq!(format_remaining(5.0), "5.0");
/// assert_eq!(format_remaining(2.25), "2.3");
/// ```
#[must_use]
pub fn format_remaining(seconds: f32) -> String {
    let rounded = (f64::from(seconds) * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}
