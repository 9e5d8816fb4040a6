//! Progress fraction and tick payload types.

/// A completion fraction clamped to `[0, 1]`.
///
/// Construction and arithmetic always clamp, so a `Progress` value can never
/// leave its range.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    /// No progress at all.
    pub const ZERO: Self = Self(0.0);
    /// Fully done.
    pub const COMPLETE: Self = Self(1.0);

    /// Creates a progress value, clamping `value` into `[0, 1]`.
    ///
    /// `NaN` is treated as zero.
    ///
    /// # Example
    ///
    /// ```
    /// use eggtimer_core::Progress;
    ///
    /// assert_eq!(Progress::new(1.5), Progress::COMPLETE);
    /// assert_eq!(Progress::new(-0.2), Progress::ZERO);
    /// assert_eq!(Progress::new(0.25).get(), 0.25);
    /// ```
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Returns the fraction as a plain float.
    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Returns the fraction still to go, `1 - self`.
    #[must_use]
    pub fn remaining(self) -> f32 {
        1.0 - self.0
    }

    /// Returns `true` once the fraction has reached one.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }

    /// Returns this progress advanced by `increment`, saturating at one.
    #[must_use]
    pub fn advanced_by(self, increment: ProgressIncrement) -> Self {
        Self::new(self.0 + increment.get())
    }
}

/// The amount of progress carried by one tick.
///
/// Always a finite value in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ProgressIncrement(f32);

impl ProgressIncrement {
    /// The default increment: 250 ticks from raw to cooked.
    pub const DEFAULT: Self = Self(0.004);

    /// Creates an increment.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressIncrementError`] if `value` is not finite or is not
    /// in `(0, 1]`.
    pub fn new(value: f32) -> Result<Self, ProgressIncrementError> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ProgressIncrementError { value })
        }
    }

    /// Returns the increment as a plain float.
    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }

    /// Adds two increments together, saturating at one.
    ///
    /// Used to coalesce several pending ticks into one.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self((self.0 + other.0).min(1.0))
    }
}

impl Default for ProgressIncrement {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Error returned when a tick increment is out of range.
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
#[display("progress increment must be in (0, 1], got {value}")]
pub struct ProgressIncrementError {
    /// The rejected value.
    pub value: f32,
}
