//! Core data structures for the egg timer.
//!
//! This crate holds everything about the timer that does not depend on a UI
//! toolkit, so it can be tested without a window.
//!
//! # Overview
//!
//! - [`timer`]: The [`EggTimer`] state machine (Idle, Running, Complete) that
//!   consumes progress ticks and reports the remaining time.
//! - [`progress`]: [`Progress`] and [`ProgressIncrement`], the clamped
//!   fraction and the tick payload.
//! - [`duration`]: Parsing of the user-entered duration text.
//! - [`curve`]: The egg outline generator ([`EggCurve`]) and its
//!   [`ShapeConstants`].
//! - [`tint`]: The fill colour that shifts from raw to cooked as progress
//!   advances.
//!
//! # Examples
//!
//! ```
//! use eggtimer_core::{EggTimer, ProgressIncrement, TimerPhase};
//!
//! let mut timer = EggTimer::new();
//! timer.start("10").unwrap();
//! assert_eq!(timer.phase(), TimerPhase::Running);
//!
//! let step = ProgressIncrement::new(0.25).unwrap();
//! timer.apply_tick(step);
//! timer.apply_tick(step);
//! assert_eq!(timer.remaining_seconds(), Some(5.0));
//! ```

pub mod curve;
pub mod duration;
pub mod progress;
pub mod timer;
pub mod tint;

pub use self::{
    curve::{CurvePoint, EggCurve, ShapeConstants, ShapeError},
    duration::{ParseDurationError, parse_duration},
    progress::{Progress, ProgressIncrement, ProgressIncrementError},
    timer::{EggTimer, TimerPhase, format_remaining},
    tint::Tint,
};
