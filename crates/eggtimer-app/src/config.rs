//! Command-line configuration.
//!
//! Everything has a default, so running `eggtimer` with no arguments gives
//! the classic 40 ms / 0.004 tick (ten seconds from raw to cooked).

use std::{num::ParseFloatError, time::Duration};

use clap::Parser;
use eggtimer_core::{ProgressIncrement, ProgressIncrementError, ShapeConstants, ShapeError};

use crate::ticker::TickerConfig;

/// A desktop egg timer: enter the seconds, press Start, watch the egg cook.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Initial contents of the duration field, in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub duration: Option<String>,

    /// Milliseconds between progress ticks.
    #[arg(
        long,
        value_name = "MS",
        default_value_t = 40,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_interval_ms: u64,

    /// Progress added by each tick, in (0, 1].
    #[arg(long, value_name = "FRACTION", default_value = "0.004", value_parser = parse_increment)]
    pub tick_increment: ProgressIncrement,

    /// Egg profile as `A,B,D`: half width, half height and squash toward the
    /// narrow end.
    #[arg(long, value_name = "A,B,D", default_value = "110,150,20", value_parser = parse_shape)]
    pub egg_shape: ShapeConstants,
}

/// Errors for values that clap cannot check on its own.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ConfigError {
    #[display("not a number: {_0}")]
    NotANumber(#[from] ParseFloatError),
    #[display("{_0}")]
    OutOfRange(#[from] ProgressIncrementError),
    #[display("expected three comma-separated numbers, got {input:?}")]
    MalformedShape { input: String },
    #[display("{_0}")]
    InvalidShape(#[from] ShapeError),
}

fn parse_increment(value: &str) -> Result<ProgressIncrement, ConfigError> {
    let value: f32 = value.trim().parse()?;
    Ok(ProgressIncrement::new(value)?)
}

fn parse_shape(value: &str) -> Result<ShapeConstants, ConfigError> {
    let parts = value
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()?;
    let [a, b, d] = parts[..] else {
        return Err(ConfigError::MalformedShape {
            input: value.to_owned(),
        });
    };
    Ok(ShapeConstants::new(a, b, d)?)
}

/// Validated application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub(crate) initial_duration: String,
    pub(crate) ticker: TickerConfig,
    pub(crate) shape: ShapeConstants,
}

impl AppConfig {
    /// Parses the process arguments, exiting with a usage error on failure.
    #[must_use]
    pub fn from_env() -> Self {
        Args::parse().into()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_duration: String::new(),
            ticker: TickerConfig::default(),
            shape: ShapeConstants::DEFAULT,
        }
    }
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let Args {
            duration,
            tick_interval_ms,
            tick_increment,
            egg_shape,
        } = args;
        Self {
            initial_duration: duration.unwrap_or_default(),
            ticker: TickerConfig {
                interval: Duration::from_millis(tick_interval_ms),
                increment: tick_increment,
            },
            shape: egg_shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        let argv = std::iter::once("eggtimer").chain(args.iter().copied());
        Args::try_parse_from(argv).map(AppConfig::from)
    }

    #[test]
    fn defaults_match_the_classic_timer() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.ticker.interval, Duration::from_millis(40));
        assert_eq!(config.ticker.increment, ProgressIncrement::DEFAULT);
        assert!(config.initial_duration.is_empty());
        assert_eq!(config.shape, ShapeConstants::DEFAULT);
    }

    #[test]
    fn options_override_defaults() {
        let config = parse(&[
            "--duration",
            "360",
            "--tick-interval-ms",
            "100",
            "--tick-increment",
            "0.01",
            "--egg-shape",
            "80, 120, 10",
        ])
        .unwrap();
        assert_eq!(config.initial_duration, "360");
        assert_eq!(config.ticker.interval, Duration::from_millis(100));
        assert_eq!(config.ticker.increment.get(), 0.01);
        assert_eq!(config.shape, ShapeConstants::new(80.0, 120.0, 10.0).unwrap());
    }

    #[test]
    fn invalid_ticks_are_usage_errors() {
        assert!(parse(&["--tick-interval-ms", "0"]).is_err());
        assert!(parse(&["--tick-increment", "0"]).is_err());
        assert!(parse(&["--tick-increment", "1.5"]).is_err());
        assert!(parse(&["--tick-increment", "fast"]).is_err());
    }

    #[test]
    fn invalid_shapes_are_usage_errors() {
        assert!(parse(&["--egg-shape", "110,150"]).is_err());
        assert!(parse(&["--egg-shape", "110,150,200"]).is_err());
        assert!(parse(&["--egg-shape", "wide,tall,flat"]).is_err());
    }

    #[test]
    fn shape_errors_describe_the_problem() {
        assert!(matches!(
            parse_shape("1,2,3,4"),
            Err(ConfigError::MalformedShape { input }) if input == "1,2,3,4"
        ));
        assert!(matches!(
            parse_shape("0,150,20"),
            Err(ConfigError::InvalidShape(ShapeError::NonPositiveSize { .. }))
        ));
    }

    #[test]
    fn increment_errors_describe_the_problem() {
        let err = parse_increment("2").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange(_)));
        assert_eq!(err.to_string(), "progress increment must be in (0, 1], got 2");
    }
}
