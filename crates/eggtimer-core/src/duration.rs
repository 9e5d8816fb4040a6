//! Parsing of the user-entered boil duration.

/// Reasons a duration string can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseDurationError {
    /// The input was empty or whitespace only.
    #[display("duration is empty")]
    Empty,
    /// The input is not a number.
    #[display("duration {input:?} is not a number")]
    NotANumber {
        /// The trimmed input.
        input: String,
    },
    /// The input is a negative number.
    #[display("duration {input:?} is negative")]
    Negative {
        /// The trimmed input.
        input: String,
    },
    /// The input is infinite or NaN.
    #[display("duration {input:?} is not finite")]
    NotFinite {
        /// The trimmed input.
        input: String,
    },
}

/// Parses a duration in seconds.
///
/// Surrounding whitespace is ignored. Only finite, non-negative real numbers
/// are accepted.
///
/// # Errors
///
/// Returns [`ParseDurationError`] describing why the input was rejected.
///
/// # Example
///
/// ```
/// use eggtimer_core::{ParseDurationError, parse_duration};
///
/// assert_eq!(parse_duration(" 7.5 "), Ok(7.5));
/// assert_eq!(parse_duration(""), Err(ParseDurationError::Empty));
/// assert!(parse_duration("abc").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<f32, ParseDurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseDurationError::Empty);
    }
    let Ok(seconds) = input.parse::<f32>() else {
        return Err(ParseDurationError::NotANumber {
            input: input.to_owned(),
        });
    };
    if !seconds.is_finite() {
        return Err(ParseDurationError::NotFinite {
            input: input.to_owned(),
        });
    }
    if seconds.is_sign_negative() && seconds != 0.0 {
        return Err(ParseDurationError::Negative {
            input: input.to_owned(),
        });
    }
    // "-0" parses as negative zero
    Ok(seconds.abs())
}
