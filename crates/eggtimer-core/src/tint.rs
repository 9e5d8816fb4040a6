//! Egg fill colour.

use crate::Progress;

/// An RGBA colour with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Tint {
    /// The colour of a raw egg.
    pub const RAW: Self = Self::opaque(255, 239, 174);
    /// The colour of a fully cooked egg.
    pub const COOKED: Self = Self::opaque(255, 0, 0);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the egg colour for the given progress.
    ///
    /// The green and blue channels of [`Tint::RAW`] are scaled by the
    /// remaining fraction, so the egg reddens continuously as it cooks.
    ///
    /// # Example
    ///
    /// ```
    /// use eggtimer_core::{Progress, Tint};
    ///
    /// assert_eq!(Tint::for_progress(Progress::ZERO), Tint::RAW);
    /// assert_eq!(Tint::for_progress(Progress::COMPLETE), Tint::COOKED);
    /// ```
    #[must_use]
    pub fn for_progress(progress: Progress) -> Self {
        let left = progress.remaining();
        Self {
            g: scale(Self::RAW.g, left),
            b: scale(Self::RAW.b, left),
            ..Self::RAW
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(channel: u8, factor: f32) -> u8 {
    // truncates like an integer conversion
    (f32::from(channel) * factor.clamp(0.0, 1.0)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway_egg_is_half_tinted() {
        let tint = Tint::for_progress(Progress::new(0.5));
        assert_eq!(tint, Tint::opaque(255, 119, 87));
    }

    #[test]
    fn tint_darkens_monotonically() {
        let mut previous = Tint::RAW;
        for step in 1..=100u8 {
            let tint = Tint::for_progress(Progress::new(f32::from(step) / 100.0));
            assert!(tint.g <= previous.g);
            assert!(tint.b <= previous.b);
            assert_eq!(tint.r, 255);
            previous = tint;
        }
    }
}
