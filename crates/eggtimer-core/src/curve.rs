//! Procedural egg outline.
//!
//! The outline comes from a parametric egg curve: for an angle θ,
//!
//! ```text
//! x = a·cos θ
//! y = −(√(b² − d²·cos² θ) + d·sin θ)·sin θ
//! ```
//!
//! where `a` is the half width, `b` the half height and `d` how much the
//! egg is squashed toward one end. `y` grows downwards, so the narrow end
//! points up on screen.

use std::iter::FusedIterator;

/// One vertex of the generated outline.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Horizontal offset from the egg's origin.
    pub x: f32,
    /// Vertical offset from the egg's origin, positive downwards.
    pub y: f32,
}

impl CurvePoint {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Parameters defining the egg profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConstants {
    a: f32,
    b: f32,
    d: f32,
}

/// Errors returned by [`ShapeConstants::new`].
#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// One of the constants is infinite or NaN.
    #[display("shape constants must be finite")]
    NotFinite,
    /// The width or height is not positive.
    #[display("egg width and height must be positive (a = {a}, b = {b})")]
    NonPositiveSize {
        /// Half width.
        a: f32,
        /// Half height.
        b: f32,
    },
    /// The squash factor is negative or larger than the half height, which
    /// would make the square root undefined near θ = 0.
    #[display("squash factor must be in [0, b] (b = {b}, d = {d})")]
    SquashOutOfRange {
        /// Half height.
        b: f32,
        /// Squash factor.
        d: f32,
    },
}

impl ShapeConstants {
    /// The egg drawn by the timer.
    pub const DEFAULT: Self = Self {
        a: 110.0,
        b: 150.0,
        d: 20.0,
    };

    /// Creates shape constants.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError`] if any value is not finite, if `a` or `b` is not
    /// positive, or if `d` is outside `[0, b]`.
    pub fn new(a: f32, b: f32, d: f32) -> Result<Self, ShapeError> {
        if !(a.is_finite() && b.is_finite() && d.is_finite()) {
            return Err(ShapeError::NotFinite);
        }
        if a <= 0.0 || b <= 0.0 {
            return Err(ShapeError::NonPositiveSize { a, b });
        }
        if d < 0.0 || d > b {
            return Err(ShapeError::SquashOutOfRange { b, d });
        }
        Ok(Self { a, b, d })
    }

    /// Half width of the egg.
    #[must_use]
    pub const fn a(&self) -> f32 {
        self.a
    }

    /// Half height of the egg.
    #[must_use]
    pub const fn b(&self) -> f32 {
        self.b
    }

    /// Squash factor of the egg.
    #[must_use]
    pub const fn d(&self) -> f32 {
        self.d
    }

    /// Returns the outline point at `degrees`.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn point_at(&self, degrees: f64) -> CurvePoint {
        let (a, b, d) = (f64::from(self.a), f64::from(self.b), f64::from(self.d));
        let (sin_t, cos_t) = degrees.to_radians().sin_cos();
        // b >= d keeps the radicand non-negative
        let x = a * cos_t;
        let y = -((b * b - d * d * cos_t * cos_t).sqrt() + d * sin_t) * sin_t;
        CurvePoint::new(x as f32, y as f32)
    }

    /// Returns an iterator over the closed outline.
    #[must_use]
    pub fn outline(&self) -> EggCurve {
        EggCurve::new(*self)
    }
}

impl Default for ShapeConstants {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Iterator over the egg outline, one point per degree from 0° to 360°
/// inclusive.
///
/// The last point coincides with the first, so connecting the points in
/// order and then back to the start gives a closed loop.
///
/// # Example
///
/// ```
/// use eggtimer_core::{EggCurve, ShapeConstants};
///
/// let points: Vec<_> = EggCurve::new(ShapeConstants::DEFAULT).collect();
/// assert_eq!(points.len(), EggCurve::POINT_COUNT);
/// assert_eq!(points[0].x, 110.0);
/// ```
#[derive(Debug, Clone)]
pub struct EggCurve {
    shape: ShapeConstants,
    next_degree: u16,
}

impl EggCurve {
    /// The last angle visited, in degrees.
    pub const LAST_DEGREE: u16 = 360;
    /// Number of points produced.
    pub const POINT_COUNT: usize = Self::LAST_DEGREE as usize + 1;

    /// Creates an outline iterator for `shape`.
    #[must_use]
    pub const fn new(shape: ShapeConstants) -> Self {
        Self {
            shape,
            next_degree: 0,
        }
    }
}

impl Iterator for EggCurve {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_degree > Self::LAST_DEGREE {
            return None;
        }
        let point = self.shape.point_at(f64::from(self.next_degree));
        self.next_degree += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from((Self::LAST_DEGREE + 1).saturating_sub(self.next_degree));
        (len, Some(len))
    }
}

impl ExactSizeIterator for EggCurve {}

impl FusedIterator for EggCurve {}
