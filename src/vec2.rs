use std::fmt;
use std::ops::{Add, Mul, Sub};

use thiserror::Error;

/// Mathematically undefined vector operations.
///
/// These are contract violations at the call site, not runtime conditions
/// the game recovers from; nothing in the crate catches them.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Vec2Error {
    #[error("can't divide by zero")]
    DivideByZero,
    #[error("angle is undefined for a zero-magnitude vector")]
    ZeroMagnitudeAngle,
}

/// 2-D vector used for both grid positions and movement directions.
///
/// Arithmetic always returns a fresh value; equality is exact component
/// comparison with no epsilon. Grid positions keep integer-valued
/// components, so exact comparison is well-defined for them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the dot product `a.x*b.x + a.y*b.y`.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Returns the Euclidean norm.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns this vector scaled to magnitude 1, or the zero vector when
    /// the magnitude is 0. The zero case is deliberately permissive and
    /// does not share [`Vec2::try_div`]'s divide-by-zero error.
    #[must_use]
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Self::ZERO
        } else {
            Self::new(self.x / magnitude, self.y / magnitude)
        }
    }

    /// Divides both components by `scalar`.
    pub fn try_div(self, scalar: f64) -> Result<Self, Vec2Error> {
        if scalar == 0.0 {
            return Err(Vec2Error::DivideByZero);
        }
        Ok(Self::new(self.x / scalar, self.y / scalar))
    }

    /// Returns the angle in radians between `self` and `other`.
    pub fn angle(self, other: Self) -> Result<f64, Vec2Error> {
        let magnitudes = self.magnitude() * other.magnitude();
        if magnitudes == 0.0 {
            return Err(Vec2Error::ZeroMagnitudeAngle);
        }
        Ok((self.dot(other) / magnitudes).acos())
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Vec2, Vec2Error};

    #[test]
    fn arithmetic_is_component_wise() {
        let a = Vec2::new(3.0, -2.0);
        let b = Vec2::new(1.0, 5.0);

        assert_eq!(a + b, Vec2::new(4.0, 3.0));
        assert_eq!(a - b, Vec2::new(2.0, -7.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, -4.0));
    }

    #[test]
    fn divide_inverts_multiply_for_nonzero_scalars() {
        let v = Vec2::new(7.0, -3.0);

        for scalar in [1.0, 2.0, -4.0, 0.5] {
            let round_trip = (v * scalar).try_div(scalar).expect("scalar is nonzero");
            assert_eq!(round_trip, v);
        }
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        assert_eq!(
            Vec2::new(1.0, 1.0).try_div(0.0),
            Err(Vec2Error::DivideByZero)
        );
    }

    #[test]
    fn dot_product_uses_standard_formula() {
        let a = Vec2::new(2.0, 3.0);
        let b = Vec2::new(4.0, -1.0);

        assert_eq!(a.dot(b), 5.0);
    }

    #[test]
    fn magnitude_is_the_euclidean_norm() {
        assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vec2::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn normalize_returns_zero_vector_for_zero_magnitude() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);

        let unit = Vec2::new(0.0, -7.0).normalize();
        assert_eq!(unit, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn angle_between_perpendicular_unit_vectors() {
        let right = Vec2::new(1.0, 0.0);
        let up = Vec2::new(0.0, -1.0);

        let angle = right.angle(up).expect("both operands are unit vectors");
        assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn angle_with_zero_vector_is_rejected() {
        assert_eq!(
            Vec2::new(1.0, 0.0).angle(Vec2::ZERO),
            Err(Vec2Error::ZeroMagnitudeAngle)
        );
    }
}
