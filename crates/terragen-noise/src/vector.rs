//! Two-component vectors used for lattice gradients.

use crate::error::{NoiseError, NoiseResult};
use crate::rng::RandomSource;

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Unit vector along the first axis.
    pub const UNIT_X: Vec2 = Vec2 { x: 1.0, y: 0.0 };

    /// Create a vector.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Return this vector scaled to length 1.
    ///
    /// Fails for the zero vector.
    pub fn normalized(&self) -> NoiseResult<Vec2> {
        let length = self.length();
        if length == 0.0 {
            return Err(NoiseError::ZeroLengthVector {
                x: self.x,
                y: self.y,
            });
        }
        Ok(Vec2::new(self.x / length, self.y / length))
    }

    /// Component-wise comparison within 1e-14.
    pub fn is_equal(&self, other: Vec2) -> bool {
        crate::float_eq(self.x, other.x) && crate::float_eq(self.y, other.y)
    }

    /// Draw a random unit direction.
    ///
    /// Consumes exactly two draws, mapped from `[0, 1)` to `[-1, 1)`. An
    /// all-zero draw is bumped to `(1, 0)` before normalizing.
    pub fn random_direction<S: RandomSource + ?Sized>(source: &mut S) -> Vec2 {
        let a = source.next_signed_f64();
        let b = source.next_signed_f64();
        let raw = if a == 0.0 && b == 0.0 {
            Vec2::new(1.0, b)
        } else {
            Vec2::new(a, b)
        };
        raw.normalized().unwrap_or(Vec2::UNIT_X)
    }
}
