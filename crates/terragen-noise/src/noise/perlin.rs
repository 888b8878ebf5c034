//! Lattice gradient (Perlin) noise.
//!
//! Gradients come from a [`GridCache`] instead of a permutation table, so
//! the lattice is unbounded and each point's gradient is fixed on first use.

use std::fmt;

use crate::grid::GridCache;
use crate::interpolation::Interpolator;
use crate::vector::Vec2;

/// 2D gradient noise.
pub struct Perlin {
    cache: Box<dyn GridCache>,
    interpolator: Interpolator,
}

impl Perlin {
    /// Create a generator over `cache`.
    pub fn new(cache: impl GridCache + 'static, interpolator: Interpolator) -> Self {
        Self {
            cache: Box::new(cache),
            interpolator,
        }
    }

    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    /// Sample the noise at `(x, y)`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        // Grid cell coordinates
        let fx = x.floor();
        let fy = y.floor();
        let x0 = fx as i64;
        let y0 = fy as i64;
        // The cast saturates past the i64 range, so the far corner must too.
        let x1 = x0.saturating_add(1);
        let y1 = y0.saturating_add(1);

        // Offsets from the cell origin stay in [0, 1) at any magnitude.
        let dx = x - fx;
        let dy = y - fy;

        // Corners: (x0, y0), (x0+1, y0), (x0, y0+1), (x0+1, y0+1)
        let corners = [
            (x0, y0, dx, dy),
            (x1, y0, dx - 1.0, dy),
            (x0, y1, dx, dy - 1.0),
            (x1, y1, dx - 1.0, dy - 1.0),
        ];
        let mut influences = [0.0; 4];
        for (influence, &(cx, cy, ox, oy)) in influences.iter_mut().zip(corners.iter()) {
            *influence = self.cache.get(cx, cy).dot(Vec2::new(ox, oy));
        }
        log::trace!("perlin ({x}, {y}) cell ({x0}, {y0}) influences {influences:?}");

        let x_bias = dx.abs();
        let y_bias = dy.abs();
        let top = self
            .interpolator
            .interpolate(x_bias, influences[0], influences[1]);
        let bottom = self
            .interpolator
            .interpolate(x_bias, influences[2], influences[3]);
        self.interpolator.interpolate(y_bias, top, bottom)
    }
}

impl fmt::Debug for Perlin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perlin")
            .field("interpolator", &self.interpolator)
            .finish_non_exhaustive()
    }
}
