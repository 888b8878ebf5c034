//! Easing curves and clamped interpolation.

/// Smooth interpolation (smoothstep): `3t² − 2t³`.
#[inline]
pub fn smoothstep(t: f64) -> f64 {
    3.0 * t * t - 2.0 * t * t * t
}

/// Quintic interpolation (smoother than smoothstep).
#[inline]
pub fn quintic(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Easing curve mapping a linear percentage in `[0, 1]` to an eased one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Identity. Leaves creases at lattice cell edges; meant for tests.
    Linear,
    /// Damped cubic (smoothstep), zero slope at both ends.
    #[default]
    DampedCubic,
    /// Quintic, zero slope and curvature at both ends.
    Quintic,
}

impl Easing {
    /// Apply the curve.
    #[inline]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::DampedCubic => smoothstep(t),
            Easing::Quintic => quintic(t),
        }
    }
}

/// Blends two values by an eased percentage.
///
/// Small percentages land near `a`, large ones near `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interpolator {
    easing: Easing,
}

impl Interpolator {
    /// Create an interpolator using `easing`.
    pub const fn new(easing: Easing) -> Self {
        Self { easing }
    }

    /// The easing curve in use.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Interpolate between `a` and `b`. `percentage` is clamped to `[0, 1]`.
    #[inline]
    pub fn interpolate(&self, percentage: f64, a: f64, b: f64) -> f64 {
        let delta = self.easing.apply(percentage.clamp(0.0, 1.0));
        a * (1.0 - delta) + b * delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_eq;

    #[test]
    fn test_damped_cubic() {
        assert_eq!(Easing::DampedCubic.apply(0.0), 0.0);
        assert_eq!(Easing::DampedCubic.apply(1.0), 1.0);
        assert!(float_eq(Easing::DampedCubic.apply(0.5), 3.0 * 0.25 - 2.0 * 0.125));
        assert!(float_eq(Easing::DampedCubic.apply(0.1), 3.0 * 0.01 - 2.0 * 0.001));
    }

    #[test]
    fn test_linear() {
        for t in [0.0, 0.1, 0.5, 1.0] {
            assert_eq!(Easing::Linear.apply(t), t);
        }
    }

    #[test]
    fn test_quintic_endpoints() {
        assert_eq!(Easing::Quintic.apply(0.0), 0.0);
        assert_eq!(Easing::Quintic.apply(1.0), 1.0);
        assert!(float_eq(Easing::Quintic.apply(0.5), 0.5));
    }

    #[test]
    fn test_interpolate_linear() {
        let lerp = Interpolator::new(Easing::Linear);
        assert_eq!(lerp.interpolate(0.0, 4.0, 5.0), 4.0);
        assert_eq!(lerp.interpolate(1.0, 4.0, 5.0), 5.0);
        assert_eq!(lerp.interpolate(1.7, 4.0, 5.0), 5.0);
        assert_eq!(lerp.interpolate(-1.7, 4.0, 5.0), 4.0);
        assert_eq!(lerp.interpolate(0.5, 4.0, 5.0), 4.5);
        assert!(float_eq(lerp.interpolate(0.95, 4.0, 5.0), 4.95));
    }

    #[test]
    fn test_interpolate_eased_endpoints() {
        let smooth = Interpolator::new(Easing::DampedCubic);
        assert_eq!(smooth.interpolate(0.0, -2.0, 3.0), -2.0);
        assert_eq!(smooth.interpolate(1.0, -2.0, 3.0), 3.0);
        assert_eq!(smooth.interpolate(0.5, -2.0, 3.0), 0.5);
        assert_eq!(smooth.interpolate(9.0, -2.0, 3.0), 3.0);
    }

    #[test]
    fn test_default_is_damped_cubic() {
        assert_eq!(Interpolator::default().easing(), Easing::DampedCubic);
    }
}
