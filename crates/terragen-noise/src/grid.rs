//! Gradient grid caches.
//!
//! A grid cache owns one unit gradient vector per integer lattice point.
//! Once a point has a vector it never changes for the lifetime of the cache.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::rng::RandomSource;
use crate::vector::Vec2;

/// Lowest pre-warmed lattice coordinate (inclusive).
pub const PREWARM_MIN: i64 = -9;
/// Highest pre-warmed lattice coordinate (inclusive).
pub const PREWARM_MAX: i64 = 10;

/// A cache of gradient vectors keyed by 2D lattice coordinate.
///
/// `get` always yields a vector; implementations fill misses themselves.
pub trait GridCache: Send + Sync {
    /// Gradient vector at lattice point `(x, y)`.
    fn get(&self, x: i64, y: i64) -> Vec2;
}

struct GridState<S> {
    grid: HashMap<(i64, i64), Vec2>,
    source: S,
}

/// Grid cache of random unit vectors drawn from a [`RandomSource`].
///
/// Construction pre-warms the square `[-9, 10] x [-9, 10]`, drawing in
/// x-major order (outer x ascending, inner y ascending). Misses outside the
/// square draw lazily from the same source.
pub struct RandomGridCache<S> {
    state: Mutex<GridState<S>>,
}

impl<S: RandomSource> RandomGridCache<S> {
    /// Create a cache and pre-warm the default square.
    pub fn new(mut source: S) -> Self {
        let side = (PREWARM_MAX - PREWARM_MIN + 1) as usize;
        let mut grid = HashMap::with_capacity(side * side);
        for x in PREWARM_MIN..=PREWARM_MAX {
            for y in PREWARM_MIN..=PREWARM_MAX {
                grid.insert((x, y), Vec2::random_direction(&mut source));
            }
        }
        log::debug!(
            "pre-warmed gradient grid [{PREWARM_MIN}, {PREWARM_MAX}]^2 ({} vectors)",
            grid.len()
        );

        Self {
            state: Mutex::new(GridState { grid, source }),
        }
    }

    /// Number of lattice points with a memoized vector.
    pub fn len(&self) -> usize {
        self.state.lock().grid.len()
    }

    /// Whether no vectors are memoized. Never true after construction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: RandomSource + Send> GridCache for RandomGridCache<S> {
    fn get(&self, x: i64, y: i64) -> Vec2 {
        let mut state = self.state.lock();
        let GridState { grid, source } = &mut *state;
        *grid.entry((x, y)).or_insert_with(|| {
            log::trace!("gradient grid miss at ({x}, {y})");
            Vec2::random_direction(source)
        })
    }
}

/// Deterministic cache whose vector at `(x, y)` is `(x, y)` normalized.
///
/// The origin maps to `(1, 0)`. Draws no randomness, so Perlin output over
/// it can be checked by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoordinateGridCache;

impl GridCache for CoordinateGridCache {
    fn get(&self, x: i64, y: i64) -> Vec2 {
        if x == 0 && y == 0 {
            return Vec2::UNIT_X;
        }
        Vec2::new(x as f64, y as f64)
            .normalized()
            .unwrap_or(Vec2::UNIT_X)
    }
}
