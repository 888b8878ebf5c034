//! Random phase source for spectral octaves.

use std::fmt;

use parking_lot::Mutex;

use crate::rng::RandomSource;

/// A noise function whose every evaluation is the next draw of its source.
///
/// The point is ignored. Spectral presets evaluate it once per octave while
/// building the composite, so each octave keeps one fixed phase.
pub struct PhaseGenerator {
    source: Mutex<Box<dyn RandomSource + Send>>,
}

impl PhaseGenerator {
    /// Wrap a source.
    pub fn new(source: impl RandomSource + Send + 'static) -> Self {
        Self {
            source: Mutex::new(Box::new(source)),
        }
    }

    /// Advance the source and return its draw in `[0, 1)`.
    pub fn draw(&self) -> f64 {
        self.source.lock().next_f64()
    }
}

impl fmt::Debug for PhaseGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhaseGenerator").finish_non_exhaustive()
    }
}
