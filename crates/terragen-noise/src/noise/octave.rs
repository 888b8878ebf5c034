//! Octave synthesis: weighted sums of frequency-indexed noise functions.

use super::NoiseFunction;

/// One weighted frequency component.
#[derive(Debug)]
pub struct OctaveComponent {
    /// Frequency the component was generated for.
    pub frequency: f64,
    /// Weight applied to the component's value.
    pub weight: f64,
    /// The component itself.
    pub function: NoiseFunction,
}

/// Linear combination of octave components.
///
/// No normalization by octave count is applied.
#[derive(Debug, Default)]
pub struct Octave {
    components: Vec<OctaveComponent>,
}

impl Octave {
    /// Build one component per frequency, in the order given.
    ///
    /// `generator` is called once per frequency, in order, so any random
    /// draws it makes happen in ascending list order.
    pub fn synthesize<G, W>(mut generator: G, weight: W, frequencies: &[f64]) -> Self
    where
        G: FnMut(f64) -> NoiseFunction,
        W: Fn(f64) -> f64,
    {
        let components = frequencies
            .iter()
            .map(|&frequency| OctaveComponent {
                frequency,
                weight: weight(frequency),
                function: generator(frequency),
            })
            .collect();
        Self { components }
    }

    pub fn components(&self) -> &[OctaveComponent] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Sum of weighted component values at `point`.
    pub fn sample(&self, point: &[f64]) -> f64 {
        self.components
            .iter()
            .map(|c| c.function.evaluate(point) * c.weight)
            .sum()
    }

    /// Common fixed dimension of the components, if any has one.
    pub(crate) fn dimension(&self) -> Option<usize> {
        self.components.iter().find_map(|c| c.function.dimension())
    }
}
