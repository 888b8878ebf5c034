//! Determinism testing helpers.
//!
//! Runs a sampling closure several times and compares every value bit for
//! bit against the first run.
//!
//! ```rust,ignore
//! use terragen_tests::determinism::verify_determinism;
//!
//! let result = verify_determinism(|| generate_preset(Preset::Red, 1, &freqs, &from, &to, 8), 3);
//! result.assert_deterministic();
//! ```

use std::fmt;

use terragen_noise::{NoiseResult, SamplingResult};

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical samples.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Number of samples in the reference run.
    pub samples: usize,
    /// BLAKE3 hash of the reference run's values.
    pub hash: String,
    /// First difference found, if any.
    pub diff: Option<SampleDiff>,
}

/// The first sample that differed between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleDiff {
    /// Sample index, or the shorter length if the counts differ.
    pub index: usize,
    /// Value from the reference run.
    pub expected: Option<f64>,
    /// Value from the differing run.
    pub actual: Option<f64>,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
}

impl fmt::Display for SampleDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at sample {}: expected {:?}, got {:?} (run {})",
            self.index, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Samples: {}\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.samples, self.hash, diff
            );
        }
    }
}

/// BLAKE3 hex digest of a value slice's little-endian bits.
pub fn values_hash(values: &[f64]) -> String {
    let mut hasher = blake3::Hasher::new();
    for value in values {
        hasher.update(&value.to_bits().to_le_bytes());
    }
    hasher.finalize().to_hex().to_string()
}

/// Run `generate_fn` `runs` times and compare every run to the first.
///
/// Panics if `runs < 2` or a run returns an error.
pub fn verify_determinism<F>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> NoiseResult<SamplingResult>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn().expect("reference run failed");
    let expected = reference.values();
    let hash = values_hash(expected);

    for run_index in 1..runs {
        let output = generate_fn().expect("comparison run failed");
        if let Some(diff) = find_first_difference(expected, output.values(), run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                samples: expected.len(),
                hash,
                diff: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        samples: expected.len(),
        hash,
        diff: None,
    }
}

fn find_first_difference(expected: &[f64], actual: &[f64], run_index: usize) -> Option<SampleDiff> {
    let mismatch = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e.to_bits() != a.to_bits());
    if let Some(index) = mismatch {
        return Some(SampleDiff {
            index,
            expected: Some(expected[index]),
            actual: Some(actual[index]),
            run_index,
        });
    }
    if expected.len() != actual.len() {
        let index = expected.len().min(actual.len());
        return Some(SampleDiff {
            index,
            expected: expected.get(index).copied(),
            actual: actual.get(index).copied(),
            run_index,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_difference() {
        assert_eq!(find_first_difference(&[1.0, 2.0], &[1.0, 2.0], 1), None);

        let diff = find_first_difference(&[1.0, 2.0], &[1.0, 3.0], 2).unwrap();
        assert_eq!(diff.index, 1);
        assert_eq!(diff.expected, Some(2.0));
        assert_eq!(diff.actual, Some(3.0));
        assert_eq!(diff.run_index, 2);

        let diff = find_first_difference(&[1.0], &[1.0, 5.0], 1).unwrap();
        assert_eq!(diff.index, 1);
        assert_eq!(diff.expected, None);
        assert_eq!(diff.actual, Some(5.0));
    }

    #[test]
    fn test_signed_zero_is_a_difference() {
        assert!(find_first_difference(&[0.0], &[-0.0], 1).is_some());
    }

    #[test]
    fn test_values_hash() {
        assert_eq!(values_hash(&[1.0, 2.0]), values_hash(&[1.0, 2.0]));
        assert_ne!(values_hash(&[1.0, 2.0]), values_hash(&[2.0, 1.0]));
    }
}
