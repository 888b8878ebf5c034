//! Error types for the noise engine.

use thiserror::Error;

/// Result type for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;

/// Errors that can occur while building or sampling noise.
///
/// Every variant is a precondition failure detected before (or instead of)
/// computation. Cache state that was already memoized stays valid.
#[derive(Debug, Error)]
pub enum NoiseError {
    /// Preset name is not in the catalog.
    #[error("unknown noise preset '{name}'")]
    UnknownPreset {
        /// The requested name.
        name: String,
    },

    /// `from` and `to` have a different number of axes.
    #[error("dimension mismatch: 'from' has {from} axes, 'to' has {to}")]
    DimensionMismatch {
        /// Number of axes in `from`.
        from: usize,
        /// Number of axes in `to`.
        to: usize,
    },

    /// Tried to normalize a vector with length zero.
    #[error("cannot normalize zero-length vector ({x}, {y})")]
    ZeroLengthVector {
        /// First component.
        x: f64,
        /// Second component.
        y: f64,
    },

    /// Resolution below one sample per unit.
    #[error("invalid resolution: {resolution} (must be at least 1)")]
    InvalidResolution {
        /// The invalid resolution.
        resolution: u32,
    },

    /// A required coordinate list was empty.
    #[error("'{field}' must not be empty")]
    EmptyRange {
        /// Field name.
        field: &'static str,
    },

    /// An axis range is empty, or a bound is non-finite or past 2^53.
    #[error("axis {axis}: invalid range [{from}, {to})")]
    InvalidRange {
        /// Axis index.
        axis: usize,
        /// Lower bound.
        from: f64,
        /// Upper bound.
        to: f64,
    },

    /// The noise function is only defined for a fixed number of axes.
    #[error("noise function '{function}' is defined for {expected} axes, domain has {found}")]
    UnsupportedDimension {
        /// Preset name or kind of the function.
        function: String,
        /// Axes the function is defined over.
        expected: usize,
        /// Axes in the sampled domain.
        found: usize,
    },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NoiseError {
    /// Creates an unknown preset error.
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            NoiseError::UnknownPreset { .. } => "NOISE_001",
            NoiseError::DimensionMismatch { .. } => "NOISE_002",
            NoiseError::ZeroLengthVector { .. } => "NOISE_003",
            NoiseError::InvalidResolution { .. } => "NOISE_004",
            NoiseError::EmptyRange { .. } => "NOISE_005",
            NoiseError::InvalidRange { .. } => "NOISE_006",
            NoiseError::UnsupportedDimension { .. } => "NOISE_007",
            NoiseError::Json(_) => "NOISE_008",
        }
    }

    /// Error category, shared by all engine errors.
    pub fn category(&self) -> &'static str {
        "noise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NoiseError::unknown_preset("green");
        assert_eq!(err.to_string(), "unknown noise preset 'green'");

        let err = NoiseError::DimensionMismatch { from: 2, to: 1 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: 'from' has 2 axes, 'to' has 1"
        );
    }

    #[test]
    fn test_error_codes_are_unique() {
        let errors = [
            NoiseError::unknown_preset("x"),
            NoiseError::DimensionMismatch { from: 1, to: 2 },
            NoiseError::ZeroLengthVector { x: 0.0, y: 0.0 },
            NoiseError::InvalidResolution { resolution: 0 },
            NoiseError::EmptyRange { field: "from" },
            NoiseError::InvalidRange {
                axis: 0,
                from: 1.0,
                to: 0.0,
            },
            NoiseError::UnsupportedDimension {
                function: "rawPerlin".to_string(),
                expected: 2,
                found: 1,
            },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.category() == "noise"));
    }
}
