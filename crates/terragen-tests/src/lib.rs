//! Terragen End-to-End Test Infrastructure
//!
//! This crate holds integration tests for the noise engine:
//!
//! - **Determinism**: same preset + seed + parameters produce bit-identical
//!   samples across runs
//! - **Sampling**: cardinality, ordering and JSON shape of sampling results
//! - **Properties**: proptest checks of interpolation, octave and cache laws
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p terragen-tests
//! ```

pub mod determinism;
