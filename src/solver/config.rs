//! Solver configuration: the numerical knobs every comparison in the
//! geometry kernel and locus algebra threads through.

use serde::{Deserialize, Serialize};

/// Tunable parameters for a solve. Mirrors the host project's convention of a
/// small `*Config` struct with a `Default` impl (e.g. its `SnapConfig`) rather
/// than free-standing constants, so tests and advanced callers can override a
/// single field without rebuilding the whole configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolveConfig {
    /// Numerical tolerance, in millimeters, for every geometric comparison.
    pub epsilon: f64,
    /// Safety rail on the number of propagation steps. The loop always
    /// either commits exactly one point or falls back to arbitrary
    /// assignment every iteration, so it provably terminates within
    /// `initial.len()` iterations; this bound exists to fail loudly (via
    /// `debug_assert!`) if a future change breaks that invariant, not to
    /// change observable behavior for any currently valid input.
    pub max_steps: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self { epsilon: crate::geometry::EPSILON, max_steps: 10_000 }
    }
}
