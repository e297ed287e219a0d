//! Closed-form 2-D geometric constraint solver.
//!
//! Given a set of labeled planar points with initial (guessed) positions and a
//! set of geometric constraints among them, [`solve`] returns new positions that
//! satisfy the constraints when possible, and reports which points were
//! under-constrained (their position was chosen from the initial guess).
//!
//! The crate has three layers, leaves first: [`geometry`] (pure primitives over
//! positions, lines and circles), [`gamut`] (a closed algebra of planar loci with
//! sound intersection operators), and [`solver`] (the propagation loop that picks
//! which point to solve next and drives the whole thing to completion).

pub mod geometry;
pub mod gamut;
pub mod solver;

pub use geometry::Position;
pub use gamut::Gamut;
pub use solver::{solve, solve_with_config, Constraint, PointId, PointPair, SolveConfig, SolveOutput, SolveStep};

/// Crate version, exposed for diagnostics the way the host project exposes its own.
pub fn version() -> &'static str {
    "0.1.0"
}
