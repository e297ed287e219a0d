//! The propagation solver: translates constraints into loci via the
//! [`crate::gamut`] algebra and greedily commits the most-constrained point
//! each round until every point is solved or no further progress is possible.

mod config;
mod constraint;
mod propagate;

#[cfg(test)]
mod tests_properties;

pub use config::SolveConfig;
pub use constraint::{Constraint, PointId, PointPair};
pub use propagate::{locus_of, solve, solve_local, solve_with_config, PointMap, SolveOutput, SolveStep};
