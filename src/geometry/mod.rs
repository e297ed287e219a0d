//! Pure 2-D geometry primitives shared by the locus algebra and the solver.
//!
//! Everything here is a total function of its inputs: no allocation beyond the
//! returned value, no I/O, no degenerate-input panics. Degenerate cases (zero
//! vectors, coincident points) are reported through `Option`/explicit guards
//! rather than through NaN propagation.

use serde::{Deserialize, Serialize};

pub mod primitives;
pub use primitives::*;

pub mod intersection;
pub use intersection::*;

/// Default numerical tolerance, in millimeters, for all geometric comparisons.
///
/// Call sites that need to honor a caller-supplied [`crate::SolveConfig`] take an
/// explicit `epsilon: f64` parameter instead of reading this constant directly;
/// it exists as the value `SolveConfig::default()` resolves to.
pub const EPSILON: f64 = 1e-3;

/// A point in the plane, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Approximate equality within a caller-supplied tolerance.
pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self - other).abs() < epsilon
    }
}

impl ApproxEq for Position {
    fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        distance(*self, *other) < epsilon
    }
}

/// Vector subtraction, `a - b`, as a free function to keep call sites symmetric
/// with [`linear_sum`] and the rest of the primitive algebra below.
#[inline]
pub fn subtract(a: Position, b: Position) -> Position {
    Position::new(a.x - b.x, a.y - b.y)
}

#[inline]
pub fn add(a: Position, b: Position) -> Position {
    Position::new(a.x + b.x, a.y + b.y)
}

#[inline]
pub fn scale(a: Position, s: f64) -> Position {
    Position::new(a.x * s, a.y * s)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Position, b: Position) -> f64 {
    magnitude(subtract(a, b))
}

/// Squared Euclidean distance; avoids the `sqrt` when only comparisons are needed.
#[inline]
pub fn distance_squared(a: Position, b: Position) -> f64 {
    let d = subtract(a, b);
    d.x * d.x + d.y * d.y
}

/// Length of a position treated as a vector from the origin.
#[inline]
pub fn magnitude(v: Position) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Unit vector in the direction of `v`, or `None` if `v` is (near) zero.
#[inline]
pub fn unit(v: Position, epsilon: f64) -> Option<Position> {
    let m = magnitude(v);
    if m < epsilon {
        None
    } else {
        Some(scale(v, 1.0 / m))
    }
}

/// 2-D dot product.
#[inline]
pub fn dot(a: Position, b: Position) -> f64 {
    a.x * b.x + a.y * b.y
}

/// 2-D cross product (z-component of the 3-D cross product of `a` and `b`
/// extended with a zero z-coordinate). Positive when `b` is counter-clockwise
/// from `a`.
#[inline]
pub fn cross(a: Position, b: Position) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotate `v` 90 degrees counter-clockwise.
#[inline]
pub fn perpendicular(v: Position) -> Position {
    Position::new(-v.y, v.x)
}

/// Affine combination `Σ c_i · v_i` of weighted positions.
pub fn linear_sum(terms: &[(f64, Position)]) -> Position {
    let mut acc = Position::new(0.0, 0.0);
    for (c, v) in terms {
        acc.x += c * v.x;
        acc.y += c * v.y;
    }
    acc
}

/// Orthogonal projection of `point` onto the infinite line through `start`
/// and `end`. Returns `point` unchanged if `start` and `end` coincide.
pub fn project_onto_line(start: Position, end: Position, point: Position, epsilon: f64) -> Position {
    let dir = subtract(end, start);
    match unit(dir, epsilon) {
        None => point,
        Some(u) => {
            let t = dot(subtract(point, start), u);
            add(start, scale(u, t))
        }
    }
}
