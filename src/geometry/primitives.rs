//! Lines, segments and circles built on top of the [`super::Position`] algebra.

use super::{distance, subtract, unit, Position};
use serde::{Deserialize, Serialize};

/// An infinite line through two distinct positions.
///
/// Construction never fails: near-coincident endpoints simply produce a line
/// whose [`Line::direction`] is `None`, and callers (the locus algebra, mostly)
/// treat that as "direction undefined" rather than panicking. This mirrors the
/// source's choice to let degenerate geometry flow through as data instead of
/// raising at the boundary (see the crate's error-handling design).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Position,
    pub to: Position,
}

impl Line {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Unit direction vector from `from` to `to`, or `None` if the two
    /// endpoints are within `epsilon` of each other.
    pub fn direction(&self, epsilon: f64) -> Option<Position> {
        unit(subtract(self.to, self.from), epsilon)
    }

    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.direction(epsilon).is_none()
    }

    /// Perpendicular distance from `point` to this line's underlying infinite
    /// line. Degenerate lines fall back to the distance to `from`.
    pub fn distance_to_point(&self, point: Position, epsilon: f64) -> f64 {
        match self.direction(epsilon) {
            None => distance(self.from, point),
            Some(dir) => {
                let v = subtract(point, self.from);
                let proj_len = v.x * dir.x + v.y * dir.y;
                let proj = Position::new(self.from.x + dir.x * proj_len, self.from.y + dir.y * proj_len);
                distance(point, proj)
            }
        }
    }

    pub fn project_point(&self, point: Position, epsilon: f64) -> Position {
        super::project_onto_line(self.from, self.to, point, epsilon)
    }
}

/// A finite segment, used only for projection helpers (clamped-parameter
/// closest point); the locus algebra itself only ever reasons about the
/// infinite [`Line`] through a constraint's two reference points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Position,
    pub end: Position,
}

impl Segment {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Closest point on the finite segment to `point` (parameter clamped to `[0,1]`).
    pub fn closest_point(&self, point: Position, epsilon: f64) -> Position {
        let dir = subtract(self.end, self.start);
        let len_sq = dir.x * dir.x + dir.y * dir.y;
        if len_sq < epsilon * epsilon {
            return self.start;
        }
        let v = subtract(point, self.start);
        let t = ((v.x * dir.x + v.y * dir.y) / len_sq).clamp(0.0, 1.0);
        Position::new(self.start.x + t * dir.x, self.start.y + t * dir.y)
    }
}

/// A circle. Negative input radii are normalized to their absolute value at
/// construction, matching the spec's data-model invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Position,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Position, radius: f64) -> Self {
        Self { center, radius: radius.abs() }
    }

    pub fn contains_on_boundary(&self, point: Position, epsilon: f64) -> bool {
        (distance(self.center, point) - self.radius).abs() < epsilon
    }
}
