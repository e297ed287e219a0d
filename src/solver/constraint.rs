//! The constraint sum type and its dependency analysis.

use crate::geometry::Position;
use serde::{Deserialize, Serialize};

/// A point identifier. Figures on the host side carry their own richer
/// identity; by the time a constraint reaches this crate it has already been
/// reduced to a plain string key (see the "no dynamic dispatch on figures"
/// design note).
pub type PointId = String;

/// An ordered pair of point ids, e.g. the two endpoints of a segment read
/// `p0 -> p1`. Order matters for [`Constraint::Angle`]: it defines which
/// direction the subtended angle is measured from.
pub type PointPair = (PointId, PointId);

/// A single geometric constraint between points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constraint {
    /// `a` must equal `position`.
    Fixed { a: PointId, position: Position },
    /// `|a - b| = distance`.
    Distance { a: PointId, b: PointId, distance: f64 },
    /// The undirected lines through `a` and through `b` meet at angle `theta`
    /// (acute or obtuse of equal significance).
    Angle { a: PointPair, b: PointPair, theta: f64 },
    /// Perpendicular distance from `point` to the infinite line through
    /// `segment` equals `distance`.
    SegmentDistance { point: PointId, segment: PointPair, distance: f64 },
}

impl Constraint {
    /// Every point id this constraint's payload mentions, duplicates included
    /// (a constraint naturally mentions the same id twice when, e.g., an
    /// angle's two reference pairs share a vertex).
    pub fn dependencies(&self) -> Vec<&PointId> {
        match self {
            Constraint::Fixed { a, .. } => vec![a],
            Constraint::Distance { a, b, .. } => vec![a, b],
            Constraint::Angle { a, b, .. } => vec![&a.0, &a.1, &b.0, &b.1],
            Constraint::SegmentDistance { point, segment, .. } => vec![point, &segment.0, &segment.1],
        }
    }

    /// True iff this constraint's payload mentions `id`.
    pub fn mentions(&self, id: &str) -> bool {
        self.dependencies().iter().any(|d| d.as_str() == id)
    }

    /// All dependencies of this constraint *other than* `v`, i.e. the ids
    /// that must already be solved for this constraint to be "certain" for
    /// `v` (duplicates removed).
    pub fn other_dependencies(&self, v: &str) -> Vec<&PointId> {
        let mut others: Vec<&PointId> = self.dependencies().into_iter().filter(|d| d.as_str() != v).collect();
        others.sort();
        others.dedup();
        others
    }
}
