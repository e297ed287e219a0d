//! Closed-form intersection routines between lines and circles.
//!
//! These mirror the three cases enumerated in the geometry-kernel section of
//! the spec: line-line, circle-circle and circle-line. None of them loop or
//! iterate; each is a direct evaluation of a closed-form formula, with
//! explicit epsilon-gated branches for the degenerate cases (parallel lines,
//! concentric circles, tangency) instead of NaN propagation.

use super::{distance, dot, subtract, unit, Circle, Line, Position};

/// Intersection of two infinite lines.
///
/// Returns `None` when the lines are parallel (including coincident) — the
/// locus algebra is responsible for telling coincident and disjoint parallels
/// apart, since that distinction depends on which line is being intersected
/// with what, not on this primitive.
pub fn line_line_intersection(a: &Line, b: &Line, epsilon: f64) -> Option<Position> {
    let da = a.direction(epsilon)?;
    let db = b.direction(epsilon)?;

    // Project along a normal to `a`'s direction; the denominator is the sine
    // of the angle between the two directions and vanishes exactly when they
    // are parallel. Checked bit-exact, not against epsilon: `da`/`db` are
    // already-normalized unit vectors, so truly parallel directions produce
    // an exact zero here, not merely a small one.
    let normal = super::perpendicular(da);
    let denom = dot(normal, db);
    if denom == 0.0 {
        return None;
    }

    let t = dot(normal, subtract(a.from, b.from)) / denom;
    Some(Position::new(b.from.x + db.x * t, b.from.y + db.y * t))
}

/// Intersection of two circles.
///
/// - Coincident centers, equal radii: the two circles are the same circle —
///   represented by returning both as `CircleCircle::SameCircle`.
/// - Coincident centers, different radii: no intersection.
/// - Separation equals the sum or absolute difference of the radii (within
///   epsilon): the circles are tangent at a single point.
/// - Otherwise: the Law of Cosines gives the half-angle at `a`'s center; an
///   out-of-range arccosine argument means the circles are too far apart or
///   one is nested inside the other with no intersection.
pub fn circle_circle_intersection(a: &Circle, b: &Circle, epsilon: f64) -> CircleCircle {
    let d = distance(a.center, b.center);

    if d < epsilon {
        return if (a.radius - b.radius).abs() < epsilon {
            CircleCircle::SameCircle
        } else {
            CircleCircle::None
        };
    }

    if (d - (a.radius + b.radius)).abs() < epsilon || (d - (a.radius - b.radius).abs()).abs() < epsilon {
        let t = a.radius / d;
        let point = Position::new(
            a.center.x + t * (b.center.x - a.center.x),
            a.center.y + t * (b.center.y - a.center.y),
        );
        return CircleCircle::Tangent(point);
    }

    // Law of Cosines: cos(theta) = (r1^2 + d^2 - r2^2) / (2 * r1 * d)
    let cos_theta = (a.radius * a.radius + d * d - b.radius * b.radius) / (2.0 * a.radius * d);
    if cos_theta < -1.0 || cos_theta > 1.0 {
        return CircleCircle::None;
    }

    let theta = cos_theta.acos();
    let base = unit(subtract(b.center, a.center), epsilon).expect("centers are separated by more than epsilon");
    let bearing = base.y.atan2(base.x);

    let p1 = Position::new(
        a.center.x + a.radius * (bearing + theta).cos(),
        a.center.y + a.radius * (bearing + theta).sin(),
    );
    let p2 = Position::new(
        a.center.x + a.radius * (bearing - theta).cos(),
        a.center.y + a.radius * (bearing - theta).sin(),
    );
    CircleCircle::Two(p1, p2)
}

/// Result of [`circle_circle_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleCircle {
    None,
    SameCircle,
    Tangent(Position),
    Two(Position, Position),
}

/// Intersection of a circle with an infinite line.
pub fn circle_line_intersection(circle: &Circle, line: &Line, epsilon: f64) -> CircleLine {
    let dir = match line.direction(epsilon) {
        None => return CircleLine::None,
        Some(d) => d,
    };

    let nearest = line.project_point(circle.center, epsilon);
    let d = distance(circle.center, nearest);

    if d <= epsilon {
        let p1 = Position::new(circle.center.x + dir.x * circle.radius, circle.center.y + dir.y * circle.radius);
        let p2 = Position::new(circle.center.x - dir.x * circle.radius, circle.center.y - dir.y * circle.radius);
        return CircleLine::Two(p1, p2);
    }

    let rem = circle.radius * circle.radius - d * d;
    if rem < -epsilon {
        return CircleLine::None;
    }
    if rem.abs() <= epsilon {
        return CircleLine::Tangent(nearest);
    }

    let h = rem.sqrt();
    let p1 = Position::new(nearest.x + dir.x * h, nearest.y + dir.y * h);
    let p2 = Position::new(nearest.x - dir.x * h, nearest.y - dir.y * h);
    CircleLine::Two(p1, p2)
}

/// Result of [`circle_line_intersection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleLine {
    None,
    Tangent(Position),
    Two(Position, Position),
}
