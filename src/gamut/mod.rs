//! The locus algebra: a closed set of planar subsets ("gamuts") with sound
//! simplification, freedom measurement, nearest-point queries and pairwise
//! intersection. This is the piece the propagation solver (`crate::solver`)
//! folds constraints through.

#[cfg(test)]
mod tests_gamut;
#[cfg(test)]
mod tests_intersection;

use crate::geometry::{
    circle_circle_intersection, circle_line_intersection, distance, line_line_intersection, Circle, CircleCircle,
    CircleLine, Line, Position,
};
use serde::{Deserialize, Serialize};

/// Freedom sentinel for a 1-D locus (circle or line). Chosen so that the sum
/// of any plausible number of 0-D (point) members stays strictly below it,
/// which is what makes "more dimensions" always outrank "more branches" in
/// the propagation comparator.
pub const F: u64 = 100_000;

/// A subset of the plane, represented as a closed tagged variant.
///
/// `Gamut` is immutable: every operation below takes gamuts by value or
/// reference and returns a fresh one. All public constructors of composite
/// gamuts funnel through [`simplify`] (or directly compute an already-simple
/// result), so every `Gamut` that escapes this module satisfies the
/// depth-one-union invariant from the data model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Gamut {
    Plane,
    Point(Position),
    Circle(Circle),
    Line(Line),
    Union(Vec<Gamut>),
    Void,
}

impl Gamut {
    pub fn point(p: Position) -> Self {
        debug_assert!(p.is_finite(), "Gamut::point given non-finite coordinates");
        Gamut::Point(p)
    }

    pub fn circle(c: Circle) -> Self {
        debug_assert!(c.radius.is_finite() && c.radius >= 0.0, "Gamut::circle given an invalid radius");
        Gamut::Circle(c)
    }

    pub fn line(l: Line, epsilon: f64) -> Self {
        debug_assert!(!l.is_degenerate(epsilon), "Gamut::line given coincident endpoints");
        Gamut::Line(l)
    }

    pub fn union(members: Vec<Gamut>) -> Self {
        simplify(Gamut::Union(members))
    }
}

/// Canonicalize a gamut: flatten one level of nested unions, drop `void`
/// members, collapse a union of zero members to `void` and a union of one
/// member to that member.
pub fn simplify(g: Gamut) -> Gamut {
    let Gamut::Union(members) = g else { return g };

    let mut flat = Vec::with_capacity(members.len());
    for m in members {
        match m {
            Gamut::Void => {}
            Gamut::Union(inner) => {
                for im in inner {
                    if !matches!(im, Gamut::Void) {
                        debug_assert!(!matches!(im, Gamut::Union(_)), "nested union deeper than one level");
                        flat.push(im);
                    }
                }
            }
            other => flat.push(other),
        }
    }

    match flat.len() {
        0 => Gamut::Void,
        1 => flat.into_iter().next().unwrap(),
        _ => Gamut::Union(flat),
    }
}

/// Dimensionality proxy used to rank candidate variables during propagation:
/// higher always beats lower, and a union's freedom is the sum of its
/// (already-simplified) members' freedoms.
pub fn freedom(g: &Gamut) -> u64 {
    match g {
        Gamut::Plane => F * F,
        Gamut::Circle(_) | Gamut::Line(_) => F,
        Gamut::Point(_) => 1,
        Gamut::Void => 0,
        Gamut::Union(members) => members.iter().map(freedom).sum(),
    }
}

/// True iff `g` represents the empty set: `void` itself, or a union all of
/// whose members are empty (accepted even if the union wasn't simplified).
pub fn is_empty(g: &Gamut) -> bool {
    match g {
        Gamut::Void => true,
        Gamut::Union(members) => members.iter().all(is_empty),
        _ => false,
    }
}

/// The position in `g` nearest to `q`, or `None` iff `g` is empty.
pub fn nearest(g: &Gamut, q: Position, epsilon: f64) -> Option<Position> {
    match g {
        Gamut::Plane => Some(q),
        Gamut::Point(p) => Some(*p),
        Gamut::Circle(c) => {
            if distance(q, c.center) <= epsilon {
                // Degenerate: query is at the center, every boundary point is
                // equally near. Pick deterministically.
                Some(Position::new(c.center.x + c.radius, c.center.y))
            } else {
                let dir = crate::geometry::unit(crate::geometry::subtract(q, c.center), epsilon)
                    .expect("distance check above guarantees a non-zero vector");
                Some(Position::new(c.center.x + dir.x * c.radius, c.center.y + dir.y * c.radius))
            }
        }
        Gamut::Line(l) => Some(l.project_point(q, epsilon)),
        Gamut::Void => None,
        Gamut::Union(members) => members
            .iter()
            .filter_map(|m| nearest(m, q, epsilon))
            .min_by(|a, b| distance(*a, q).partial_cmp(&distance(*b, q)).expect("distances are finite")),
    }
}

/// Intersect `g` with a circle `c`.
pub fn intersect_circle(g: &Gamut, c: &Circle, epsilon: f64) -> Gamut {
    match g {
        Gamut::Plane => Gamut::circle(*c),
        Gamut::Void => Gamut::Void,
        Gamut::Point(p) => {
            if c.contains_on_boundary(*p, epsilon) {
                Gamut::point(*p)
            } else {
                Gamut::Void
            }
        }
        Gamut::Circle(a) => match circle_circle_intersection(a, c, epsilon) {
            CircleCircle::SameCircle => Gamut::circle(*a),
            CircleCircle::None => Gamut::Void,
            CircleCircle::Tangent(p) => Gamut::point(p),
            CircleCircle::Two(p1, p2) => Gamut::union(vec![Gamut::point(p1), Gamut::point(p2)]),
        },
        Gamut::Line(l) => match circle_line_intersection(c, l, epsilon) {
            CircleLine::None => Gamut::Void,
            CircleLine::Tangent(p) => Gamut::point(p),
            CircleLine::Two(p1, p2) => Gamut::union(vec![Gamut::point(p1), Gamut::point(p2)]),
        },
        Gamut::Union(members) => simplify(Gamut::Union(members.iter().map(|m| intersect_circle(m, c, epsilon)).collect())),
    }
}

/// Intersect `g` with the union of a finite set of lines `lines` (used for
/// constraints whose locus is a pair of candidate lines, e.g. reflections
/// about an angle).
pub fn intersect_lines(g: &Gamut, lines: &[Line], epsilon: f64) -> Gamut {
    match g {
        Gamut::Plane => simplify(Gamut::Union(lines.iter().map(|l| Gamut::line(*l, epsilon)).collect())),
        Gamut::Void => Gamut::Void,
        Gamut::Point(p) => {
            let on_any = lines.iter().any(|l| l.distance_to_point(*p, epsilon) < epsilon);
            if on_any {
                Gamut::point(*p)
            } else {
                Gamut::Void
            }
        }
        Gamut::Circle(c) => {
            let mut points = Vec::new();
            for l in lines {
                match circle_line_intersection(c, l, epsilon) {
                    CircleLine::None => {}
                    CircleLine::Tangent(p) => points.push(Gamut::point(p)),
                    CircleLine::Two(p1, p2) => {
                        points.push(Gamut::point(p1));
                        points.push(Gamut::point(p2));
                    }
                }
            }
            simplify(Gamut::Union(points))
        }
        Gamut::Line(l0) => {
            // Non-parallel candidates each contribute their single crossing
            // point to the union; a parallel candidate is terminal and wins
            // outright, since it means ℓ0 either *is* (coincident) or avoids
            // entirely (separated) that whole branch of the locus.
            let mut points = Vec::new();
            for l in lines {
                match line_line_intersection(l0, l, epsilon) {
                    Some(p) => points.push(Gamut::point(p)),
                    None => {
                        let coincident = l0.distance_to_point(l.from, epsilon) <= epsilon;
                        return if coincident { Gamut::line(*l0, epsilon) } else { Gamut::Void };
                    }
                }
            }
            simplify(Gamut::Union(points))
        }
        Gamut::Union(members) => simplify(Gamut::Union(members.iter().map(|m| intersect_lines(m, lines, epsilon)).collect())),
    }
}

/// General pairwise intersection, dispatching on the shape of `b`.
///
/// Commutative in outcome (`nearest(intersect(a, b), q) == nearest(intersect(b, a), q)`
/// up to epsilon) even though the dispatch order below is not symmetric in
/// the code — see `tests_intersection::commutativity_*` for the property test.
pub fn intersect(a: &Gamut, b: &Gamut, epsilon: f64) -> Gamut {
    match (a, b) {
        (Gamut::Plane, _) => b.clone(),
        (_, Gamut::Plane) => a.clone(),
        (Gamut::Void, _) | (_, Gamut::Void) => Gamut::Void,
        (_, Gamut::Union(members)) => simplify(Gamut::Union(members.iter().map(|m| intersect(a, m, epsilon)).collect())),
        (_, Gamut::Circle(c)) => intersect_circle(a, c, epsilon),
        (_, Gamut::Line(l)) => intersect_lines(a, std::slice::from_ref(l), epsilon),
        (_, Gamut::Point(p)) => match nearest(a, *p, epsilon) {
            Some(n) if distance(n, *p) < epsilon => Gamut::point(*p),
            _ => Gamut::Void,
        },
    }
}
