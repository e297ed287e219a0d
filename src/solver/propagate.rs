//! Constraint-to-locus translation (`locus_of`) and the greedy
//! most-constrained-first propagation loop (`solve`).

use super::config::SolveConfig;
use super::constraint::{Constraint, PointId, PointPair};
use crate::gamut::{freedom, intersect, nearest, Gamut};
use crate::geometry::{add, distance, perpendicular, scale, subtract, unit, Circle, Line, Position};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// An insertion-order-preserving map from point id to position. The
/// propagation loop's determinism (same input -> same solution and log)
/// depends on iterating this in insertion order, which `std::HashMap` does
/// not guarantee.
pub type PointMap = IndexMap<PointId, Position>;

/// One committed step of the propagation loop, recorded for the host's
/// diagnostic panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveStep {
    pub variable: PointId,
    pub initial: Position,
    pub constraint_loci: Vec<Gamut>,
    pub locus: Gamut,
    pub freedom: u64,
    pub position: Position,
}

/// Result of a full solve: the solved positions (keyed in the same order as
/// the caller's `initial` map) plus the diagnostic log and the set of ids
/// that were never determined by the constraint system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveOutput {
    pub solution: PointMap,
    pub log: Vec<SolveStep>,
    pub arbitrary: Vec<PointId>,
}

fn contains(pair: &PointPair, v: &str) -> bool {
    pair.0 == v || pair.1 == v
}

fn other_of<'a>(pair: &'a PointPair, v: &str) -> &'a PointId {
    if pair.0 == v {
        &pair.1
    } else {
        &pair.0
    }
}

fn line_through(origin: Position, direction: Position) -> Line {
    Line::new(origin, add(origin, direction))
}

/// The set of positions a point may occupy given a constraint whose other
/// dependencies are already solved. Returns `Gamut::Plane` when the
/// constraint carries no information about `v` (an undefined direction
/// somewhere in its payload), `Gamut::Void` when it is infeasible.
pub fn locus_of(v: &str, c: &Constraint, solved: &PointMap, epsilon: f64) -> Gamut {
    match c {
        Constraint::Fixed { position, .. } => Gamut::point(*position),
        Constraint::Distance { a, b, distance: d } => {
            let other = if a == v { b } else { a };
            Gamut::circle(Circle::new(solved[other], *d))
        }
        Constraint::Angle { a, b, theta } => angle_locus(v, a, b, *theta, solved, epsilon),
        Constraint::SegmentDistance { point, segment, distance: d } => {
            segment_distance_locus(v, point, segment, *d, solved, epsilon)
        }
    }
}

fn angle_locus(v: &str, a: &PointPair, b: &PointPair, theta: f64, solved: &PointMap, epsilon: f64) -> Gamut {
    match (contains(a, v), contains(b, v)) {
        (true, true) => {
            // Inscribed angle theorem: v is the shared vertex of both pairs.
            let pa = solved[other_of(a, v)];
            let pb = solved[other_of(b, v)];
            inscribed_angle_locus(pa, pb, theta, epsilon)
        }
        (true, false) => standard_angle_locus(v, a, b, theta, solved, epsilon),
        (false, true) => standard_angle_locus(v, b, a, theta, solved, epsilon),
        (false, false) => {
            debug_assert!(false, "locus_of called for an angle constraint that does not mention {v}");
            Gamut::Plane
        }
    }
}

/// Case A of the angle constraint: the union of the two circles through `a`
/// and `b` for which `a`-v-`b` subtends `theta`.
fn inscribed_angle_locus(a: Position, b: Position, theta: f64, epsilon: f64) -> Gamut {
    let ab = distance(a, b);
    if ab < epsilon {
        return Gamut::Void;
    }
    let tan_theta = theta.tan();
    if tan_theta.abs() < epsilon {
        // theta near 0 or pi: the bisecting height diverges, the limiting
        // locus degenerates to the line through a and b. Not representable
        // as a finite-radius circle; treated as infeasible.
        return Gamut::Void;
    }

    let midpoint = Position::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let dir = unit(subtract(b, a), epsilon).expect("ab >= epsilon guarantees a direction");
    let n = perpendicular(dir);
    let h = (ab / 2.0) / tan_theta;

    let c1 = add(midpoint, scale(n, h));
    let c2 = add(midpoint, scale(n, -h));
    let r = distance(c1, a);

    Gamut::union(vec![Gamut::circle(Circle::new(c1, r)), Gamut::circle(Circle::new(c2, r))])
}

/// Case B of the angle constraint: the pair of infinite lines through
/// `my_line`'s known point making angle `theta` with `other_line`'s direction.
fn standard_angle_locus(v: &str, my_line: &PointPair, other_line: &PointPair, theta: f64, solved: &PointMap, epsilon: f64) -> Gamut {
    let u = match unit(subtract(solved[&other_line.1], solved[&other_line.0]), epsilon) {
        None => return Gamut::Plane,
        Some(u) => u,
    };
    let alpha = u.y.atan2(u.x);
    let through = solved[other_of(my_line, v)];

    let plus = Position::new((alpha + theta).cos(), (alpha + theta).sin());
    let line_plus = line_through(through, plus);

    if theta.abs() <= epsilon || (theta - FRAC_PI_2).abs() <= epsilon {
        return Gamut::line(line_plus, epsilon);
    }

    let minus = Position::new((alpha - theta).cos(), (alpha - theta).sin());
    let line_minus = line_through(through, minus);
    Gamut::union(vec![Gamut::line(line_plus, epsilon), Gamut::line(line_minus, epsilon)])
}

fn segment_distance_locus(v: &str, point: &str, segment: &PointPair, d: f64, solved: &PointMap, epsilon: f64) -> Gamut {
    if point == segment.0 || point == segment.1 {
        // A point on the segment cannot simultaneously sit at a nonzero
        // perpendicular distance from the line through itself; the source
        // leaves this unconstraining rather than treating d=0 as satisfied.
        return Gamut::Plane;
    }

    if v == point {
        let a = solved[&segment.0];
        let b = solved[&segment.1];
        let dir = match unit(subtract(b, a), epsilon) {
            None => return Gamut::Plane,
            Some(dir) => dir,
        };
        let n = perpendicular(dir);
        let offset_pos = add(a, scale(n, d));
        if d < epsilon {
            return Gamut::line(line_through(offset_pos, dir), epsilon);
        }
        let offset_neg = add(a, scale(n, -d));
        return Gamut::union(vec![
            Gamut::line(line_through(offset_pos, dir), epsilon),
            Gamut::line(line_through(offset_neg, dir), epsilon),
        ]);
    }

    // v is one of the segment's endpoints.
    let other_endpoint = if v == segment.0 { &segment.1 } else { &segment.0 };
    let a_pos = solved[point];
    let b_pos = solved[other_endpoint];
    let ab = distance(a_pos, b_pos);

    if ab < epsilon {
        return Gamut::Plane;
    }
    if (ab - d).abs() < epsilon {
        let dir = unit(subtract(a_pos, b_pos), epsilon).expect("ab >= epsilon guarantees a direction");
        return Gamut::line(line_through(b_pos, perpendicular(dir)), epsilon);
    }
    if d > ab {
        return Gamut::Void;
    }

    let theta = (d / ab).asin();
    let u = unit(subtract(a_pos, b_pos), epsilon).expect("ab >= epsilon guarantees a direction");
    let alpha = u.y.atan2(u.x);

    let plus = Position::new((alpha + theta).cos(), (alpha + theta).sin());
    let line_plus = line_through(b_pos, plus);
    if theta.abs() < epsilon {
        return Gamut::line(line_plus, epsilon);
    }

    let minus = Position::new((alpha - theta).cos(), (alpha - theta).sin());
    let line_minus = line_through(b_pos, minus);
    Gamut::union(vec![Gamut::line(line_plus, epsilon), Gamut::line(line_minus, epsilon)])
}

/// Fold every `certain` constraint's locus into a running intersection,
/// starting from the unconstrained plane.
pub fn solve_local(v: &str, certain: &[&Constraint], solved: &PointMap, epsilon: f64) -> (Gamut, Vec<Gamut>, u64) {
    let mut g = Gamut::Plane;
    let mut loci = Vec::with_capacity(certain.len());
    for c in certain {
        let lc = locus_of(v, c, solved, epsilon);
        g = intersect(&g, &lc, epsilon);
        loci.push(lc);
    }
    let f = freedom(&g);
    (g, loci, f)
}

/// Solve `constraints` for `initial`'s points using the default tolerance.
pub fn solve(initial: PointMap, constraints: Vec<Constraint>) -> SolveOutput {
    solve_with_config(initial, constraints, SolveConfig::default())
}

/// Solve `constraints` for `initial`'s points, with explicit tolerance/step
/// budget overrides. See [`SolveConfig`] and the module-level docs for the
/// propagation algorithm.
pub fn solve_with_config(initial: PointMap, constraints: Vec<Constraint>, config: SolveConfig) -> SolveOutput {
    let epsilon = config.epsilon;
    let mut solved: PointMap = PointMap::new();
    let mut log = Vec::new();
    let mut arbitrary = Vec::new();

    let mut unsolved: Vec<PointId> = initial.keys().cloned().collect();

    // A point nothing ever constrains can never be narrowed by propagation:
    // folding zero constraints always yields the full plane. Settle these up
    // front, without a log entry, rather than let them occupy a round.
    unsolved.retain(|id| {
        let has_dependency = constraints.iter().any(|c| c.mentions(id));
        if !has_dependency {
            solved.insert(id.clone(), initial[id]);
            arbitrary.push(id.clone());
        }
        has_dependency
    });

    let mut steps_taken = 0usize;
    while !unsolved.is_empty() {
        steps_taken += 1;
        debug_assert!(
            steps_taken <= config.max_steps,
            "propagation exceeded its step budget; every round commits or falls back, so this indicates a broken invariant"
        );

        let mut best: Option<(usize, Gamut, Vec<Gamut>, u64)> = None;
        for (idx, v) in unsolved.iter().enumerate() {
            let certain: Vec<&Constraint> = constraints
                .iter()
                .filter(|c| c.mentions(v) && c.other_dependencies(v).iter().all(|dep| solved.contains_key(dep.as_str())))
                .collect();
            let (g, loci, f) = solve_local(v, &certain, &solved, epsilon);

            let improves = match &best {
                None => f != 0,
                Some((_, _, _, best_f)) => f != 0 && f < *best_f,
            };
            if improves {
                best = Some((idx, g, loci, f));
            }
        }

        match best {
            None => {
                for id in unsolved.drain(..) {
                    solved.insert(id.clone(), initial[&id]);
                    arbitrary.push(id);
                }
            }
            Some((idx, gamut, loci, f)) => {
                let id = unsolved.remove(idx);
                let guess = initial[&id];
                let position = nearest(&gamut, guess, epsilon).unwrap_or(guess);
                solved.insert(id.clone(), position);
                log.push(SolveStep { variable: id, initial: guess, constraint_loci: loci, locus: gamut, freedom: f, position });
            }
        }
    }

    let solution: PointMap = initial.keys().map(|id| (id.clone(), solved[id])).collect();
    SolveOutput { solution, log, arbitrary }
}
