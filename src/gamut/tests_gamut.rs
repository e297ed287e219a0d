use super::*;
use crate::geometry::{Circle, EPSILON};

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

#[test]
fn freedom_survives_simplify() {
    let g = Gamut::Union(vec![Gamut::Void, Gamut::point(p(1.0, 1.0)), Gamut::point(p(2.0, 2.0))]);
    assert_eq!(freedom(&g), freedom(&simplify(g)));
}

#[test]
fn is_empty_survives_simplify() {
    let g = Gamut::Union(vec![Gamut::Void, Gamut::Void, Gamut::Void]);
    assert_eq!(is_empty(&g), is_empty(&simplify(g)));
    assert!(is_empty(&simplify(g)));
}

#[test]
fn simplify_is_idempotent() {
    let g = Gamut::Union(vec![
        Gamut::Union(vec![Gamut::point(p(0.0, 0.0)), Gamut::Void]),
        Gamut::circle(Circle::new(p(1.0, 1.0), 2.0)),
    ]);
    let once = simplify(g);
    let twice = simplify(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn singleton_union_collapses_to_member() {
    let g = simplify(Gamut::Union(vec![Gamut::Void, Gamut::point(p(3.0, 4.0))]));
    assert_eq!(g, Gamut::point(p(3.0, 4.0)));
}

#[test]
fn void_is_distinct_from_empty_union_literal() {
    // Both represent the empty set but are different values until simplified.
    let literal_void = Gamut::Void;
    let empty_union = Gamut::Union(vec![]);
    assert_ne!(literal_void, empty_union);
    assert_eq!(simplify(empty_union), literal_void);
}

#[test]
fn nearest_result_lies_on_circle_boundary() {
    let c = Circle::new(p(5.0, 5.0), 3.0);
    let g = Gamut::circle(c);
    for q in [p(0.0, 0.0), p(100.0, -50.0), p(5.0, 5.0001)] {
        let n = nearest(&g, q, EPSILON).unwrap();
        assert!((distance(n, c.center) - c.radius).abs() < EPSILON, "nearest point must sit on the circle");
    }
}

#[test]
fn nearest_result_lies_on_line() {
    let l = crate::geometry::Line::new(p(0.0, 0.0), p(10.0, 10.0));
    let g = Gamut::line(l, EPSILON);
    let n = nearest(&g, p(0.0, 10.0), EPSILON).unwrap();
    assert!(l.distance_to_point(n, EPSILON) < EPSILON);
}

#[test]
fn nearest_breaks_ties_by_member_order() {
    // Two points equidistant from the query; the first member must win.
    let g = Gamut::Union(vec![Gamut::point(p(-1.0, 0.0)), Gamut::point(p(1.0, 0.0))]);
    let n = nearest(&g, p(0.0, 0.0), EPSILON).unwrap();
    assert_eq!(n, p(-1.0, 0.0));
}

#[test]
fn intersect_with_plane_is_identity() {
    let g = Gamut::circle(Circle::new(p(1.0, 2.0), 3.0));
    assert_eq!(intersect(&g, &Gamut::Plane, EPSILON), g);
    assert_eq!(intersect(&Gamut::Plane, &g, EPSILON), g);
}

#[test]
fn intersect_with_void_is_void() {
    let g = Gamut::circle(Circle::new(p(1.0, 2.0), 3.0));
    assert_eq!(intersect(&g, &Gamut::Void, EPSILON), Gamut::Void);
    assert_eq!(intersect(&Gamut::Void, &g, EPSILON), Gamut::Void);
}

#[test]
fn intersect_circle_circle_matches_kernel() {
    let a = Gamut::circle(Circle::new(p(0.0, 0.0), 5.0));
    let b = Circle::new(p(6.0, 0.0), 5.0);
    let result = intersect_circle(&a, &b, EPSILON);
    match result {
        Gamut::Union(members) => assert_eq!(members.len(), 2),
        other => panic!("expected two intersection points, got {other:?}"),
    }
}

#[test]
fn intersect_lines_with_plane_yields_union_of_lines() {
    let l1 = crate::geometry::Line::new(p(0.0, 0.0), p(1.0, 0.0));
    let l2 = crate::geometry::Line::new(p(0.0, 0.0), p(0.0, 1.0));
    match intersect_lines(&Gamut::Plane, &[l1, l2], EPSILON) {
        Gamut::Union(members) => assert_eq!(members.len(), 2),
        other => panic!("expected a union of two lines, got {other:?}"),
    }
}
