use super::*;
use crate::geometry::{Circle, Line, EPSILON};

fn p(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn assert_commutes(a: &Gamut, b: &Gamut, queries: &[Position]) {
    let ab = intersect(a, b, EPSILON);
    let ba = intersect(b, a, EPSILON);
    for &q in queries {
        let na = nearest(&ab, q, EPSILON);
        let nb = nearest(&ba, q, EPSILON);
        match (na, nb) {
            (None, None) => {}
            (Some(x), Some(y)) => assert!(distance(x, y) < EPSILON, "{x:?} vs {y:?} for query {q:?}"),
            _ => panic!("one side is empty and the other isn't: {ab:?} vs {ba:?}"),
        }
    }
}

#[test]
fn commutativity_circle_and_circle() {
    let a = Gamut::circle(Circle::new(p(0.0, 0.0), 5.0));
    let b = Gamut::circle(Circle::new(p(6.0, 0.0), 5.0));
    assert_commutes(&a, &b, &[p(0.0, 0.0), p(10.0, 10.0)]);
}

#[test]
fn commutativity_circle_and_line() {
    let a = Gamut::circle(Circle::new(p(0.0, 0.0), 5.0));
    let b = Gamut::line(Line::new(p(-10.0, 0.0), p(10.0, 0.0)), EPSILON);
    assert_commutes(&a, &b, &[p(0.0, 0.0), p(3.0, 3.0)]);
}

#[test]
fn commutativity_line_and_line() {
    let a = Gamut::line(Line::new(p(0.0, 0.0), p(10.0, 10.0)), EPSILON);
    let b = Gamut::line(Line::new(p(0.0, 10.0), p(10.0, 0.0)), EPSILON);
    assert_commutes(&a, &b, &[p(5.0, 5.0), p(0.0, 0.0)]);
}

#[test]
fn commutativity_point_and_circle() {
    let a = Gamut::point(p(5.0, 0.0));
    let b = Gamut::circle(Circle::new(p(0.0, 0.0), 5.0));
    assert_commutes(&a, &b, &[p(5.0, 0.0), p(0.0, 0.0)]);
}

#[test]
fn commutativity_union_and_circle() {
    let a = Gamut::union(vec![Gamut::circle(Circle::new(p(0.0, 0.0), 5.0)), Gamut::circle(Circle::new(p(20.0, 0.0), 5.0))]);
    let b = Gamut::circle(Circle::new(p(6.0, 0.0), 5.0));
    assert_commutes(&a, &b, &[p(0.0, 0.0), p(20.0, 0.0)]);
}

#[test]
fn circle_and_disjoint_circle_is_void() {
    let a = Gamut::circle(Circle::new(p(0.0, 0.0), 1.0));
    let b = Circle::new(p(100.0, 0.0), 1.0);
    assert_eq!(intersect_circle(&a, &b, EPSILON), Gamut::Void);
}

#[test]
fn line_coincident_with_one_of_two_candidates_returns_whole_line() {
    let l0 = Line::new(p(0.0, 0.0), p(10.0, 0.0));
    let coincident = Line::new(p(-5.0, 0.0), p(5.0, 0.0));
    let other = Line::new(p(0.0, 0.0), p(0.0, 10.0));
    let result = intersect_lines(&Gamut::line(l0, EPSILON), &[other, coincident], EPSILON);
    match result {
        Gamut::Line(l) => assert!(l.distance_to_point(p(3.0, 0.0), EPSILON) < EPSILON),
        other => panic!("expected the whole coincident line, got {other:?}"),
    }
}

#[test]
fn line_parallel_and_separated_from_candidate_is_void() {
    let l0 = Line::new(p(0.0, 0.0), p(10.0, 0.0));
    let separated = Line::new(p(0.0, 5.0), p(10.0, 5.0));
    let result = intersect_lines(&Gamut::line(l0, EPSILON), &[separated], EPSILON);
    assert_eq!(result, Gamut::Void);
}

#[test]
fn line_crosses_two_non_parallel_candidates_at_two_points() {
    let l0 = Line::new(p(-10.0, 0.0), p(10.0, 0.0));
    let l1 = Line::new(p(-5.0, -10.0), p(-5.0, 10.0));
    let l2 = Line::new(p(5.0, -10.0), p(5.0, 10.0));
    let result = intersect_lines(&Gamut::line(l0, EPSILON), &[l1, l2], EPSILON);
    match result {
        Gamut::Union(members) => assert_eq!(members.len(), 2),
        other => panic!("expected two crossing points, got {other:?}"),
    }
}
