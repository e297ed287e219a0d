//! Universal properties of the propagation solver (as opposed to scenario
//! tests for specific constraint graphs): see `tests_solver.rs` for those.

use super::*;
use crate::geometry::Position;
use indexmap::IndexMap;

fn map(pairs: &[(&str, f64, f64)]) -> PointMap {
    let mut m: IndexMap<PointId, Position> = IndexMap::new();
    for (id, x, y) in pairs {
        m.insert((*id).to_string(), Position::new(*x, *y));
    }
    m
}

#[test]
fn solving_with_no_constraints_returns_the_initial_positions_and_marks_everything_arbitrary() {
    let initial = map(&[("a", 1.0, 2.0), ("b", -3.0, 4.5), ("c", 0.0, 0.0)]);
    let out = solve(initial.clone(), Vec::new());

    assert_eq!(out.solution, initial);
    let mut arbitrary = out.arbitrary.clone();
    arbitrary.sort();
    let mut expected: Vec<PointId> = initial.keys().cloned().collect();
    expected.sort();
    assert_eq!(arbitrary, expected);
    assert!(out.log.is_empty());
}

#[test]
fn solving_twice_on_equal_inputs_is_deterministic() {
    let initial = map(&[("a", 10.0, 10.0), ("b", 50.0, 0.0), ("c", 0.0, 50.0)]);
    let constraints = vec![
        Constraint::Fixed { a: "a".into(), position: Position::new(0.0, 0.0) },
        Constraint::Distance { a: "a".into(), b: "b".into(), distance: 40.0 },
        Constraint::Distance { a: "a".into(), b: "c".into(), distance: 40.0 },
        Constraint::Distance { a: "b".into(), b: "c".into(), distance: 40.0 },
    ];

    let first = solve(initial.clone(), constraints.clone());
    let second = solve(initial, constraints);

    assert_eq!(first.solution, second.solution);
    assert_eq!(first.arbitrary, second.arbitrary);
    assert_eq!(first.log.len(), second.log.len());
    for (a, b) in first.log.iter().zip(second.log.iter()) {
        assert_eq!(a.variable, b.variable);
        assert_eq!(a.position, b.position);
        assert_eq!(a.freedom, b.freedom);
    }
}

#[test]
fn ties_break_by_initial_map_iteration_order() {
    // Two points, neither fixed nor connected by any constraint that could
    // ever become certain without the other already being solved first: both
    // start at Plane freedom every round, so the first is always picked by
    // insertion order, never the second.
    let initial = map(&[("first", 1.0, 1.0), ("second", 2.0, 2.0)]);
    let constraints = vec![Constraint::Distance { a: "first".into(), b: "second".into(), distance: 5.0 }];

    let out = solve(initial, constraints);
    assert_eq!(out.log[0].variable, "first");
}
