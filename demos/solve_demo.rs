//! Minimal CLI that exercises `sketch_solver::solve` end to end: reads a
//! small JSON sketch description from a file path argument, solves it, and
//! prints the solution and diagnostic log. Not part of the library's API —
//! every genuinely fallible step lives here, not in `solve` itself.

use serde::Deserialize;
use sketch_solver::{solve, Constraint, PointId, SolveOutput};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("could not read sketch file {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("could not parse sketch JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a sketch description. A `BTreeMap` (not `PointMap`) is
/// used here deliberately: file order is whatever serde_json's object
/// iteration gives us, and the demo re-sorts by id for a stable printout
/// regardless, so there is nothing for insertion order to preserve at this
/// boundary.
#[derive(Debug, Deserialize)]
struct SketchFile {
    initial: BTreeMap<PointId, sketch_solver::Position>,
    constraints: Vec<Constraint>,
}

fn load(path: &PathBuf) -> Result<SketchFile, DemoError> {
    let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io { path: path.clone(), source })?;
    let sketch: SketchFile = serde_json::from_str(&text)?;
    Ok(sketch)
}

fn main() -> Result<(), DemoError> {
    tracing_subscriber::fmt::init();

    let path = match std::env::args().nth(1) {
        Some(p) => PathBuf::from(p),
        None => {
            warn!("usage: solve_demo <sketch.json>");
            std::process::exit(1);
        }
    };

    let sketch = load(&path)?;
    info!(points = sketch.initial.len(), constraints = sketch.constraints.len(), "loaded sketch");

    let mut initial = sketch_solver::solver::PointMap::new();
    for (id, position) in sketch.initial {
        initial.insert(id, position);
    }

    let SolveOutput { solution, log, arbitrary } = solve(initial, sketch.constraints);

    for step in &log {
        info!(
            variable = %step.variable,
            freedom = step.freedom,
            position = ?step.position,
            "committed"
        );
    }
    if !arbitrary.is_empty() {
        warn!(?arbitrary, "these points were never determined by the constraint system");
    }

    for (id, position) in &solution {
        println!("{id} = ({:.4}, {:.4})", position.x, position.y);
    }

    Ok(())
}
