#![allow(unused)]

use std::path::Path;

use anyhow::{Context, Result};
use console::style;
use vacuum_planner::{Action, Problem, State};

pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENSION: &str = "world";

/// Replay `plan` from the start, failing on any illegal step.
pub fn replay(problem: &Problem, plan: &[Action]) -> Result<State> {
    let mut state = problem.initial_state();
    for (&action, i) in plan.iter().zip(1..) {
        state
            .go(&problem.world, action)
            .with_context(|| format!("Failed to perform step {i} {action}"))?;
    }
    Ok(state)
}

pub fn run_tests(subdir: &str, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENSION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if got == content => eprintln!("{}", style("OK").green()),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("{}", style("Updated").yellow());
            }
            Ok(got) => {
                eprintln!("{}\n{got}", style("MISMATCH").red());
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("{}\n{:?}", style("FAILED").red(), err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
