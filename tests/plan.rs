use std::fmt::Write;

use anyhow::{ensure, Context};
use common::*;
use vacuum_planner::solve::Strategy;
use vacuum_planner::Problem;

mod common;

fn main() {
    run_tests("plan", |content| {
        let world = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input);
        let problem = world.parse::<Problem>().context("Invalid world")?;

        let mut got = problem.to_string();
        for strategy in Strategy::ALL {
            let outcome = strategy.solve(&problem, || {});

            // Validate.
            let stats = outcome.stats();
            ensure!(
                1 <= stats.expanded && stats.expanded <= stats.generated,
                "{strategy}: bad counters {stats:?}",
            );
            if let Some(plan) = outcome.plan() {
                let state = replay(&problem, plan).with_context(|| strategy.to_string())?;
                ensure!(state.is_success(), "{strategy}: dirt left after the plan");
            }

            write!(got, "{SEPARATOR}{strategy}\n{outcome}").unwrap();
        }

        Ok(got)
    });
}
