use std::time::Duration;

use anyhow::{ensure, Context, Result};
use console::style;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::info;
use vacuum_planner::solve::{Outcome, Strategy};
use vacuum_planner::Problem;

const USAGE: &str = "Usage: vacuum-planner <uniform-cost|depth-first|compare> <world-file>";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    ensure!(args.len() == 2, USAGE);
    let (mode, path) = (&args[0], &args[1]);

    let world_data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read the world {path:?}"))?;
    let problem = world_data
        .parse::<Problem>()
        .context("Failed to parse the world")?;
    info!(
        "Loaded {}x{} world with {} dirty cells",
        problem.world.cols(),
        problem.world.rows(),
        problem.dirt.len(),
    );

    if mode == "compare" {
        return compare(&problem);
    }

    let strategy = mode.parse::<Strategy>()?;
    let pb = spinner(strategy)?;
    let outcome = strategy.solve(&problem, || pb.inc(1));
    pb.finish_and_clear();
    print!("{outcome}");
    Ok(())
}

fn spinner(strategy: Strategy) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner()
        .with_style(ProgressStyle::with_template(
            "{spinner} {prefix}: {human_pos} expanded [{elapsed}] {per_sec}",
        )?)
        .with_prefix(strategy.name());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Run every strategy on its own frontier and visited set, in parallel.
fn compare(problem: &Problem) -> Result<()> {
    let mp = MultiProgress::new();
    let run = |strategy: Strategy| -> Result<Outcome> {
        let pb = mp.add(spinner(strategy)?);
        let outcome = strategy.solve(problem, || pb.inc(1));
        pb.finish_and_clear();
        Ok(outcome)
    };
    let (dfs, ucs) = rayon::join(
        || run(Strategy::DepthFirst),
        || run(Strategy::UniformCost),
    );

    for (strategy, outcome) in [(Strategy::DepthFirst, dfs?), (Strategy::UniformCost, ucs?)] {
        let stats = outcome.stats();
        let result = match outcome.plan() {
            Some(plan) => style(format!("plan of {} steps", plan.len())).green(),
            None => style("no solution".to_owned()).red(),
        };
        println!(
            "{:>12}: {result}, {} nodes generated, {} nodes expanded",
            style(strategy).bold(),
            stats.generated,
            stats.expanded,
        );
    }
    Ok(())
}
