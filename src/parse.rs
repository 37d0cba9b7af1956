use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::solve::Strategy;
use crate::{DirtSet, Problem, Vec2, World};

impl FromStr for Problem {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let mut parse_dim = |what: &str| -> Result<u16> {
            let line = lines.next().with_context(|| format!("Missing {what}"))?;
            let n = line
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid {what}: {line:?}"))?;
            ensure!(n > 0, "Zero {what}");
            Ok(n)
        };
        let cols = parse_dim("column count")?;
        let rows = parse_dim("row count")?;

        let mut start = None;
        let mut dirt = Vec::new();
        let mut blocked = Vec::new();
        for r in 0..rows {
            let line = lines.next().with_context(|| format!("Missing row {r}"))?;
            let width = line.chars().count();
            ensure!(
                width == cols as usize,
                "Width mismatch of row {r}, expecting width {cols}, got {width}",
            );
            for (ch, c) in line.chars().zip(0..) {
                let pos = Vec2(r, c);
                match ch {
                    '*' => dirt.push(pos),
                    '#' => blocked.push(pos),
                    '@' => {
                        ensure!(start.is_none(), "Multiple starts");
                        start = Some(pos);
                    }
                    _ => {}
                }
            }
        }

        if let Some(line) = lines.find(|line| !line.trim().is_empty()) {
            bail!("Trailing content after the grid: {line:?}");
        }

        Ok(Problem {
            world: World::new(rows, cols, blocked),
            start: start.context("Missing start")?,
            dirt: dirt.into_iter().collect::<DirtSet>(),
        })
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .with_context(|| format!("Unsupported strategy: {s:?}"))
    }
}
