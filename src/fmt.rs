use std::fmt::{self, Display};

use crate::solve::{Outcome, Strategy};
use crate::{Action, Cell, Direction, GoError, Problem};

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => "N".fmt(f),
            Direction::South => "S".fmt(f),
            Direction::East => "E".fmt(f),
            Direction::West => "W".fmt(f),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Go(dir) => dir.fmt(f),
            Action::Vacuum => "V".fmt(f),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Solved { plan, .. } => {
                for action in plan {
                    writeln!(f, "{action}")?;
                }
            }
            Outcome::NoSolution { .. } => writeln!(f, "No solution found.")?,
        }
        let stats = self.stats();
        writeln!(f, "{} nodes generated", stats.generated)?;
        writeln!(f, "{} nodes expanded", stats.expanded)
    }
}

/// Renders back into the world-file format.
impl Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.world.cols())?;
        write!(f, "{}", self.world.rows())?;
        for (pos, cell) in self.world.cells() {
            if pos.1 == 0 {
                "\n".fmt(f)?;
            }
            if pos == self.start {
                "@".fmt(f)?;
            } else if self.dirt.contains(pos) {
                "*".fmt(f)?;
            } else {
                cell.fmt(f)?;
            }
        }
        "\n".fmt(f)
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Free => ".".fmt(f),
            Cell::Blocked => "#".fmt(f),
        }
    }
}

impl Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::OutOfBounds => "Moved out of bounds".fmt(f),
            GoError::Blocked => "Moved into a blocked cell".fmt(f),
            GoError::NothingToClean => "Vacuumed a clean cell".fmt(f),
        }
    }
}

impl std::error::Error for GoError {}
