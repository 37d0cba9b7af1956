use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GoError {
    OutOfBounds,
    Blocked,
    NothingToClean,
}

/// `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2(pub u16, pub u16);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Free,
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North = 0,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical expansion order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Go(Direction),
    Vacuum,
}

impl Action {
    pub fn cost(self) -> u32 {
        1
    }
}

/// Immutable grid: bounds plus the blocked cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct World {
    rows: u16,
    cols: u16,
    grid: Box<[Cell]>,
}

impl Index<Vec2> for World {
    type Output = Cell;
    fn index(&self, pos: Vec2) -> &Self::Output {
        let idx = pos.0 as usize * self.cols as usize + pos.1 as usize;
        &self.grid[idx]
    }
}

impl World {
    pub fn new(rows: u16, cols: u16, blocked: impl IntoIterator<Item = Vec2>) -> Self {
        let mut grid = vec![Cell::Free; rows as usize * cols as usize];
        for pos in blocked {
            debug_assert!(pos.0 < rows && pos.1 < cols, "Blocked cell out of bounds");
            grid[pos.0 as usize * cols as usize + pos.1 as usize] = Cell::Blocked;
        }
        Self {
            rows,
            cols,
            grid: grid.into(),
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Vec2) -> bool {
        pos.0 < self.rows && pos.1 < self.cols
    }

    pub fn is_blocked(&self, pos: Vec2) -> bool {
        self.in_bounds(pos) && self[pos] == Cell::Blocked
    }

    fn cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        let idx_iter = std::iter::successors(Some(Vec2(0, 0)), |&Vec2(r, c)| {
            Some(if c + 1 < self.cols {
                Vec2(r, c + 1)
            } else {
                Vec2(r + 1, 0)
            })
        });
        idx_iter.zip(self.grid.iter().copied())
    }

    /// The neighbor of `pos` in `dir`, if it is inside the grid. Blocking is not checked.
    pub fn sibling_pos(&self, pos: Vec2, dir: Direction) -> Option<Vec2> {
        const DIRECTIONS: [(i16, i16); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
        let r = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let c = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        let pos = Vec2(r, c);
        self.in_bounds(pos).then_some(pos)
    }
}

/// Cells still to be cleaned, kept sorted so equality ignores insertion order.
#[derive(Default, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DirtSet(Box<[Vec2]>);

impl FromIterator<Vec2> for DirtSet {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        let mut cells = iter.into_iter().collect::<Vec<_>>();
        cells.sort_unstable();
        cells.dedup();
        Self(cells.into())
    }
}

impl DirtSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, pos: Vec2) -> bool {
        self.0.binary_search(&pos).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.0.iter().copied()
    }

    /// A copy without `pos`. Order is preserved, so the result stays canonical.
    pub fn without(&self, pos: Vec2) -> Self {
        Self(self.iter().filter(|&p| p != pos).collect())
    }
}

/// Search node identity: agent position and remaining dirt.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    agent: Vec2,
    dirt: DirtSet,
}

impl State {
    pub fn new(agent: Vec2, dirt: DirtSet) -> Self {
        Self { agent, dirt }
    }

    pub fn agent(&self) -> Vec2 {
        self.agent
    }

    pub fn dirt(&self) -> &DirtSet {
        &self.dirt
    }

    pub fn is_success(&self) -> bool {
        self.dirt.is_empty()
    }

    /// Legal actions and their resulting states, vacuum first, then moves in
    /// [`Direction::ALL`] order.
    pub fn successors(&self, world: &World) -> ArrayVec<(Action, State), 5> {
        let mut ret = ArrayVec::new();
        if self.dirt.contains(self.agent) {
            let state = State {
                agent: self.agent,
                dirt: self.dirt.without(self.agent),
            };
            ret.push((Action::Vacuum, state));
        }
        for dir in Direction::ALL {
            let Some(pos) = world.sibling_pos(self.agent, dir) else { continue };
            if world[pos] == Cell::Blocked {
                continue;
            }
            let state = State {
                agent: pos,
                dirt: self.dirt.clone(),
            };
            ret.push((Action::Go(dir), state));
        }
        ret
    }

    /// Apply a single action in place. The state is untouched on error.
    pub fn go(&mut self, world: &World, action: Action) -> Result<(), GoError> {
        match action {
            Action::Vacuum => {
                if !self.dirt.contains(self.agent) {
                    return Err(GoError::NothingToClean);
                }
                self.dirt = self.dirt.without(self.agent);
            }
            Action::Go(dir) => {
                let pos = world
                    .sibling_pos(self.agent, dir)
                    .ok_or(GoError::OutOfBounds)?;
                if world[pos] == Cell::Blocked {
                    return Err(GoError::Blocked);
                }
                self.agent = pos;
            }
        }
        Ok(())
    }
}

/// A world together with where the agent starts and what is dirty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub world: World,
    pub start: Vec2,
    pub dirt: DirtSet,
}

impl Problem {
    pub fn initial_state(&self) -> State {
        State::new(self.start, self.dirt.clone())
    }
}
