use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::{Action, Problem, State};

type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Entries pushed to the frontier, the initial state included.
    pub generated: usize,
    /// Distinct states popped and processed.
    pub expanded: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved { plan: Vec<Action>, stats: Stats },
    NoSolution { stats: Stats },
}

impl Outcome {
    pub fn plan(&self) -> Option<&[Action]> {
        match self {
            Outcome::Solved { plan, .. } => Some(plan),
            Outcome::NoSolution { .. } => None,
        }
    }

    pub fn stats(&self) -> Stats {
        match self {
            Outcome::Solved { stats, .. } | Outcome::NoSolution { stats } => *stats,
        }
    }
}

/// A pending frontier entry. `node` is the generation index, unique per run.
#[derive(Debug, Clone)]
pub struct Entry {
    pub cost: u32,
    pub state: State,
    pub node: usize,
}

pub trait Frontier {
    fn push(&mut self, entry: Entry);
    fn pop(&mut self) -> Option<Entry>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier, giving depth-first search.
#[derive(Default, Debug)]
pub struct Stack(Vec<Entry>);

impl Frontier for Stack {
    fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Cheapest-first frontier, giving uniform-cost search.
///
/// Ties on cost are broken by generation order, earliest first.
#[derive(Default, Debug)]
pub struct CostQueue(BinaryHeap<ByCost>);

#[derive(Debug)]
struct ByCost(Entry);

impl ByCost {
    fn key(&self) -> (u32, usize) {
        (self.0.cost, self.0.node)
    }
}

impl PartialEq for ByCost {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ByCost {}

impl PartialOrd for ByCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByCost {
    // Reversed: `BinaryHeap` pops the greatest.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

impl Frontier for CostQueue {
    fn push(&mut self, entry: Entry) {
        self.0.push(ByCost(entry));
    }

    fn pop(&mut self) -> Option<Entry> {
        self.0.pop().map(|ByCost(entry)| entry)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    UniformCost,
}

impl Strategy {
    pub const ALL: [Self; 2] = [Self::DepthFirst, Self::UniformCost];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "depth-first",
            Strategy::UniformCost => "uniform-cost",
        }
    }

    pub fn solve(self, problem: &Problem, on_step: impl FnMut()) -> Outcome {
        match self {
            Strategy::DepthFirst => search(problem, Stack::default(), on_step),
            Strategy::UniformCost => search(problem, CostQueue::default(), on_step),
        }
    }
}

/// Graph search from the initial state until a state without dirt is popped.
///
/// Duplicates are pushed freely and dropped when popped, so `generated`
/// counts every push. `on_step` is called once per expansion.
pub fn search<F: Frontier>(
    problem: &Problem,
    mut frontier: F,
    mut on_step: impl FnMut(),
) -> Outcome {
    // Parent and incoming action of every generated node. The root has none.
    let mut history: Vec<Option<(usize, Action)>> = vec![None];
    let mut visited = IndexSet::default();
    frontier.push(Entry {
        cost: 0,
        state: problem.initial_state(),
        node: 0,
    });

    while let Some(Entry { cost, state, node }) = frontier.pop() {
        #[cfg(feature = "coz")]
        coz::scope!("Expand");

        let (idx, is_new) = visited.insert_full(state);
        if !is_new {
            continue;
        }
        on_step();

        #[cfg(feature = "coz")]
        coz::progress!("Expand");

        let stats = Stats {
            generated: history.len(),
            expanded: visited.len(),
        };
        let state = &visited[idx];
        if state.is_success() {
            debug!(
                "Solved at cost {cost}: {} generated, {} expanded, {} left in frontier",
                stats.generated,
                stats.expanded,
                frontier.len(),
            );
            let plan = reconstruct(&history, node);
            return Outcome::Solved { plan, stats };
        }

        for (action, next) in state.successors(&problem.world) {
            frontier.push(Entry {
                cost: cost + action.cost(),
                state: next,
                node: history.len(),
            });
            history.push(Some((node, action)));
        }
    }

    let stats = Stats {
        generated: history.len(),
        expanded: visited.len(),
    };
    debug!(
        "Exhausted: {} generated, {} expanded",
        stats.generated, stats.expanded,
    );
    Outcome::NoSolution { stats }
}

fn reconstruct(history: &[Option<(usize, Action)>], mut node: usize) -> Vec<Action> {
    let mut plan = Vec::new();
    while let Some((parent, action)) = history[node] {
        plan.push(action);
        node = parent;
    }
    plan.reverse();
    plan
}
