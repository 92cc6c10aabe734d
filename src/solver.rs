//! Graph search over puzzle states.
//!
//! All four strategies share one loop and differ only in their frontier
//! discipline, when states are marked visited, and how steps are priced:
//!
//! | Strategy | Frontier | Marked visited | Step cost |
//! |---|---|---|---|
//! | `BreadthFirst` | FIFO queue | on insertion | 1 |
//! | `DepthFirst` | LIFO stack | on pop | not tracked (action count reported) |
//! | `UniformCost` | min-priority queue | on pop | 1 |
//! | `WeightedUniformCost` | min-priority queue | on pop | N 1.5, S 0.5, W 1, E 2 |
//!
//! Children are always generated in `Action::ALL` order (N, S, W, E), and moves that
//! leave the state unchanged are never enqueued. The priority queue pops the lowest
//! cost first; equal costs go to the lexicographically smaller state, then to the
//! entry inserted first.
use crate::config::SearchConfig;
use crate::engine::{apply_action, Action, State};
use log::{debug, trace, warn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::fmt;
use std::str::FromStr;

/// Cost of one unit-weight step, in half-units.
const UNIT_STEP: u32 = 2;

/// The search strategies supported by [`search`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier; finds a path with the fewest actions.
    BreadthFirst,
    /// LIFO frontier; returns the first path found.
    DepthFirst,
    /// Priority frontier with cost 1 per action; optimal.
    UniformCost,
    /// Priority frontier with per-direction weights; optimal under those weights.
    WeightedUniformCost,
}

impl Strategy {
    /// Every strategy.
    pub const ALL: [Strategy; 4] = [
        Strategy::BreadthFirst,
        Strategy::DepthFirst,
        Strategy::UniformCost,
        Strategy::WeightedUniformCost,
    ];

    /// Short name accepted by `FromStr` and printed by `Display`.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "bfs",
            Strategy::DepthFirst => "dfs",
            Strategy::UniformCost => "ucs",
            Strategy::WeightedUniformCost => "weighted-ucs",
        }
    }

    fn marks_on_insert(&self) -> bool {
        matches!(self, Strategy::BreadthFirst)
    }

    fn step_cost(&self, action: Action) -> u32 {
        match self {
            Strategy::WeightedUniformCost => action.weight_half_units(),
            _ => UNIT_STEP,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "ucs" | "uniform-cost" => Ok(Strategy::UniformCost),
            "weighted-ucs" | "wucs" | "weighted-uniform-cost" => {
                Ok(Strategy::WeightedUniformCost)
            }
            other => Err(format!(
                "Unknown strategy '{}'. Expected one of: bfs, dfs, ucs, weighted-ucs",
                other
            )),
        }
    }
}

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchResult {
    /// The goal was reached.
    Found {
        /// Actions taken from the start, in order.
        path: Vec<Action>,
        /// States along the path: the start first, the goal last, one more than `path`.
        states: Vec<State>,
        /// Action count for BFS and DFS, accumulated step cost for the uniform-cost strategies.
        cost: f64,
    },
    /// The frontier ran out (or the expansion limit was hit) before the goal was reached.
    NotFound,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchResult::Found { .. })
    }

    /// The action sequence, if a path was found.
    pub fn path(&self) -> Option<&[Action]> {
        match self {
            SearchResult::Found { path, .. } => Some(path),
            SearchResult::NotFound => None,
        }
    }

    /// The terminal state of the path, which equals the goal.
    pub fn final_state(&self) -> Option<&State> {
        match self {
            SearchResult::Found { states, .. } => states.last(),
            SearchResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<f64> {
        match self {
            SearchResult::Found { cost, .. } => Some(*cost),
            SearchResult::NotFound => None,
        }
    }
}

/// Counters collected during one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken from the frontier and expanded.
    pub expanded: usize,
    /// Nodes created, including the start node.
    pub generated: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
    /// Whether the search stopped because of `SearchConfig::expansion_limit`.
    pub limit_reached: bool,
}

/// A search result together with the statistics of the run that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Searches from `start` to `goal` with the given strategy.
///
/// # Examples
/// ```
/// use tile_solver::engine::{replay, State};
/// use tile_solver::solver::{search, Strategy};
///
/// let start = State::new(vec![3, 2, 1, 0]).unwrap();
/// let goal = State::goal(2).unwrap();
/// let result = search(&start, &goal, Strategy::BreadthFirst);
///
/// let path = result.path().unwrap();
/// assert_eq!(path.len(), 6);
/// assert_eq!(replay(&start, path), goal);
/// ```
pub fn search(start: &State, goal: &State, strategy: Strategy) -> SearchResult {
    let config = SearchConfig::new(goal.clone()).with_strategy(strategy);
    search_with_config(start, &config).result
}

/// Searches from `start` according to `config` and reports run statistics.
pub fn search_with_config(start: &State, config: &SearchConfig) -> SearchReport {
    if start.side() != config.goal.side() {
        warn!(
            "start is {}x{} but goal is {}x{}; no path can exist",
            start.side(),
            start.side(),
            config.goal.side(),
            config.goal.side()
        );
        return SearchReport {
            result: SearchResult::NotFound,
            stats: SearchStats::default(),
        };
    }

    let report = match config.strategy {
        Strategy::BreadthFirst => run(start, config, Fifo::default()),
        Strategy::DepthFirst => run(start, config, Lifo::default()),
        Strategy::UniformCost | Strategy::WeightedUniformCost => {
            run(start, config, CostQueue::default())
        }
    };

    debug!(
        "{} search {}: expanded {}, generated {}, max frontier {}{}",
        config.strategy,
        if report.result.is_found() { "found the goal" } else { "found no path" },
        report.stats.expanded,
        report.stats.generated,
        report.stats.max_frontier,
        if report.stats.limit_reached { " (expansion limit reached)" } else { "" }
    );
    report
}

/// A search node. Immutable once pushed into the arena.
struct Node {
    state: State,
    parent: Option<usize>,
    action: Option<Action>,
    /// Cumulative cost in half-units.
    cost: u32,
}

/// Ordering discipline over node ids.
trait Frontier {
    fn push(&mut self, node: usize, cost: u32, state: &State);
    fn pop(&mut self) -> Option<usize>;
    fn len(&self) -> usize;
}

#[derive(Default)]
struct Fifo(VecDeque<usize>);

impl Frontier for Fifo {
    fn push(&mut self, node: usize, _cost: u32, _state: &State) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Default)]
struct Lifo(Vec<usize>);

impl Frontier for Lifo {
    fn push(&mut self, node: usize, _cost: u32, _state: &State) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<usize> {
        self.0.pop()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(PartialEq, Eq)]
struct QueueEntry {
    cost: u32,
    state: State,
    seq: u64,
    node: usize,
}

impl Ord for QueueEntry {
    // Reversed so that `BinaryHeap` (a max-heap) pops the cheapest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct CostQueue {
    heap: BinaryHeap<QueueEntry>,
    next_seq: u64,
}

impl Frontier for CostQueue {
    fn push(&mut self, node: usize, cost: u32, state: &State) {
        self.heap.push(QueueEntry {
            cost,
            state: state.clone(),
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

fn run<F: Frontier>(start: &State, config: &SearchConfig, mut frontier: F) -> SearchReport {
    let strategy = config.strategy;
    let mark_on_insert = strategy.marks_on_insert();
    let mut stats = SearchStats::default();
    let mut visited: HashSet<State> = HashSet::new();
    let mut nodes = vec![Node {
        state: start.clone(),
        parent: None,
        action: None,
        cost: 0,
    }];

    if mark_on_insert {
        visited.insert(start.clone());
    }
    frontier.push(0, 0, start);
    stats.generated = 1;
    stats.max_frontier = 1;

    while let Some(id) = frontier.pop() {
        let state = nodes[id].state.clone();
        if !mark_on_insert && !visited.insert(state.clone()) {
            continue;
        }

        if state == config.goal {
            return SearchReport {
                result: reconstruct(&nodes, id, strategy),
                stats,
            };
        }

        if config.limit_reached(stats.expanded) {
            stats.limit_reached = true;
            break;
        }
        stats.expanded += 1;
        if stats.expanded % 100_000 == 0 {
            trace!(
                "{} search: {} expanded, {} visited, frontier {}",
                strategy,
                stats.expanded,
                visited.len(),
                frontier.len()
            );
        }

        let cost = nodes[id].cost;
        for action in Action::ALL {
            let next = apply_action(&state, action);
            if next == state {
                continue;
            }
            if mark_on_insert {
                if !visited.insert(next.clone()) {
                    continue;
                }
            } else if visited.contains(&next) {
                continue;
            }

            let next_cost = cost + strategy.step_cost(action);
            frontier.push(nodes.len(), next_cost, &next);
            nodes.push(Node {
                state: next,
                parent: Some(id),
                action: Some(action),
                cost: next_cost,
            });
            stats.generated += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    SearchReport {
        result: SearchResult::NotFound,
        stats,
    }
}

fn reconstruct(nodes: &[Node], goal_id: usize, strategy: Strategy) -> SearchResult {
    let mut path = Vec::new();
    let mut states = Vec::new();
    let mut cursor = Some(goal_id);
    while let Some(id) = cursor {
        let node = &nodes[id];
        states.push(node.state.clone());
        if let Some(action) = node.action {
            path.push(action);
        }
        cursor = node.parent;
    }
    path.reverse();
    states.reverse();

    let cost = match strategy {
        Strategy::BreadthFirst | Strategy::DepthFirst => path.len() as f64,
        Strategy::UniformCost | Strategy::WeightedUniformCost => {
            nodes[goal_id].cost as f64 / UNIT_STEP as f64
        }
    };
    SearchResult::Found { path, states, cost }
}
