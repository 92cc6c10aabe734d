//! Property-based tests for the search engine and the state model.
//!
//! Small grids are used throughout so the reference computations (exhaustive
//! BFS, brute-force path enumeration) stay cheap.

use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};
use tile_solver::engine::{apply_action, replay, Action, State};
use tile_solver::enumerate::enumerate_states;
use tile_solver::predicate::has_adjacent_odd_conflict;
use tile_solver::solver::{search, SearchResult, Strategy as SearchStrategy};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Generate a random valid state of an `n x n` grid.
fn arb_state(side: usize) -> impl Strategy<Value = State> {
    Just((0..(side * side) as u8).collect::<Vec<u8>>())
        .prop_shuffle()
        .prop_map(|tiles| State::new(tiles).unwrap())
}

/// Generate a state of side 1 to 4.
fn arb_any_state() -> impl Strategy<Value = State> {
    (1usize..=4).prop_flat_map(arb_state)
}

/// Generate a random walk of actions from a state, so the end is always reachable.
fn arb_reachable_pair(side: usize, max_len: usize) -> impl Strategy<Value = (State, State)> {
    (arb_state(side), prop::collection::vec(0usize..4, 0..max_len)).prop_map(|(start, codes)| {
        let actions: Vec<Action> = codes.into_iter().map(|c| Action::ALL[c]).collect();
        let goal = replay(&start, &actions);
        (start, goal)
    })
}

fn rotate_180(state: &State) -> State {
    let mut tiles = state.tiles().to_vec();
    tiles.reverse();
    State::new(tiles).unwrap()
}

// =============================================================================
// Reference implementations
// =============================================================================

/// Shortest action counts from `start` to every reachable state, by plain BFS.
fn reference_distances(start: &State) -> HashMap<State, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.clone(), 0);
    queue.push_back(start.clone());
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for action in Action::ALL {
            let next = apply_action(&state, action);
            if !dist.contains_key(&next) {
                dist.insert(next.clone(), d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Cheapest weighted cost over every path of at most `depth` real moves, in half-units.
fn brute_force_weighted_cost(start: &State, goal: &State, depth: usize) -> Option<u32> {
    fn walk(state: &State, goal: &State, depth: usize, cost: u32, best: &mut Option<u32>) {
        if state == goal {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        if depth == 0 {
            return;
        }
        for action in Action::ALL {
            let next = apply_action(state, action);
            if next != *state {
                let step = (action.weight() * 2.0) as u32;
                walk(&next, goal, depth - 1, cost + step, best);
            }
        }
    }
    let mut best = None;
    walk(start, goal, depth, 0, &mut best);
    best
}

fn path_len(result: &SearchResult) -> Option<usize> {
    result.path().map(|p| p.len())
}

// =============================================================================
// State model and transition
// =============================================================================

proptest! {
    /// The odd-adjacency check only depends on the neighbour relation, which a
    /// half-turn of the grid preserves.
    #[test]
    fn prop_odd_check_rotation_invariant(state in arb_any_state()) {
        prop_assert_eq!(
            has_adjacent_odd_conflict(&state),
            has_adjacent_odd_conflict(&rotate_180(&state))
        );
    }

    /// Off-grid moves return the input; legal moves are undone by the opposite move.
    #[test]
    fn prop_transition_noop_or_involution(state in arb_any_state()) {
        let n = state.side();
        let (row, col) = (state.blank_index() / n, state.blank_index() % n);
        for action in Action::ALL {
            let off_grid = match action {
                Action::North => row == 0,
                Action::South => row + 1 == n,
                Action::West => col == 0,
                Action::East => col + 1 == n,
            };
            let next = apply_action(&state, action);
            if off_grid {
                prop_assert_eq!(&next, &state);
            } else {
                prop_assert_ne!(&next, &state);
                prop_assert_eq!(apply_action(&next, action.opposite()), state.clone());
            }
        }
    }

    /// Transitions preserve the permutation invariant.
    #[test]
    fn prop_transition_keeps_permutation(state in arb_any_state(), code in 0usize..4) {
        let next = apply_action(&state, Action::ALL[code]);
        prop_assert!(State::new(next.tiles().to_vec()).is_ok());
        prop_assert_eq!(next.tiles()[next.blank_index()], 0);
    }
}

// =============================================================================
// Search optimality
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// BFS matches an independent exhaustive BFS on every 2x2 instance.
    #[test]
    fn prop_bfs_matches_reference(start in arb_state(2), goal in arb_state(2)) {
        let reference = reference_distances(&start);
        let result = search(&start, &goal, SearchStrategy::BreadthFirst);
        match reference.get(&goal) {
            Some(&d) => {
                prop_assert_eq!(path_len(&result), Some(d));
                prop_assert_eq!(replay(&start, result.path().unwrap()), goal);
            }
            None => prop_assert_eq!(result, SearchResult::NotFound),
        }
    }

    /// Uniform-cost search with unit weights finds paths as short as BFS.
    #[test]
    fn prop_ucs_length_matches_bfs((start, goal) in arb_reachable_pair(3, 14)) {
        let bfs = search(&start, &goal, SearchStrategy::BreadthFirst);
        let ucs = search(&start, &goal, SearchStrategy::UniformCost);
        prop_assert!(bfs.is_found());
        prop_assert_eq!(path_len(&ucs), path_len(&bfs));
        prop_assert_eq!(ucs.cost(), Some(path_len(&bfs).unwrap() as f64));
        prop_assert_eq!(ucs.final_state(), Some(&goal));
    }

    /// Weighted uniform-cost search is never beaten by any enumerated path.
    #[test]
    fn prop_weighted_ucs_is_optimal(start in arb_state(2), goal in arb_state(2)) {
        let result = search(&start, &goal, SearchStrategy::WeightedUniformCost);
        // The 2x2 component has 12 states, so an optimal simple path has at most 11 moves.
        let brute = brute_force_weighted_cost(&start, &goal, 12);
        match (result.cost(), brute) {
            (Some(cost), Some(best)) => {
                prop_assert_eq!(cost, best as f64 / 2.0);
                let replayed: f64 = result.path().unwrap().iter().map(Action::weight).sum();
                prop_assert_eq!(replayed, cost);
            }
            (None, None) => {}
            (found, brute) => prop_assert!(false, "search {:?} vs brute force {:?}", found, brute),
        }
    }

    /// Every strategy that finds a path returns one that replays to the goal.
    #[test]
    fn prop_all_strategies_replay((start, goal) in arb_reachable_pair(2, 10)) {
        for strategy in SearchStrategy::ALL {
            let result = search(&start, &goal, strategy);
            prop_assert!(result.is_found(), "{} failed on a reachable goal", strategy);
            prop_assert_eq!(replay(&start, result.path().unwrap()), goal.clone());
        }
    }
}

// =============================================================================
// Concrete scenarios
// =============================================================================

#[test]
fn two_by_two_reachable_component_has_twelve_states() {
    let start = State::new(vec![1, 2, 0, 3]).unwrap();
    let reachable = reference_distances(&start);
    assert_eq!(reachable.len(), 12);
    // Half the 24 permutations, one of the two 2x2 components.
    let all: HashSet<State> = enumerate_states(2).unwrap().collect();
    assert_eq!(all.len(), 24);
}

#[test]
fn two_by_two_scenario_terminates() {
    let start = State::new(vec![1, 2, 0, 3]).unwrap();
    let goal = State::new(vec![0, 1, 2, 3]).unwrap();

    // [0, 1, 2, 3] lies in the other component, so BFS must stop with NotFound.
    assert_eq!(search(&start, &goal, SearchStrategy::BreadthFirst), SearchResult::NotFound);

    // A goal in the same component: BFS finds a non-empty path that replays exactly.
    let reachable_goal = State::new(vec![0, 1, 3, 2]).unwrap();
    let result = search(&start, &reachable_goal, SearchStrategy::BreadthFirst);
    let path = result.path().expect("goal is reachable");
    assert!(!path.is_empty());
    assert_eq!(replay(&start, path), reachable_goal);
}

#[test]
fn eight_puzzle_strategies_agree_on_goal() {
    let start = State::new(vec![4, 0, 2, 1, 3, 7, 6, 8, 5]).unwrap();
    let goal = State::goal(3).unwrap();
    let bfs = search(&start, &goal, SearchStrategy::BreadthFirst);
    let ucs = search(&start, &goal, SearchStrategy::UniformCost);
    let weighted = search(&start, &goal, SearchStrategy::WeightedUniformCost);

    assert_eq!(path_len(&bfs), Some(9));
    assert_eq!(path_len(&ucs), Some(9));
    assert_eq!(weighted.cost(), Some(11.0));
    for result in [&bfs, &ucs, &weighted] {
        assert_eq!(result.final_state(), Some(&goal));
    }
}
