//! Search strategies over any [`Problem`].
//!
//! All strategies share one loop: create the root node, push it onto a frontier,
//! then repeatedly pop a node, goal-test it and push its children until a goal is
//! popped, the frontier runs dry, or a limit trips. They differ only in:
//! - the frontier's ordering policy (FIFO, LIFO, or lowest `g + h`), and
//! - duplicate handling: breadth- and depth-first run as tree searches and may expand
//!   a state many times, while A* is a graph search that keeps an explored set.
//!
//! Running out of frontier and being cancelled are ordinary outcomes, reported in
//! [`SearchOutcome`]. Only a problem that contradicts itself (an action it listed
//! as legal is then rejected by `result`) produces an error.
use crate::error::{Error, Result};
use crate::frontier::{Frontier, Ordering};
use crate::heuristics::HeuristicKind;
use crate::node::{Node, SearchTree};
use crate::problem::{Cost, Problem};
use crate::puzzle::{Board, Move, SlidingPuzzle};
use crate::timer::Timer;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Which search algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first tree search. Finds the shallowest goal.
    BreadthFirst,
    /// Depth-first tree search. Needs a depth limit on state spaces with cycles.
    DepthFirst,
    /// A* graph search. Optimal when the problem's heuristic is admissible.
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::BreadthFirst, Strategy::DepthFirst, Strategy::AStar];

    /// Frontier ordering policy the strategy runs with.
    pub fn ordering(self) -> Ordering {
        match self {
            Strategy::BreadthFirst => Ordering::Fifo,
            Strategy::DepthFirst => Ordering::Lifo,
            Strategy::AStar => Ordering::Priority,
        }
    }

    /// Whether the strategy keeps an explored set and never expands a state twice.
    pub fn is_graph_search(self) -> bool {
        matches!(self, Strategy::AStar)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BreadthFirst => "breadth-first",
            Strategy::DepthFirst => "depth-first",
            Strategy::AStar => "astar",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(Error::configuration(format!(
                "unknown strategy '{}' (expected one of: breadth-first, depth-first, astar)",
                s
            ))),
        }
    }
}

/// Bounds on a single search run. All limits are checked once per node extraction.
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    /// Nodes at this depth are goal-tested but not expanded. Tree search only.
    pub depth_limit: Option<usize>,
    /// Stop after expanding this many nodes.
    pub max_expansions: Option<usize>,
    /// Stop once this much wall-clock time has passed.
    pub time_limit: Option<Duration>,
    /// Stop as soon as this flag is set, e.g. from a signal handler on another thread.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_depth_limit(mut self, depth: usize) -> Self {
        self.depth_limit = Some(depth);
        self
    }

    pub fn with_max_expansions(mut self, expansions: usize) -> Self {
        self.max_expansions = Some(expansions);
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }

    fn check(&self, timer: &Timer, nodes_expanded: usize) -> Option<CancelReason> {
        if self
            .cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
        {
            return Some(CancelReason::Requested);
        }
        if self.max_expansions.is_some_and(|max| nodes_expanded >= max) {
            return Some(CancelReason::ExpansionLimit);
        }
        if timer.check_time_limit() {
            return Some(CancelReason::TimeLimit);
        }
        None
    }
}

/// Why a search stopped before reaching a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelReason {
    ExpansionLimit,
    TimeLimit,
    Requested,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::ExpansionLimit => f.write_str("expansion limit reached"),
            CancelReason::TimeLimit => f.write_str("time limit reached"),
            CancelReason::Requested => f.write_str("cancelled by request"),
        }
    }
}

/// Represents a solution found by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution<S, A> {
    /// Actions from the initial state to the goal, in order.
    pub actions: Vec<A>,
    /// Sum of the step costs along `actions`.
    pub path_cost: Cost,
    /// The goal state the actions lead to.
    pub final_state: S,
}

impl<S, A> Solution<S, A> {
    /// Number of actions in the solution.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state already satisfied the goal.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// How a search run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<S, A> {
    /// A goal node was popped from the frontier.
    Solved(Solution<S, A>),
    /// The frontier emptied without reaching a goal.
    Exhausted,
    /// A limit in [`SearchLimits`] stopped the search.
    Cancelled(CancelReason),
}

/// Counters collected during a search, for comparing strategies against each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose children were generated.
    pub nodes_expanded: usize,
    /// Nodes created, including the root.
    pub nodes_generated: usize,
    /// Distinct states among the generated nodes.
    pub states_visited: usize,
    /// Largest number of nodes waiting in the frontier at once.
    pub max_frontier_size: usize,
    /// Nodes left unexpanded because they sat at the depth limit.
    pub depth_cutoffs: usize,
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expanded: {}, generated: {}, distinct states: {}, max frontier: {}, cutoffs: {}, time: {:.3}s",
            self.nodes_expanded,
            self.nodes_generated,
            self.states_visited,
            self.max_frontier_size,
            self.depth_cutoffs,
            self.elapsed.as_secs_f64()
        )
    }
}

/// Outcome plus statistics of one search run.
#[derive(Clone, Debug)]
pub struct SearchReport<S, A> {
    pub outcome: SearchOutcome<S, A>,
    pub stats: SearchStats,
}

impl<S, A> SearchReport<S, A> {
    pub fn solution(&self) -> Option<&Solution<S, A>> {
        match &self.outcome {
            SearchOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solution().is_some()
    }
}

/// Runs `strategy` on `problem`.
///
/// # Errors
/// Returns [`Error::InvalidAction`] if the problem rejects an action it reported as
/// legal. Exhaustion and cancellation are returned as [`SearchOutcome`] values.
///
/// # Examples
/// ```
/// use puzzle_search::heuristics::ManhattanDistance;
/// use puzzle_search::puzzle::{Board, SlidingPuzzle};
/// use puzzle_search::solver::{search, SearchLimits, Strategy};
///
/// let start = Board::eight([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// let puzzle = SlidingPuzzle::new(start, Box::new(ManhattanDistance));
/// let report = search(&puzzle, Strategy::AStar, &SearchLimits::new()).unwrap();
/// let solution = report.solution().unwrap();
/// assert_eq!(solution.len(), 2);
/// assert!(solution.final_state.is_goal());
/// ```
pub fn search<P: Problem>(
    problem: &P,
    strategy: Strategy,
    limits: &SearchLimits,
) -> Result<SearchReport<P::State, P::Action>> {
    let timer = limits
        .time_limit
        .map(Timer::with_time_limit)
        .unwrap_or_default();
    let graph_search = strategy.is_graph_search();
    let depth_limit = if graph_search {
        None
    } else {
        limits.depth_limit
    };
    let uses_heuristic = strategy.ordering() == Ordering::Priority;
    let evaluate = |node: &Node<P::State, P::Action>| -> Cost {
        if uses_heuristic {
            node.path_cost()
                .saturating_add(problem.heuristic(node.state()))
        } else {
            node.path_cost()
        }
    };

    debug!(%strategy, ?depth_limit, "search started");

    let mut tree = SearchTree::new();
    let mut frontier = Frontier::new(strategy.ordering());
    let mut explored: HashSet<P::State> = HashSet::new();
    let mut visited: HashSet<P::State> = HashSet::new();
    let mut stats = SearchStats::default();

    let initial = problem.initial_state();
    visited.insert(initial.clone());
    let root = tree.insert_root(initial);
    frontier.push(root, evaluate(tree.get(root)));
    stats.max_frontier_size = frontier.len();

    let outcome = loop {
        if let Some(reason) = limits.check(&timer, stats.nodes_expanded) {
            debug!(%reason, expanded = stats.nodes_expanded, "search cancelled");
            break SearchOutcome::Cancelled(reason);
        }

        let Some(id) = frontier.pop() else {
            break SearchOutcome::Exhausted;
        };
        let node = tree.get(id);

        if graph_search {
            if explored.contains(node.state()) {
                trace!(node = id.index(), "discarding node for an explored state");
                continue;
            }
            explored.insert(node.state().clone());
        }

        if problem.goal_test(node.state()) {
            break SearchOutcome::Solved(Solution {
                actions: tree.solution_path(id),
                path_cost: node.path_cost(),
                final_state: node.state().clone(),
            });
        }

        if depth_limit.is_some_and(|limit| node.depth() >= limit) {
            stats.depth_cutoffs += 1;
            continue;
        }

        stats.nodes_expanded += 1;
        let actions = problem.actions(node.state());
        trace!(node = id.index(), depth = node.depth(), children = actions.len(), "expanding");

        for action in actions {
            let child = Node::child(problem, id, tree.get(id), action)?;
            if graph_search && explored.contains(child.state()) {
                continue;
            }
            if !visited.contains(child.state()) {
                visited.insert(child.state().clone());
            }
            let f = evaluate(&child);
            let child_id = tree.insert(child);
            frontier.push(child_id, f);
        }
        stats.max_frontier_size = stats.max_frontier_size.max(frontier.len());
    };

    stats.nodes_generated = tree.len();
    stats.states_visited = visited.len();
    stats.elapsed = timer.elapsed();

    match &outcome {
        SearchOutcome::Solved(solution) => info!(
            %strategy,
            moves = solution.len(),
            cost = solution.path_cost,
            expanded = stats.nodes_expanded,
            states = stats.states_visited,
            "solution found"
        ),
        SearchOutcome::Exhausted => info!(
            %strategy,
            expanded = stats.nodes_expanded,
            cutoffs = stats.depth_cutoffs,
            "frontier exhausted without reaching a goal"
        ),
        SearchOutcome::Cancelled(reason) => info!(
            %strategy,
            %reason,
            expanded = stats.nodes_expanded,
            "search stopped early"
        ),
    }

    Ok(SearchReport { outcome, stats })
}

/// Breadth-first tree search: FIFO frontier, no duplicate detection.
pub fn breadth_first_tree_search<P: Problem>(
    problem: &P,
    limits: &SearchLimits,
) -> Result<SearchReport<P::State, P::Action>> {
    search(problem, Strategy::BreadthFirst, limits)
}

/// Depth-first tree search: LIFO frontier, no duplicate detection.
///
/// On state spaces with cycles (like the sliding puzzle) this only terminates with a
/// depth limit or another bound in `limits`.
pub fn depth_first_tree_search<P: Problem>(
    problem: &P,
    limits: &SearchLimits,
) -> Result<SearchReport<P::State, P::Action>> {
    search(problem, Strategy::DepthFirst, limits)
}

/// A* graph search ordered by `path_cost + heuristic`, with an explored set.
pub fn astar_search<P: Problem>(
    problem: &P,
    limits: &SearchLimits,
) -> Result<SearchReport<P::State, P::Action>> {
    search(problem, Strategy::AStar, limits)
}

/// Checks that `board` is solvable, then searches it with the given strategy and heuristic.
///
/// # Errors
/// Returns [`Error::UnsolvableInstance`] without searching if the board has the wrong
/// parity.
pub fn solve_puzzle(
    board: Board,
    strategy: Strategy,
    heuristic: HeuristicKind,
    limits: &SearchLimits,
) -> Result<SearchReport<Board, Move>> {
    let puzzle = SlidingPuzzle::new(board, heuristic.build());
    puzzle.check_solvability()?;
    debug!(heuristic = puzzle.heuristic_name(), "instance is solvable");
    search(&puzzle, strategy, limits)
}
