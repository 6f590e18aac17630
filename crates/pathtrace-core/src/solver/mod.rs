//! Stepwise solver contract and shared traversal vocabulary
//!
//! All four algorithms satisfy the same state machine: `initialize` seeds a
//! search, each `step` performs exactly one pop-and-expand unit of work, and
//! `path` reconstructs the route from the parent map once a terminal state
//! has been observed. The driver paces `step` calls externally; nothing here
//! blocks or runs ahead.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PathtraceError;
use crate::graph::{Graph, NodeId, NodeStatus};

pub use astar::AStarSolver;
pub use bfs::BfsSolver;
pub use dfs::DfsSolver;
pub use dijkstra::DijkstraSolver;

/// Where a solver is in its run
///
/// `FinishedFoundPath` and `FinishedNoPath` are terminal; only `initialize`
/// leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverState {
    #[default]
    NotStarted,
    Running,
    FinishedFoundPath,
    FinishedNoPath,
}

impl SolverState {
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            SolverState::FinishedFoundPath | SolverState::FinishedNoPath
        )
    }
}

impl fmt::Display for SolverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverState::NotStarted => write!(f, "not started"),
            SolverState::Running => write!(f, "running"),
            SolverState::FinishedFoundPath => write!(f, "found path"),
            SolverState::FinishedNoPath => write!(f, "no path"),
        }
    }
}

/// Per-node scores a solver exposes for the driver's overlay
///
/// Overlay data only; it has no effect on search correctness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DebugInfo {
    /// Best known distance from the start (Dijkstra)
    Distance(f32),
    /// Cost from start, heuristic to goal, and their sum (A*)
    Scores { g: f32, h: f32, f: f32 },
}

/// Stepwise search over a borrowed graph
///
/// The same graph must be passed to `initialize` and to every following
/// `step` until the next `initialize`; switching graphs mid-search (or
/// mutating the graph between steps) invalidates the solver's private
/// indices and is unsupported.
pub trait Solver {
    /// Discard all private state and seed a new search
    ///
    /// Marks the endpoints' statuses on the graph and enters the running
    /// state. Callable again at any time, including from a terminal state.
    fn initialize(&mut self, graph: &mut Graph, start: NodeId, end: NodeId);

    /// Perform one pop-and-expand unit of work
    ///
    /// Writes frontier/visited/current statuses to the graph as a side
    /// effect. In a terminal state this is a no-op returning that state.
    fn step(&mut self, graph: &mut Graph) -> SolverState;

    /// Reconstruct the start-to-end route from the parent map
    ///
    /// Degenerates to `[start]` when no parent chain reaches the end; only
    /// trust the result after observing `FinishedFoundPath`.
    fn path(&self) -> Vec<NodeId>;

    /// The state the last transition left the solver in
    fn state(&self) -> SolverState;

    /// Algorithm-specific scores for a node, if any
    fn debug_info(&self, id: NodeId) -> Option<DebugInfo> {
        let _ = id;
        None
    }

    /// Short lowercase algorithm name for display
    fn name(&self) -> &'static str;
}

/// The closed set of algorithm variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::AStar,
    ];

    /// Construct a fresh solver for this variant
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            Algorithm::Bfs => Box::new(BfsSolver::new()),
            Algorithm::Dfs => Box::new(DfsSolver::new()),
            Algorithm::Dijkstra => Box::new(DijkstraSolver::new()),
            Algorithm::AStar => Box::new(AStarSolver::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl FromStr for Algorithm {
    type Err = PathtraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(PathtraceError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Total stored weight along a node sequence
///
/// Follows each hop's first matching adjacency entry; hops with no matching
/// edge contribute nothing.
pub fn path_cost(graph: &Graph, path: &[NodeId]) -> f32 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbors(pair[0])
                .iter()
                .find(|edge| edge.target == pair[1])
                .map(|edge| edge.weight)
                .unwrap_or(0.0)
        })
        .sum()
}

/// Priority-queue entry ordered by cost, then ascending node id
///
/// Wrapped in `Reverse` by the weighted solvers to turn `BinaryHeap` into a
/// min-heap. Ties on cost break toward the smaller id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct QueueEntry {
    pub cost: f32,
    pub node: NodeId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Walk the parent map backward from `end`, then reverse into start-to-end
/// order
pub(crate) fn reconstruct_path(
    parents: &HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = end;

    while current != start {
        let Some(&parent) = parents.get(&current) else {
            break;
        };
        path.push(current);
        current = parent;
    }

    path.push(start);
    path.reverse();
    path
}

/// Mark the endpoints' statuses when a search is seeded
pub(crate) fn mark_endpoints(graph: &mut Graph, start: NodeId, end: NodeId) {
    if let Some(node) = graph.node_mut(start) {
        node.status = NodeStatus::Start;
    }
    if let Some(node) = graph.node_mut(end) {
        node.status = NodeStatus::End;
    }
}

/// Demote the previously expanded node to visited and mark `id` as the new
/// head
///
/// The start node keeps its start status for the whole run.
pub(crate) fn mark_current(
    graph: &mut Graph,
    last_expanded: &mut Option<NodeId>,
    id: NodeId,
    start: NodeId,
) {
    if let Some(previous) = last_expanded.take() {
        if previous != start {
            if let Some(node) = graph.node_mut(previous) {
                node.status = NodeStatus::Visited;
            }
        }
    }

    if id != start {
        if let Some(node) = graph.node_mut(id) {
            node.status = NodeStatus::Current;
        }
    }

    *last_expanded = Some(id);
}

/// Mark a newly discovered neighbor as frontier unless it is the goal
pub(crate) fn mark_frontier(graph: &mut Graph, id: NodeId, end: NodeId) {
    if id != end {
        if let Some(node) = graph.node_mut(id) {
            node.status = NodeStatus::Frontier;
        }
    }
}
