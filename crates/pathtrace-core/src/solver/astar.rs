//! A* stepwise solver
//!
//! Dijkstra with a Euclidean-distance heuristic toward the goal node's
//! position. The heuristic is assumed admissible (no edge cheaper than the
//! straight-line distance between its endpoints); this is not verified, and
//! when it does not hold the result is still a path, just not guaranteed
//! minimal. Shares the lazy-deletion queue policy with Dijkstra.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Edge, Graph, NodeId};

use super::{
    mark_current, mark_endpoints, mark_frontier, reconstruct_path, DebugInfo, QueueEntry, Solver,
    SolverState,
};

#[derive(Debug, Default)]
pub struct AStarSolver {
    queue: BinaryHeap<Reverse<QueueEntry>>,
    g_score: HashMap<NodeId, f32>,
    f_score: HashMap<NodeId, f32>,
    parents: HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
    last_expanded: Option<NodeId>,
    state: SolverState,
}

impl AStarSolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straight-line distance from a node to the goal; 0 when either node is
    /// missing
    fn heuristic(graph: &Graph, id: NodeId, end: NodeId) -> f32 {
        match (graph.node(id), graph.node(end)) {
            (Some(a), Some(b)) => a.position.distance(b.position),
            _ => 0.0,
        }
    }
}

impl Solver for AStarSolver {
    fn initialize(&mut self, graph: &mut Graph, start: NodeId, end: NodeId) {
        self.queue.clear();
        self.g_score.clear();
        self.f_score.clear();
        self.parents.clear();
        self.start = start;
        self.end = end;
        self.last_expanded = None;
        self.state = SolverState::Running;

        let f = Self::heuristic(graph, start, end);
        self.g_score.insert(start, 0.0);
        self.f_score.insert(start, f);
        self.queue.push(Reverse(QueueEntry {
            cost: f,
            node: start,
        }));
        mark_endpoints(graph, start, end);

        tracing::debug!(start, end, "astar initialized");
    }

    fn step(&mut self, graph: &mut Graph) -> SolverState {
        if self.state.is_finished() {
            return self.state;
        }

        let Some(Reverse(entry)) = self.queue.pop() else {
            self.state = SolverState::FinishedNoPath;
            return self.state;
        };

        // Stale duplicate: a cheaper f-score has been recorded since this
        // entry was pushed
        let best_f = self
            .f_score
            .get(&entry.node)
            .copied()
            .unwrap_or(f32::INFINITY);
        if entry.cost > best_f {
            return SolverState::Running;
        }

        if entry.node == self.end {
            self.state = SolverState::FinishedFoundPath;
            return self.state;
        }

        mark_current(graph, &mut self.last_expanded, entry.node, self.start);

        let current_g = self.g_score.get(&entry.node).copied().unwrap_or(0.0);
        let edges: Vec<Edge> = graph.neighbors(entry.node).to_vec();

        for edge in edges {
            let tentative = current_g + edge.weight;
            if self
                .g_score
                .get(&edge.target)
                .is_none_or(|&g| tentative < g)
            {
                let f = tentative + Self::heuristic(graph, edge.target, self.end);
                self.g_score.insert(edge.target, tentative);
                self.f_score.insert(edge.target, f);
                self.parents.insert(edge.target, entry.node);
                self.queue.push(Reverse(QueueEntry {
                    cost: f,
                    node: edge.target,
                }));
                mark_frontier(graph, edge.target, self.end);
            }
        }

        SolverState::Running
    }

    fn path(&self) -> Vec<NodeId> {
        reconstruct_path(&self.parents, self.start, self.end)
    }

    fn state(&self) -> SolverState {
        self.state
    }

    fn debug_info(&self, id: NodeId) -> Option<DebugInfo> {
        let g = self.g_score.get(&id).copied()?;
        let f = self.f_score.get(&id).copied()?;
        Some(DebugInfo::Scores { g, h: f - g, f })
    }

    fn name(&self) -> &'static str {
        "astar"
    }
}
