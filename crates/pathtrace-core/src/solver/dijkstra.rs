//! Dijkstra stepwise solver
//!
//! Minimal summed weight for non-negative weights. The queue has no
//! decrease-key; an improved node is pushed again and the obsolete entry is
//! discarded when it surfaces (lazy deletion). A discarded pop consumes one
//! step and returns `Running` without expanding anything.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Edge, Graph, NodeId};

use super::{
    mark_current, mark_endpoints, mark_frontier, reconstruct_path, DebugInfo, QueueEntry, Solver,
    SolverState,
};

#[derive(Debug, Default)]
pub struct DijkstraSolver {
    queue: BinaryHeap<Reverse<QueueEntry>>,
    dist: HashMap<NodeId, f32>,
    parents: HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
    last_expanded: Option<NodeId>,
    state: SolverState,
}

impl DijkstraSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for DijkstraSolver {
    fn initialize(&mut self, graph: &mut Graph, start: NodeId, end: NodeId) {
        self.queue.clear();
        self.dist.clear();
        self.parents.clear();
        self.start = start;
        self.end = end;
        self.last_expanded = None;
        self.state = SolverState::Running;

        self.dist.insert(start, 0.0);
        self.queue.push(Reverse(QueueEntry {
            cost: 0.0,
            node: start,
        }));
        mark_endpoints(graph, start, end);

        tracing::debug!(start, end, "dijkstra initialized");
    }

    fn step(&mut self, graph: &mut Graph) -> SolverState {
        if self.state.is_finished() {
            return self.state;
        }

        let Some(Reverse(entry)) = self.queue.pop() else {
            self.state = SolverState::FinishedNoPath;
            return self.state;
        };

        // Stale duplicate left behind by a later improvement; discard it
        let best = self.dist.get(&entry.node).copied().unwrap_or(f32::INFINITY);
        if entry.cost > best {
            return SolverState::Running;
        }

        if entry.node == self.end {
            self.state = SolverState::FinishedFoundPath;
            return self.state;
        }

        mark_current(graph, &mut self.last_expanded, entry.node, self.start);

        let edges: Vec<Edge> = graph.neighbors(entry.node).to_vec();

        for edge in edges {
            let tentative = entry.cost + edge.weight;
            if self.dist.get(&edge.target).is_none_or(|&d| tentative < d) {
                self.dist.insert(edge.target, tentative);
                self.parents.insert(edge.target, entry.node);
                self.queue.push(Reverse(QueueEntry {
                    cost: tentative,
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
        self.dist.get(&id).map(|&d| DebugInfo::Distance(d))
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}
