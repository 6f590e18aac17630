//! Depth-first stepwise solver
//!
//! Same shape as BFS with a LIFO stack, so the last-inserted neighbor is
//! expanded first. No shortest-path guarantee; the first route reached wins.

use std::collections::{HashMap, HashSet};

use crate::graph::{Graph, NodeId};

use super::{mark_current, mark_endpoints, mark_frontier, reconstruct_path, Solver, SolverState};

#[derive(Debug, Default)]
pub struct DfsSolver {
    stack: Vec<NodeId>,
    visited: HashSet<NodeId>,
    parents: HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
    last_expanded: Option<NodeId>,
    state: SolverState,
}

impl DfsSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for DfsSolver {
    fn initialize(&mut self, graph: &mut Graph, start: NodeId, end: NodeId) {
        self.stack.clear();
        self.visited.clear();
        self.parents.clear();
        self.start = start;
        self.end = end;
        self.last_expanded = None;
        self.state = SolverState::Running;

        self.stack.push(start);
        self.visited.insert(start);
        mark_endpoints(graph, start, end);

        tracing::debug!(start, end, "dfs initialized");
    }

    fn step(&mut self, graph: &mut Graph) -> SolverState {
        if self.state.is_finished() {
            return self.state;
        }

        let Some(current) = self.stack.pop() else {
            self.state = SolverState::FinishedNoPath;
            return self.state;
        };

        if current == self.end {
            self.state = SolverState::FinishedFoundPath;
            return self.state;
        }

        mark_current(graph, &mut self.last_expanded, current, self.start);

        let targets: Vec<NodeId> = graph.neighbors(current).iter().map(|e| e.target).collect();

        for target in targets {
            if self.visited.insert(target) {
                self.parents.insert(target, current);
                self.stack.push(target);
                mark_frontier(graph, target, self.end);
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

    fn name(&self) -> &'static str {
        "dfs"
    }
}
