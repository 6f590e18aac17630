//! Breadth-first stepwise solver
//!
//! Expands in FIFO order, so the returned path has the minimum possible edge
//! count. Ties follow adjacency insertion order.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::{Graph, NodeId};

use super::{mark_current, mark_endpoints, mark_frontier, reconstruct_path, Solver, SolverState};

#[derive(Debug, Default)]
pub struct BfsSolver {
    frontier: VecDeque<NodeId>,
    visited: HashSet<NodeId>,
    parents: HashMap<NodeId, NodeId>,
    start: NodeId,
    end: NodeId,
    last_expanded: Option<NodeId>,
    state: SolverState,
}

impl BfsSolver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for BfsSolver {
    fn initialize(&mut self, graph: &mut Graph, start: NodeId, end: NodeId) {
        self.frontier.clear();
        self.visited.clear();
        self.parents.clear();
        self.start = start;
        self.end = end;
        self.last_expanded = None;
        self.state = SolverState::Running;

        self.frontier.push_back(start);
        self.visited.insert(start);
        mark_endpoints(graph, start, end);

        tracing::debug!(start, end, "bfs initialized");
    }

    fn step(&mut self, graph: &mut Graph) -> SolverState {
        if self.state.is_finished() {
            return self.state;
        }

        let Some(current) = self.frontier.pop_front() else {
            self.state = SolverState::FinishedNoPath;
            return self.state;
        };

        if current == self.end {
            self.state = SolverState::FinishedFoundPath;
            return self.state;
        }

        mark_current(graph, &mut self.last_expanded, current, self.start);

        // Copy the adjacency row out so statuses can be written while
        // iterating
        let targets: Vec<NodeId> = graph.neighbors(current).iter().map(|e| e.target).collect();

        for target in targets {
            if self.visited.insert(target) {
                self.parents.insert(target, current);
                self.frontier.push_back(target);
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
        "bfs"
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::run_to_completion;
    use super::*;
    use crate::graph::{NodeStatus, Vec2};

    /// Diamond with a long detour: BFS must take the fewest hops
    #[test]
    fn test_bfs_finds_minimum_hop_path() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 10.0));
        let c = graph.add_node(Vec2::new(10.0, -10.0));
        let d = graph.add_node(Vec2::new(20.0, 0.0));
        graph.link(a, b);
        graph.link(b, d);
        graph.link(a, c);
        graph.link(c, b);

        let mut solver = BfsSolver::new();
        let state = run_to_completion(&mut solver, &mut graph, a, d);

        assert_eq!(state, SolverState::FinishedFoundPath);
        assert_eq!(solver.path(), vec![a, b, d]);
    }

    /// BFS ignores weights entirely; the heavy direct edge still wins on hops
    #[test]
    fn test_bfs_ignores_weights() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 0.0));
        let c = graph.add_node(Vec2::new(20.0, 0.0));
        graph.add_edge(a, b, 1.0, true);
        graph.add_edge(b, c, 1.0, true);
        graph.add_edge(a, c, 100.0, true);

        let mut solver = BfsSolver::new();
        run_to_completion(&mut solver, &mut graph, a, c);

        assert_eq!(solver.path(), vec![a, c]);
    }

    /// Neighbors are expanded in adjacency insertion order
    #[test]
    fn test_bfs_tie_break_follows_insertion_order() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 10.0));
        let c = graph.add_node(Vec2::new(10.0, -10.0));
        let d = graph.add_node(Vec2::new(20.0, 0.0));
        // Two equal-hop routes; c was linked to a first, so it is the parent
        graph.link(a, c);
        graph.link(a, b);
        graph.link(c, d);
        graph.link(b, d);

        let mut solver = BfsSolver::new();
        run_to_completion(&mut solver, &mut graph, a, d);

        assert_eq!(solver.path(), vec![a, c, d]);
    }

    #[test]
    fn test_bfs_marks_statuses() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 0.0));
        let c = graph.add_node(Vec2::new(20.0, 0.0));
        graph.link(a, b);
        graph.link(b, c);

        let mut solver = BfsSolver::new();
        solver.initialize(&mut graph, a, c);
        assert_eq!(graph.node(a).unwrap().status, NodeStatus::Start);
        assert_eq!(graph.node(c).unwrap().status, NodeStatus::End);

        // First step expands the start; b joins the frontier
        assert_eq!(solver.step(&mut graph), SolverState::Running);
        assert_eq!(graph.node(a).unwrap().status, NodeStatus::Start);
        assert_eq!(graph.node(b).unwrap().status, NodeStatus::Frontier);

        // Second step expands b, which becomes the current head; the goal
        // keeps its end status
        assert_eq!(solver.step(&mut graph), SolverState::Running);
        assert_eq!(graph.node(b).unwrap().status, NodeStatus::Current);
        assert_eq!(graph.node(c).unwrap().status, NodeStatus::End);

        assert_eq!(solver.step(&mut graph), SolverState::FinishedFoundPath);
    }

    #[test]
    fn test_bfs_no_debug_info() {
        let mut graph = Graph::new();
        let a = graph.add_node(Vec2::new(0.0, 0.0));
        let b = graph.add_node(Vec2::new(10.0, 0.0));
        graph.link(a, b);

        let mut solver = BfsSolver::new();
        run_to_completion(&mut solver, &mut graph, a, b);

        assert!(solver.debug_info(a).is_none());
        assert!(solver.debug_info(b).is_none());
    }
}
