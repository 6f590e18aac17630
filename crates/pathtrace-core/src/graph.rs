//! Graph model for the stepwise search engine
//!
//! Owns nodes and directed weighted adjacency. Solvers only ever touch this
//! type through a borrow passed into each call; the graph itself knows
//! nothing about them.

use std::collections::HashMap;

use serde::Serialize;

/// Radius of the circle used for pointer hit-testing, in world units
pub const NODE_RADIUS: f32 = 20.0;

/// Identifier assigned to a node by [`Graph::add_node`]
pub type NodeId = u32;

/// 2D position in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Visualization status written by solvers as they run
///
/// Purely observable metadata for the driver's renderer; never consulted for
/// search correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    #[default]
    Default,
    Start,
    End,
    Frontier,
    Visited,
    Current,
    OnPath,
}

/// A directed, weighted adjacency entry stored against its source node
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    pub weight: f32,
}

/// A node with identity, position, display label, and visualization status
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub position: Vec2,
    pub label: String,
    pub status: NodeStatus,
}

/// Mutable weighted graph with insertion-ordered adjacency
///
/// Adjacency rows keep edges in the order they were added; BFS and DFS
/// results are deterministic exactly because of that order.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    adjacency: HashMap<NodeId, Vec<Edge>>,
    next_id: NodeId,
    hit_radius: f32,
}

impl Default for Graph {
    fn default() -> Self {
        Graph::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Graph::with_hit_radius(NODE_RADIUS)
    }

    /// A graph whose hit-testing uses the given radius instead of
    /// [`NODE_RADIUS`]
    pub fn with_hit_radius(hit_radius: f32) -> Self {
        Graph {
            nodes: HashMap::new(),
            adjacency: HashMap::new(),
            next_id: 0,
            hit_radius,
        }
    }

    /// Add a node at the given position and return its id
    ///
    /// Ids come from a monotonically increasing counter; the label is the id
    /// rendered as text. Always succeeds.
    pub fn add_node(&mut self, position: Vec2) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            Node {
                id,
                position,
                label: id.to_string(),
                status: NodeStatus::Default,
            },
        );
        id
    }

    /// Add a directed edge, or a pair of opposed edges when `bidirectional`
    ///
    /// A silent no-op if either endpoint id is unknown. Self-loops and
    /// parallel edges are accepted as-is.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f32, bidirectional: bool) {
        if !self.nodes.contains_key(&from) || !self.nodes.contains_key(&to) {
            return;
        }

        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge { target: to, weight });

        if bidirectional {
            self.adjacency
                .entry(to)
                .or_default()
                .push(Edge { target: from, weight });
        }
    }

    /// Bidirectional edge with the default weight of 1.0
    pub fn link(&mut self, from: NodeId, to: NodeId) {
        self.add_edge(from, to, 1.0, true);
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    /// Outgoing edges of a node, in insertion order
    ///
    /// Empty slice (not an error) for nodes without outgoing edges.
    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All node ids; order is not significant to callers
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed adjacency entries (a bidirectional edge
    /// counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Set every node's status back to default; topology is untouched
    pub fn reset_visuals(&mut self) {
        for node in self.nodes.values_mut() {
            node.status = NodeStatus::Default;
        }
    }

    /// Drop all nodes and edges and reset the id counter to 0
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
        self.next_id = 0;
    }

    /// Any node whose hit-radius circle contains the point
    ///
    /// First match in iteration order; when circles overlap, which node wins
    /// is not guaranteed to be stable.
    pub fn node_at_position(&self, point: Vec2) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|node| node.position.distance(point) <= self.hit_radius)
            .map(|node| node.id)
    }

    /// Mark every node along a returned path with the on-path status
    pub fn mark_path(&mut self, path: &[NodeId]) {
        for id in path {
            if let Some(node) = self.nodes.get_mut(id) {
                node.status = NodeStatus::OnPath;
            }
        }
    }
}
