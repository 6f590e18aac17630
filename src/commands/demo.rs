//! The demo command: a small built-in graph for trying the solvers
//!
//! Seven nodes laid out as two stacked diamonds with a tempting heavy
//! shortcut, so the four algorithms visibly disagree about the route.

use tracing::debug;

use crate::cli::{Cli, DemoArgs};
use pathtrace_core::config::EngineConfig;
use pathtrace_core::error::Result;
use pathtrace_core::graph::{Graph, Vec2};

use super::run::{search, SearchOptions};

const POSITIONS: [(f32, f32); 7] = [
    (100.0, 300.0),
    (250.0, 150.0),
    (250.0, 450.0),
    (400.0, 300.0),
    (550.0, 150.0),
    (550.0, 450.0),
    (700.0, 300.0),
];

// (from, to, detour factor applied to the straight-line distance)
const LINKS: [(usize, usize, f32); 9] = [
    (0, 1, 1.0),
    (0, 2, 1.0),
    (1, 3, 1.0),
    (2, 3, 1.2),
    (3, 4, 1.0),
    (3, 5, 1.4),
    (4, 6, 1.0),
    (5, 6, 1.0),
    (0, 6, 3.0), // direct but heavy; BFS takes it, the weighted solvers refuse
];

pub fn execute(cli: &Cli, args: &DemoArgs, config: &EngineConfig) -> Result<()> {
    let mut graph = Graph::with_hit_radius(config.hit_radius);

    let ids: Vec<_> = POSITIONS
        .iter()
        .map(|&(x, y)| graph.add_node(Vec2::new(x, y)))
        .collect();

    for &(a, b, factor) in &LINKS {
        let pa = Vec2::new(POSITIONS[a].0, POSITIONS[a].1);
        let pb = Vec2::new(POSITIONS[b].0, POSITIONS[b].1);
        graph.add_edge(ids[a], ids[b], pa.distance(pb) * factor, true);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "demo graph built"
    );

    let options = SearchOptions::new(args.trace, args.delay_ms, None, config);
    search(cli, args.algo, graph, ids[0], ids[6], &options)
}
