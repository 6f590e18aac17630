//! Graph description parser
//!
//! Line-oriented text format:
//!
//! ```text
//! node <x> <y>              # ids are assigned 0, 1, 2, ... in file order
//! edge <from> <to> [weight] # both directions
//! arc <from> <to> [weight]  # one direction
//! ```
//!
//! Blank lines are skipped and `#` starts a comment. An omitted weight falls
//! back to the configured default. Edge endpoints must already exist and
//! weights must be non-negative; violations report the offending line number.

use std::io::BufRead;

use pathtrace_core::config::EngineConfig;
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::graph::{Graph, NodeId, Vec2};

pub fn parse_graph(reader: impl BufRead, config: &EngineConfig) -> Result<Graph> {
    let mut graph = Graph::with_hit_radius(config.hit_radius);

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        match fields[0] {
            "node" => parse_node(&mut graph, &fields[1..], number)?,
            "edge" => parse_edge(&mut graph, &fields[1..], number, true, config)?,
            "arc" => parse_edge(&mut graph, &fields[1..], number, false, config)?,
            other => {
                return Err(invalid(number, format!("unknown keyword `{}`", other)));
            }
        }
    }

    Ok(graph)
}

fn invalid(line: usize, reason: impl Into<String>) -> PathtraceError {
    PathtraceError::InvalidGraphLine {
        line,
        reason: reason.into(),
    }
}

fn parse_node(graph: &mut Graph, fields: &[&str], number: usize) -> Result<()> {
    let [x, y] = fields else {
        return Err(invalid(number, "expected `node <x> <y>`"));
    };
    let x: f32 = x
        .parse()
        .map_err(|_| invalid(number, format!("bad coordinate `{}`", x)))?;
    let y: f32 = y
        .parse()
        .map_err(|_| invalid(number, format!("bad coordinate `{}`", y)))?;

    graph.add_node(Vec2::new(x, y));
    Ok(())
}

fn parse_edge(
    graph: &mut Graph,
    fields: &[&str],
    number: usize,
    bidirectional: bool,
    config: &EngineConfig,
) -> Result<()> {
    let (from, to, weight) = match fields {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => {
            return Err(invalid(number, "expected `<from> <to> [weight]`"));
        }
    };

    let from: NodeId = from
        .parse()
        .map_err(|_| invalid(number, format!("bad node id `{}`", from)))?;
    let to: NodeId = to
        .parse()
        .map_err(|_| invalid(number, format!("bad node id `{}`", to)))?;

    for id in [from, to] {
        if graph.node(id).is_none() {
            return Err(invalid(number, format!("unknown node id {}", id)));
        }
    }

    let weight: f32 = match weight {
        Some(raw) => raw
            .parse()
            .map_err(|_| invalid(number, format!("bad weight `{}`", raw)))?,
        None => config.default_edge_weight,
    };
    if weight < 0.0 || weight.is_nan() {
        return Err(invalid(number, format!("negative weight {}", weight)));
    }

    graph.add_edge(from, to, weight, bidirectional);
    Ok(())
}
