//! The run command: load a graph, drive a solver one step at a time, report
//!
//! The solver is never run ahead of the loop here; each iteration performs
//! exactly one `step` so `--trace` and `--delay-ms` can expose the search as
//! it unfolds. Ctrl-C during a paced run stops stepping and reports whatever
//! state the search was left in.

use std::fs::File;
use std::io::{self, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, RunArgs};
use pathtrace_core::config::EngineConfig;
use pathtrace_core::error::{PathtraceError, Result};
use pathtrace_core::format::OutputFormat;
use pathtrace_core::graph::{Graph, NodeId, NodeStatus};
use pathtrace_core::solver::{path_cost, Algorithm, DebugInfo, SolverState};

use super::parse;

/// One line of `--trace` output
#[derive(Debug, Serialize)]
struct StepRecord {
    step: usize,
    state: SolverState,
    frontier: usize,
    visited: usize,
}

/// Algorithm-specific scores for one node on the final path
#[derive(Debug, Serialize)]
struct NodeScores {
    node: NodeId,
    #[serde(flatten)]
    info: DebugInfo,
}

/// Final report for a completed or aborted search
#[derive(Debug, Serialize)]
struct SearchReport {
    algorithm: &'static str,
    state: SolverState,
    steps: usize,
    nodes: usize,
    edges: usize,
    path: Vec<NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    scores: Vec<NodeScores>,
}

pub(super) struct SearchOptions {
    pub trace: bool,
    pub delay_ms: u64,
    pub max_steps: Option<usize>,
}

impl SearchOptions {
    pub fn new(
        trace: bool,
        delay_ms: Option<u64>,
        max_steps: Option<usize>,
        config: &EngineConfig,
    ) -> Self {
        // Pacing only matters when the steps are visible
        let default_delay = if trace { config.step_delay_ms } else { 0 };
        SearchOptions {
            trace,
            delay_ms: delay_ms.unwrap_or(default_delay),
            max_steps,
        }
    }
}

#[tracing::instrument(skip_all, fields(algo = %args.algo))]
pub fn execute(cli: &Cli, args: &RunArgs, config: &EngineConfig) -> Result<()> {
    let graph = match &args.graph {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path)?;
            parse::parse_graph(BufReader::new(file), config)?
        }
        _ => parse::parse_graph(io::stdin().lock(), config)?,
    };

    let options = SearchOptions::new(args.trace, args.delay_ms, args.max_steps, config);
    search(cli, args.algo, graph, args.start, args.end, &options)
}

/// Drive one solver over one graph and print the report
///
/// A search that ends without a path is still a successful run; only step
/// budget exhaustion is an error.
pub(super) fn search(
    cli: &Cli,
    algorithm: Algorithm,
    mut graph: Graph,
    start: NodeId,
    end: NodeId,
    options: &SearchOptions,
) -> Result<()> {
    for id in [start, end] {
        if graph.node(id).is_none() {
            return Err(PathtraceError::UnknownNode(id));
        }
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    if options.delay_ms > 0 {
        let flag = Arc::clone(&interrupted);
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .map_err(|e| PathtraceError::Other(format!("signal handler: {}", e)))?;
    }

    let mut solver = algorithm.solver();
    solver.initialize(&mut graph, start, end);

    let budget = options
        .max_steps
        .unwrap_or(10 * (graph.node_count() + graph.edge_count()) + 10);

    let mut steps = 0;
    let mut state = solver.state();
    while !state.is_finished() {
        if steps >= budget {
            return Err(PathtraceError::Other(format!(
                "no terminal state after {} steps",
                steps
            )));
        }
        if interrupted.load(Ordering::SeqCst) {
            info!(steps, "interrupted");
            break;
        }

        state = solver.step(&mut graph);
        steps += 1;

        if options.trace {
            emit_step(cli, &graph, steps, state)?;
        }
        if options.delay_ms > 0 && !state.is_finished() {
            thread::sleep(Duration::from_millis(options.delay_ms));
        }
    }

    debug!(steps, %state, "search finished");

    let (path, cost) = if state == SolverState::FinishedFoundPath {
        let path = solver.path();
        graph.mark_path(&path);
        let cost = path_cost(&graph, &path);
        (path, Some(cost))
    } else {
        (Vec::new(), None)
    };

    let scores = path
        .iter()
        .filter_map(|&id| {
            solver
                .debug_info(id)
                .map(|info| NodeScores { node: id, info })
        })
        .collect();

    let report = SearchReport {
        algorithm: algorithm.name(),
        state,
        steps,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        path,
        cost,
        scores,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Human => print_human(cli, &report),
    }

    Ok(())
}

fn emit_step(cli: &Cli, graph: &Graph, step: usize, state: SolverState) -> Result<()> {
    let mut frontier = 0;
    let mut visited = 0;
    for id in graph.node_ids() {
        match graph.node(id).map(|n| n.status) {
            Some(NodeStatus::Frontier) => frontier += 1,
            Some(NodeStatus::Visited | NodeStatus::Current) => visited += 1,
            _ => {}
        }
    }

    let record = StepRecord {
        step,
        state,
        frontier,
        visited,
    };
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&record)?),
        OutputFormat::Human => {
            let state_text = record.state.to_string();
            println!(
                "step {:>4}  {:<12}  frontier {:>3}  visited {:>3}",
                record.step, state_text, record.frontier, record.visited
            );
        }
    }
    Ok(())
}

fn print_human(cli: &Cli, report: &SearchReport) {
    let rendered_path = report
        .path
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");

    if cli.quiet {
        if !report.path.is_empty() {
            println!("{}", rendered_path);
        }
        return;
    }

    println!("algorithm: {}", report.algorithm);
    println!("state:     {}", report.state);
    println!("steps:     {}", report.steps);
    println!("graph:     {} nodes, {} edges", report.nodes, report.edges);
    if !report.path.is_empty() {
        println!("path:      {}", rendered_path);
    }
    if let Some(cost) = report.cost {
        println!("cost:      {}", cost);
    }
}
