//! CLI argument parsing for pathtrace
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json, --config

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pathtrace_core::error::PathtraceError;
use pathtrace_core::format::OutputFormat;
use pathtrace_core::graph::NodeId;
use pathtrace_core::solver::Algorithm;

/// Pathtrace - stepwise graph search tracer
#[derive(Parser, Debug)]
#[command(name = "pathtrace")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "PATHTRACE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search a graph read from a description file or stdin
    Run(RunArgs),

    /// Search a small built-in showcase graph
    Demo(DemoArgs),

    /// List the available algorithms
    Algos,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Graph description file; omit or pass "-" to read stdin
    pub graph: Option<PathBuf>,

    /// Algorithm variant
    #[arg(long, value_parser = parse_algorithm, default_value = "bfs")]
    pub algo: Algorithm,

    /// Start node id
    #[arg(long)]
    pub start: NodeId,

    /// End node id
    #[arg(long)]
    pub end: NodeId,

    /// Print one record per step as the search advances
    #[arg(long)]
    pub trace: bool,

    /// Milliseconds between steps; defaults to the configured delay when
    /// tracing, 0 otherwise
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Abort after this many steps
    #[arg(long)]
    pub max_steps: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Algorithm variant
    #[arg(long, value_parser = parse_algorithm, default_value = "astar")]
    pub algo: Algorithm,

    /// Print one record per step as the search advances
    #[arg(long)]
    pub trace: bool,

    /// Milliseconds between steps; defaults to the configured delay when
    /// tracing, 0 otherwise
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: PathtraceError| e.to_string())
}

fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    s.parse().map_err(|e: PathtraceError| e.to_string())
}
