//! Command dispatch for the pathtrace binary

mod demo;
mod parse;
mod run;

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use pathtrace_core::config::EngineConfig;
use pathtrace_core::error::Result;
use pathtrace_core::format::OutputFormat;
use pathtrace_core::solver::Algorithm;

pub fn dispatch(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Run(args) => run::execute(cli, args, &config),
        Commands::Demo(args) => demo::execute(cli, args, &config),
        Commands::Algos => algos(cli),
    }
}

fn algos(cli: &Cli) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
            let value = serde_json::json!({ "algorithms": names });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            for algorithm in Algorithm::ALL {
                let blurb = match algorithm {
                    Algorithm::Bfs => "fewest edges, weights ignored",
                    Algorithm::Dfs => "first route reached, no guarantee",
                    Algorithm::Dijkstra => "minimal summed weight",
                    Algorithm::AStar => "minimal summed weight, goal-directed",
                };
                println!("{:<10}{}", algorithm.name(), blurb);
            }
        }
    }
    Ok(())
}
