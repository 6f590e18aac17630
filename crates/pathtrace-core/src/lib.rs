//! Pathtrace Core Library
//!
//! The incremental graph-search engine: a mutable weighted graph plus four
//! stepwise solvers (BFS, DFS, Dijkstra, A*) that expose intermediate state
//! after every step so an external driver can render a live trace.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod solver;
