//! Approximate graph k-coloring by simulated annealing.
//!
//! Given an undirected graph and a color budget k, the search looks for an
//! assignment of colors that minimizes the number of edges whose endpoints
//! share a color. Zero conflicts is a proper k-coloring; anything above
//! zero is the best the search found under its budget.
//!
//! - [`graph`]: undirected adjacency over dense vertex ids, random graphs
//! - [`coloring`]: color assignment with an incrementally maintained
//!   conflict count and the single-vertex recolor move
//! - [`sa`]: the annealing engine, its configuration, and batch runners
//!
//! # Quick start
//!
//! ```
//! use std::sync::Arc;
//! use u_coloring::graph::Graph;
//! use u_coloring::sa::{AnnealConfig, AnnealRunner};
//!
//! let mut graph = Graph::new();
//! for _ in 0..4 {
//!     graph.add_vertex();
//! }
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//! graph.add_edge(2, 3);
//!
//! let config = AnnealConfig::default().with_seed(7);
//! let result = AnnealRunner::run(Arc::new(graph), 2, &config).unwrap();
//! println!("{} conflicts: {:?}", result.best_conflicts, result.best.colors());
//! ```
//!
//! # Architecture
//!
//! The graph is built first and then shared read-only through an `Arc` by
//! every coloring state. All randomness flows through an RNG passed in by
//! the caller or owned by the engine, so a fixed seed reproduces a run
//! and independent searches can run on separate threads.

pub mod coloring;
pub mod error;
pub mod graph;
pub mod sa;

pub use error::{ColoringError, ColoringResult};
