//! Undirected graphs to be colored.
//!
//! [`Graph`] is a plain adjacency structure. It is built up front and then
//! shared read-only (via `Arc`) by every coloring state of a search.
//!
//! # Submodules
//!
//! - [`generate`]: random graph generators (Erdős–Rényi G(n, p))

mod adjacency;
pub mod generate;

pub use adjacency::Graph;
