//! Coloring states mutated by the search.
//!
//! A [`ColoringState`] assigns one of k colors to every vertex of a shared
//! [`Graph`](crate::graph::Graph) and tracks how many edges are in
//! conflict. Its elementary move, [`ColoringState::modify_one_vertex`],
//! is the neighbor generator of the annealing engine.

mod state;

pub use state::{ColoringState, Recolor};
