//! Error types for the coloring engine.
//!
//! Fallible operations return [`ColoringResult<T>`]. Invalid topology
//! (self-loops, edges to unknown vertices) is not an error; those
//! requests are ignored by [`Graph::add_edge`](crate::graph::Graph::add_edge).

use thiserror::Error;

/// Unified error type for graph coloring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringError {
    /// The color budget must be at least one.
    #[error("Invalid color count: {0} (must be >= 1)")]
    InvalidColorCount(usize),

    /// A vertex id outside `[0, vertex_count)`.
    #[error("Vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A color index outside `[0, num_colors)`.
    #[error("Color {color} out of range (budget is {num_colors} colors)")]
    ColorOutOfRange { color: usize, num_colors: usize },

    /// A random vertex was requested from a graph with no vertices.
    #[error("Graph has no vertices")]
    EmptyGraph,

    /// A recolor move needs at least two colors.
    #[error("No alternative color with a budget of {0}")]
    NoAlternativeColor(usize),

    /// Annealing parameters are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A numeric argument is out of its valid range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Convenience alias for `Result<T, ColoringError>`.
pub type ColoringResult<T> = Result<T, ColoringError>;
