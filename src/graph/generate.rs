//! Random graph generators.

use super::adjacency::Graph;
use crate::error::{ColoringError, ColoringResult};
use rand::Rng;

/// Erdős–Rényi G(n, p) random graph.
///
/// Visits every pair `(i, j)` with `i < j` in lexicographic order and adds
/// the edge when a uniform draw in `[0, 1)` falls below `p`. The number of
/// draws is always `n * (n - 1) / 2`, so the same RNG state yields the same
/// graph.
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `p` is not within `[0, 1]`.
///
/// # Reference
///
/// Erdős & Rényi (1959), "On Random Graphs I"
pub fn gnp<R: Rng>(n: usize, p: f64, rng: &mut R) -> ColoringResult<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ColoringError::InvalidParameter(format!(
            "edge probability must be in [0, 1], got {p}"
        )));
    }

    let mut graph = Graph::with_vertices(n);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_range(0.0..1.0) < p {
                graph.add_edge(i, j);
            }
        }
    }
    Ok(graph)
}
