//! Color assignment with a cached conflict count.

use crate::error::{ColoringError, ColoringResult};
use crate::graph::Graph;
use rand::Rng;
use std::sync::Arc;

/// A single-vertex recolor applied by
/// [`ColoringState::modify_one_vertex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recolor {
    /// The vertex that changed.
    pub vertex: usize,
    /// Its color before the move.
    pub from: usize,
    /// Its color after the move. Always differs from `from`.
    pub to: usize,
}

/// A k-coloring of a shared graph.
///
/// Holds one color in `[0, k)` per vertex and the number of conflicting
/// edges (edges whose endpoints share a color). The conflict count is
/// kept current by every mutation.
///
/// Cloning copies the color array and shares the graph handle, which is
/// how the search snapshots its best state.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_coloring::coloring::ColoringState;
/// use u_coloring::graph::Graph;
///
/// let graph = Arc::new(Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]));
/// let mut state = ColoringState::new(graph, 3).unwrap();
/// assert_eq!(state.conflicts(), 3);
///
/// state.set_color(1, 1).unwrap();
/// state.set_color(2, 2).unwrap();
/// assert!(state.is_proper());
/// ```
#[derive(Debug, Clone)]
pub struct ColoringState {
    graph: Arc<Graph>,
    num_colors: usize,
    colors: Vec<usize>,
    conflicts: usize,
}

impl ColoringState {
    /// Creates a coloring with every vertex set to color 0.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidColorCount`] if `num_colors` is zero.
    pub fn new(graph: Arc<Graph>, num_colors: usize) -> ColoringResult<Self> {
        if num_colors == 0 {
            return Err(ColoringError::InvalidColorCount(num_colors));
        }
        let colors = vec![0; graph.vertex_count()];
        let mut state = Self {
            graph,
            num_colors,
            colors,
            conflicts: 0,
        };
        state.conflicts = state.count_conflicts();
        Ok(state)
    }

    /// Creates a coloring from explicit colors.
    ///
    /// # Errors
    ///
    /// Fails if `num_colors` is zero, if `colors` does not have one entry
    /// per vertex, or if any color is out of range.
    pub fn from_colors(
        graph: Arc<Graph>,
        num_colors: usize,
        colors: Vec<usize>,
    ) -> ColoringResult<Self> {
        if num_colors == 0 {
            return Err(ColoringError::InvalidColorCount(num_colors));
        }
        if colors.len() != graph.vertex_count() {
            return Err(ColoringError::InvalidParameter(format!(
                "expected {} colors, got {}",
                graph.vertex_count(),
                colors.len()
            )));
        }
        if let Some(&color) = colors.iter().find(|&&c| c >= num_colors) {
            return Err(ColoringError::ColorOutOfRange { color, num_colors });
        }
        let mut state = Self {
            graph,
            num_colors,
            colors,
            conflicts: 0,
        };
        state.conflicts = state.count_conflicts();
        Ok(state)
    }

    /// Sets the color of one vertex and updates the conflict count.
    ///
    /// # Errors
    ///
    /// [`ColoringError::VertexOutOfRange`] or
    /// [`ColoringError::ColorOutOfRange`]; the state is left unchanged.
    pub fn set_color(&mut self, vertex: usize, color: usize) -> ColoringResult<()> {
        if vertex >= self.colors.len() {
            return Err(ColoringError::VertexOutOfRange {
                vertex,
                vertex_count: self.colors.len(),
            });
        }
        if color >= self.num_colors {
            return Err(ColoringError::ColorOutOfRange {
                color,
                num_colors: self.num_colors,
            });
        }
        self.recolor(vertex, color);
        Ok(())
    }

    /// Assigns every vertex an independent uniform color in `[0, k)`.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        let k = self.num_colors;
        for color in &mut self.colors {
            *color = rng.random_range(0..k);
        }
        self.conflicts = self.count_conflicts();
    }

    /// Recolors one uniformly chosen vertex with a uniformly chosen
    /// different color.
    ///
    /// Exactly one position of the color array changes per call.
    ///
    /// # Errors
    ///
    /// [`ColoringError::EmptyGraph`] when there is no vertex to pick, and
    /// [`ColoringError::NoAlternativeColor`] when `k < 2`.
    pub fn modify_one_vertex<R: Rng>(&mut self, rng: &mut R) -> ColoringResult<Recolor> {
        if self.colors.is_empty() {
            return Err(ColoringError::EmptyGraph);
        }
        if self.num_colors < 2 {
            return Err(ColoringError::NoAlternativeColor(self.num_colors));
        }

        let vertex = rng.random_range(0..self.colors.len());
        let from = self.colors[vertex];
        // Uniform over the k - 1 colors other than `from`.
        let mut to = rng.random_range(0..self.num_colors - 1);
        if to >= from {
            to += 1;
        }

        self.recolor(vertex, to);
        Ok(Recolor { vertex, from, to })
    }

    /// Counts conflicting edges from scratch.
    ///
    /// Every undirected edge is stored in both endpoint lists, so the raw
    /// tally is halved.
    pub fn count_conflicts(&self) -> usize {
        let doubled: usize = (0..self.colors.len())
            .map(|v| self.same_color_neighbors(v, self.colors[v]))
            .sum();
        doubled / 2
    }

    /// Number of edges whose endpoints share a color.
    #[inline]
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    /// Returns `true` if no edge is in conflict.
    pub fn is_proper(&self) -> bool {
        self.conflicts == 0
    }

    /// Color of every vertex, indexed by vertex id.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Color of `vertex`, or `None` for an unknown id.
    pub fn color(&self, vertex: usize) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// The color budget k.
    pub fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Number of colored vertices.
    pub fn vertex_count(&self) -> usize {
        self.colors.len()
    }

    /// The shared graph.
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Applies a validated recolor. Only edges incident to `vertex` can
    /// change state, so the count moves by their difference.
    fn recolor(&mut self, vertex: usize, color: usize) {
        let old = self.colors[vertex];
        if old == color {
            return;
        }
        let removed = self.same_color_neighbors(vertex, old);
        let added = self.same_color_neighbors(vertex, color);
        self.colors[vertex] = color;
        self.conflicts = self.conflicts - removed + added;
    }

    fn same_color_neighbors(&self, vertex: usize, color: usize) -> usize {
        self.graph
            .neighbors(vertex)
            .iter()
            .filter(|&&n| self.colors[n] == color)
            .count()
    }
}
