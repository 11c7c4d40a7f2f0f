//! Undirected adjacency structure.

#[cfg(feature = "serde")]
use crate::error::ColoringError;

/// An undirected simple graph over dense vertex ids `0..vertex_count`.
///
/// Vertices are appended and never removed. Edge requests are permissive:
/// self-loops, duplicates, and edges touching a vertex that does not exist
/// yet are ignored without error, so an interactive editor can forward
/// whatever the user clicked.
///
/// # Examples
///
/// ```
/// use u_coloring::graph::Graph;
///
/// let mut g = Graph::new();
/// let a = g.add_vertex();
/// let b = g.add_vertex();
/// assert!(g.add_edge(a, b));
/// assert!(!g.add_edge(a, a)); // self-loop ignored
/// assert!(!g.add_edge(a, 9)); // unknown vertex ignored
/// assert_eq!(g.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "GraphRepr", try_from = "GraphRepr")
)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    /// Creates a graph with `n` vertices and the given edges.
    ///
    /// Each edge goes through [`add_edge`](Self::add_edge), so invalid
    /// pairs are dropped.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_vertices(n);
        for &(u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Appends a vertex and returns its id (the previous vertex count).
    pub fn add_vertex(&mut self) -> usize {
        let id = self.adjacency.len();
        self.adjacency.push(Vec::new());
        id
    }

    /// Adds the undirected edge `(u, v)`.
    ///
    /// Returns `true` if a new edge was recorded, `false` if the request
    /// was a self-loop, referenced a missing vertex, or already existed.
    pub fn add_edge(&mut self, u: usize, v: usize) -> bool {
        if u == v || !self.contains(u) || !self.contains(v) {
            return false;
        }
        if self.adjacency[u].contains(&v) {
            return false;
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        self.edge_count += 1;
        true
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns `true` if `v` is an existing vertex id.
    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        v < self.adjacency.len()
    }

    /// Neighbors of `v` in insertion order. Empty for an unknown id.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Degree of `v`. Zero for an unknown id.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Returns `true` if the undirected edge `(u, v)` exists.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).contains(&v)
    }

    /// Iterates each undirected edge once as `(u, v)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, neighbors)| {
            neighbors
                .iter()
                .copied()
                .filter(move |&v| u < v)
                .map(move |v| (u, v))
        })
    }
}

/// Serialized form of a [`Graph`]: vertex count plus each edge once.
///
/// Loading goes back through [`Graph::add_edge`] after range checks, so a
/// deserialized graph satisfies the same invariants as a built one.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphRepr {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl From<Graph> for GraphRepr {
    fn from(graph: Graph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edges: graph.edges().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<GraphRepr> for Graph {
    type Error = ColoringError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        let mut graph = Graph::with_vertices(repr.vertex_count);
        for (u, v) in repr.edges {
            if u == v {
                return Err(ColoringError::InvalidParameter(format!(
                    "self-loop on vertex {u}"
                )));
            }
            if let Some(vertex) = [u, v].into_iter().find(|&x| !graph.contains(x)) {
                return Err(ColoringError::VertexOutOfRange {
                    vertex,
                    vertex_count: repr.vertex_count,
                });
            }
            graph.add_edge(u, v);
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::from_edges(3, &[(0, 1), (1, 2), (0, 2)])
    }

    #[test]
    fn test_add_vertex_assigns_sequential_ids() {
        let mut g = Graph::new();
        assert!(g.is_empty());
        assert_eq!(g.add_vertex(), 0);
        assert_eq!(g.add_vertex(), 1);
        assert_eq!(g.add_vertex(), 2);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let g = triangle();
        for (u, v) in g.edges() {
            assert!(g.has_edge(u, v));
            assert!(g.has_edge(v, u));
        }
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edges().count(), 3);
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn test_self_loop_ignored() {
        let mut g = triangle();
        let before = g.clone();
        assert!(!g.add_edge(1, 1));
        assert_eq!(g, before);
        assert!(!g.neighbors(1).contains(&1));
    }

    #[test]
    fn test_edge_to_missing_vertex_ignored() {
        let mut g = Graph::with_vertices(2);
        assert!(!g.add_edge(0, 5));
        assert!(!g.add_edge(5, 0));
        assert!(g.neighbors(0).is_empty());
        assert!(g.neighbors(5).is_empty());

        // Adding the vertex later does not resurrect the ignored edge.
        while g.vertex_count() <= 5 {
            g.add_vertex();
        }
        assert!(!g.has_edge(0, 5));
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let mut g = Graph::with_vertices(2);
        assert!(g.add_edge(0, 1));
        assert!(!g.add_edge(0, 1));
        assert!(!g.add_edge(1, 0));
        assert_eq!(g.neighbors(0), &[1]);
        assert_eq!(g.neighbors(1), &[0]);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let g = Graph::from_edges(4, &[(0, 3), (0, 1), (0, 2)]);
        assert_eq!(g.neighbors(0), &[3, 1, 2]);
    }
}
