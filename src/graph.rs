use crate::error::{GraphError, Result};
use crate::types::{Edge, WeightedGraph};
use hashbrown::HashSet;
use petgraph::graph::NodeIndex;
use petgraph::visit::{EdgeRef, NodeIndexable};
use std::ops::Range;

/// Undirected weighted graph with vertices labelled `0..n`.
///
/// Every undirected edge is kept twice in the adjacency lists, once per
/// endpoint, with the same weight. Per-vertex edge order is the order in
/// which edges were inserted. Nothing can be changed after construction.
///
/// The petgraph graph is kept alongside so that petgraph algorithms can be
/// run on the same instance, see [`RandomGraph::as_petgraph`].
#[derive(Debug, Clone)]
pub struct RandomGraph {
    graph: WeightedGraph,
    adjacency: Vec<Vec<Edge>>,
    edge_probability: Option<f64>,
}

impl RandomGraph {
    /// Graph with `vertex_count` isolated vertices.
    pub(crate) fn empty(vertex_count: usize, edge_probability: Option<f64>) -> Self {
        let mut graph = WeightedGraph::with_capacity(vertex_count, 0);
        for label in 0..vertex_count {
            graph.add_node(label as u32);
        }

        Self {
            graph,
            adjacency: vec![Vec::new(); vertex_count],
            edge_probability,
        }
    }

    /// Inserts `u -- v` on both endpoints. Callers guarantee `u != v` and
    /// that the pair is new.
    pub(crate) fn push_edge(&mut self, u: usize, v: usize, weight: f64) {
        debug_assert!(u != v);
        self.graph
            .add_edge(NodeIndex::new(u), NodeIndex::new(v), weight);
        self.adjacency[u].push(Edge { target: v, weight });
        self.adjacency[v].push(Edge { target: u, weight });
    }

    /// Builds a graph from an explicit edge list `(u, v, weight)`.
    ///
    /// Edges are inserted in list order, so the edge order of every vertex
    /// follows the list.
    ///
    /// ```
    /// use random_graph_analysis::RandomGraph;
    ///
    /// let g = RandomGraph::from_weighted_edges(3, &[(0, 1, 0.5), (1, 2, 0.25)]).unwrap();
    /// assert_eq!(g.edge_count(), 2);
    /// assert_eq!(g.edges(1)[0].target, 0);
    /// ```
    pub fn from_weighted_edges(vertex_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut ret = Self::empty(vertex_count, None);
        let mut seen = HashSet::with_capacity(edges.len());

        for &(u, v, weight) in edges {
            for vertex in [u, v] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop(u));
            }
            if !weight.is_finite() {
                return Err(GraphError::InvalidWeight { u, v, weight });
            }
            if !seen.insert((u.min(v), u.max(v))) {
                return Err(GraphError::DuplicateEdge(u, v));
            }
            ret.push_edge(u, v, weight);
        }

        Ok(ret)
    }

    /// Same as [`RandomGraph::from_weighted_edges`], but takes a petgraph
    /// graph. Vertex labels become petgraph's node indices.
    pub fn from_petgraph(graph: &WeightedGraph) -> Result<Self> {
        let edges: Vec<_> = graph
            .edge_references()
            .map(|e| {
                (
                    graph.to_index(e.source()),
                    graph.to_index(e.target()),
                    *e.weight(),
                )
            })
            .collect();
        Self::from_weighted_edges(graph.node_count(), &edges)
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Probability the graph was generated with, `None` for graphs built
    /// from explicit edges.
    pub fn edge_probability(&self) -> Option<f64> {
        self.edge_probability
    }

    /// Vertex labels in creation order.
    pub fn vertices(&self) -> Range<usize> {
        0..self.adjacency.len()
    }

    /// Edges incident to `v`, in insertion order.
    pub fn edges(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    pub fn as_petgraph(&self) -> &WeightedGraph {
        &self.graph
    }
}

impl std::fmt::Display for RandomGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for v in self.vertices() {
            write!(f, "Vertex [{}], Edges {{ ", v)?;
            for edge in self.edges(v) {
                write!(f, "{}, ", edge)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_stored_on_both_endpoints() {
        let g = RandomGraph::from_weighted_edges(3, &[(0, 2, 0.7), (2, 1, 0.1)]).unwrap();

        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.edges(0), &[Edge { target: 2, weight: 0.7 }]);
        assert_eq!(g.edges(1), &[Edge { target: 2, weight: 0.1 }]);
        assert_eq!(
            g.edges(2),
            &[Edge { target: 0, weight: 0.7 }, Edge { target: 1, weight: 0.1 }]
        );
        assert_eq!(g.edge_probability(), None);
    }

    #[test]
    fn test_rejects_bad_edges() {
        assert_eq!(
            RandomGraph::from_weighted_edges(2, &[(0, 2, 0.1)]).unwrap_err(),
            GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        );
        assert_eq!(
            RandomGraph::from_weighted_edges(2, &[(1, 1, 0.1)]).unwrap_err(),
            GraphError::SelfLoop(1)
        );
        assert_eq!(
            RandomGraph::from_weighted_edges(2, &[(0, 1, 0.1), (1, 0, 0.2)]).unwrap_err(),
            GraphError::DuplicateEdge(1, 0)
        );
        assert!(matches!(
            RandomGraph::from_weighted_edges(2, &[(0, 1, f64::NAN)]),
            Err(GraphError::InvalidWeight { u: 0, v: 1, .. })
        ));
    }

    #[test]
    fn test_from_petgraph_keeps_edge_order() {
        let mut pg = WeightedGraph::new_undirected();
        let a = pg.add_node(0);
        let b = pg.add_node(1);
        let c = pg.add_node(2);
        pg.add_edge(b, c, 0.3);
        pg.add_edge(a, b, 0.6);

        let g = RandomGraph::from_petgraph(&pg).unwrap();
        let targets: Vec<_> = g.edges(1).iter().map(|e| e.target).collect();
        assert_eq!(targets, vec![2, 0]);
        assert_eq!(g.as_petgraph().edge_count(), 2);
    }

    #[test]
    fn test_display() {
        let g = RandomGraph::from_weighted_edges(2, &[(0, 1, 0.25)]).unwrap();
        assert_eq!(
            g.to_string(),
            "Vertex [0], Edges { (1, 0.250), }\nVertex [1], Edges { (0, 0.250), }\n"
        );
    }
}
