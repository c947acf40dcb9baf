/// Wrapper for petgraph's graph type.
///
/// Node weights are vertex labels, edge weights are edge costs.
pub type WeightedGraph = petgraph::graph::UnGraph<u32, f64>;

/// One endpoint's view of an undirected edge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Edge {
    /// Label of the vertex on the other side.
    pub target: usize,
    pub weight: f64,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {:.3})", self.target, self.weight)
    }
}
