use crate::graph::RandomGraph;

/// Complete graph on 4 vertices:
///
/// ```text
/// w(0,1)=0.1  w(0,2)=0.5  w(0,3)=0.9
/// w(1,2)=0.2  w(1,3)=0.3  w(2,3)=0.4
/// ```
///
/// Edges are inserted in the order the generator would add them.
pub(crate) fn four_vertex_graph() -> RandomGraph {
    RandomGraph::from_weighted_edges(
        4,
        &[
            (0, 1, 0.1),
            (0, 2, 0.5),
            (0, 3, 0.9),
            (1, 2, 0.2),
            (1, 3, 0.3),
            (2, 3, 0.4),
        ],
    )
    .unwrap()
}
