use crate::graph::RandomGraph;
use crate::spanning_tree::SpanningTree;
use crate::traversal::TraversalState;
use tracing::{trace, warn};

/// Minimum spanning tree of one connected component.
#[derive(Clone, Debug)]
pub struct ComponentMst {
    /// Component id, from 1.
    pub component: usize,
    /// Sum of the chosen edge weights.
    pub weight: f64,
    pub tree: SpanningTree,
}

/// Grows a minimum spanning tree for every component `1..=component_count`.
///
/// Component ids are read from `state`, so a DFS must have run on it
/// first, and `state` must be sized for `graph`. Visited flags are
/// cleared on entry and then reused to mark tree members.
///
/// Each tree is rooted at the first vertex of its component in vertex
/// order. At every step all edges leaving the current tree are scanned,
/// tree members in the order they joined and each member's edges in
/// insertion order, and the first edge of strictly smallest weight wins.
/// There is no priority queue; a step costs a full rescan of the frontier.
pub fn build_spanning_forest(
    graph: &RandomGraph,
    state: &mut TraversalState,
    component_count: usize,
) -> Vec<ComponentMst> {
    debug_assert_eq!(
        state.vertex_count(),
        graph.vertex_count(),
        "traversal state sized for a different graph"
    );
    state.reset_visited();
    let mut forest = Vec::with_capacity(component_count);

    for component in 1..=component_count {
        let Some(root) = graph.vertices().find(|&v| state.component(v) == component) else {
            warn!(component, "component has no vertices, skipping");
            continue;
        };

        let (weight, tree) = grow_tree(graph, state, root);
        trace!(component, root, weight, nodes = tree.len(), "spanning tree done");

        forest.push(ComponentMst {
            component,
            weight,
            tree,
        });
    }

    forest
}

fn grow_tree(graph: &RandomGraph, state: &mut TraversalState, root: usize) -> (f64, SpanningTree) {
    state.mark_visited(root);
    let mut members = vec![root];
    let mut tree = SpanningTree::new(root);
    let mut weight = 0.0;

    // (near endpoint, far endpoint, weight)
    while let Some((parent, child, cheapest)) = cheapest_frontier_edge(graph, state, &members) {
        state.mark_visited(child);
        members.push(child);
        tree.insert(parent, child, cheapest);
        weight += cheapest;
    }

    (weight, tree)
}

fn cheapest_frontier_edge(
    graph: &RandomGraph,
    state: &TraversalState,
    members: &[usize],
) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;

    for &u in members {
        for edge in graph.edges(u) {
            if state.is_visited(edge.target) {
                continue;
            }
            if best.is_none_or(|(_, _, w)| edge.weight < w) {
                best = Some((u, edge.target, edge.weight));
            }
        }
    }

    best
}
