use crate::graph::RandomGraph;
use crate::traversal::TraversalState;
use tracing::debug;

/// What a full DFS pass reports besides the per-vertex state.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DfsSummary {
    pub component_count: usize,
    /// Final value of the visit clock, `2 * n`.
    pub visit_count: usize,
}

/// Runs a DFS forest over the whole graph.
///
/// Roots are taken in vertex order, neighbours in edge insertion order.
/// Every newly reached root opens a new component. A vertex gets its
/// previsit time when it is first reached and its postvisit time when all
/// of its edges are exhausted; both come from one clock that starts at 1.
///
/// `state` should be fresh and sized for `graph`. Vertices already marked
/// visited are treated as explored and skipped.
///
/// The walk keeps its own stack, so depth is not limited by the call stack.
/// Numbering is the same as for the recursive formulation.
pub fn explore_components(graph: &RandomGraph, state: &mut TraversalState) -> DfsSummary {
    debug_assert_eq!(
        state.vertex_count(),
        graph.vertex_count(),
        "traversal state sized for a different graph"
    );
    let mut component_count = 0;
    // (vertex, index of the next edge to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in graph.vertices() {
        if state.is_visited(root) {
            continue;
        }
        component_count += 1;
        enter(root, component_count, state);
        stack.push((root, 0));

        while let Some(&(u, next)) = stack.last() {
            match graph.edges(u).get(next) {
                Some(edge) => {
                    let top = stack.len() - 1;
                    stack[top].1 += 1;

                    let v = edge.target;
                    if !state.is_visited(v) {
                        enter(v, component_count, state);
                        stack.push((v, 0));
                    }
                }
                None => {
                    state.stamp_postvisit(u);
                    stack.pop();
                }
            }
        }
    }

    let summary = DfsSummary {
        component_count,
        visit_count: state.visit_count(),
    };
    debug!(
        component_count = summary.component_count,
        visit_count = summary.visit_count,
        "dfs finished"
    );
    summary
}

fn enter(v: usize, component: usize, state: &mut TraversalState) {
    state.mark_visited(v);
    state.set_component(v, component);
    state.stamp_previsit(v);
}
