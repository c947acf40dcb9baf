use fixedbitset::FixedBitSet;

/// Snapshot of the bookkeeping kept for one vertex.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VertexCrumb {
    pub visited: bool,
    /// 0 means unassigned, components are numbered from 1.
    pub component: usize,
    /// 0 means unset.
    pub previsit: usize,
    /// 0 means unset.
    pub postvisit: usize,
}

/// Per-vertex traversal bookkeeping, indexed by vertex label.
///
/// Lives apart from the graph, so several analyses can run over the same
/// graph, each with its own state.
#[derive(Debug, Clone)]
pub struct TraversalState {
    // usize is there to keep petgraph's convention
    visited: FixedBitSet,
    component: Vec<usize>,
    previsit: Vec<usize>,
    postvisit: Vec<usize>,
    visit_count: usize,
}

impl TraversalState {
    /// Fresh state: nothing visited, nothing numbered.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(vertex_count),
            component: vec![0; vertex_count],
            previsit: vec![0; vertex_count],
            postvisit: vec![0; vertex_count],
            visit_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.component.len()
    }

    pub fn is_visited(&self, v: usize) -> bool {
        self.visited.contains(v)
    }

    pub(crate) fn mark_visited(&mut self, v: usize) {
        self.visited.insert(v);
    }

    /// Clears every visited flag. Component ids and visit times survive.
    pub fn reset_visited(&mut self) {
        self.visited.clear();
    }

    /// Component id of `v`, 0 if `v` was never reached.
    pub fn component(&self, v: usize) -> usize {
        self.component[v]
    }

    pub(crate) fn set_component(&mut self, v: usize, component: usize) {
        self.component[v] = component;
    }

    pub fn previsit(&self, v: usize) -> usize {
        self.previsit[v]
    }

    pub fn postvisit(&self, v: usize) -> usize {
        self.postvisit[v]
    }

    /// Advances the visit clock and stamps it as the previsit time of `v`.
    pub(crate) fn stamp_previsit(&mut self, v: usize) {
        self.visit_count += 1;
        self.previsit[v] = self.visit_count;
    }

    /// Advances the visit clock and stamps it as the postvisit time of `v`.
    pub(crate) fn stamp_postvisit(&mut self, v: usize) {
        self.visit_count += 1;
        self.postvisit[v] = self.visit_count;
    }

    /// Current value of the visit clock, `2 * n` after a full DFS.
    pub fn visit_count(&self) -> usize {
        self.visit_count
    }

    pub fn crumb(&self, v: usize) -> VertexCrumb {
        VertexCrumb {
            visited: self.is_visited(v),
            component: self.component[v],
            previsit: self.previsit[v],
            postvisit: self.postvisit[v],
        }
    }

    /// Sizes of components `1..=k`, where `k` is the largest id assigned.
    /// Entry `i` holds the size of component `i + 1`.
    pub fn component_sizes(&self) -> Vec<usize> {
        let count = self.component.iter().copied().max().unwrap_or(0);
        let mut sizes = vec![0; count];
        for &c in self.component.iter().filter(|&&c| c > 0) {
            sizes[c - 1] += 1;
        }
        sizes
    }
}
