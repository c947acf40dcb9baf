use crate::dfs::{DfsSummary, explore_components};
use crate::diameter::tree_diameter;
use crate::graph::RandomGraph;
use crate::mst::{ComponentMst, build_spanning_forest};
use crate::spanning_tree::SpanningTree;
use crate::traversal::TraversalState;
use tracing::debug_span;

/// One analysis pass over a graph, owning its own traversal state.
///
/// The graph is only borrowed, so any number of analyses can share it.
#[derive(Debug)]
pub struct GraphAnalysis<'a> {
    graph: &'a RandomGraph,
    state: TraversalState,
    summary: Option<DfsSummary>,
}

impl<'a> GraphAnalysis<'a> {
    pub fn new(graph: &'a RandomGraph) -> Self {
        Self {
            graph,
            state: TraversalState::new(graph.vertex_count()),
            summary: None,
        }
    }

    /// Runs the DFS on a fresh state, replacing the result of any earlier run.
    pub fn run_dfs(&mut self) -> DfsSummary {
        self.state = TraversalState::new(self.graph.vertex_count());
        let summary = explore_components(self.graph, &mut self.state);
        self.summary = Some(summary);
        summary
    }

    /// Spanning trees of every component, in component order.
    ///
    /// Runs the DFS first if it has not run yet.
    pub fn find_msts(&mut self) -> Vec<ComponentMst> {
        let summary = match self.summary {
            Some(summary) => summary,
            None => self.run_dfs(),
        };
        build_spanning_forest(self.graph, &mut self.state, summary.component_count)
    }

    /// Component count of the last DFS, 0 before any.
    pub fn component_count(&self) -> usize {
        self.summary.map_or(0, |s| s.component_count)
    }

    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    pub fn into_state(self) -> TraversalState {
        self.state
    }
}

/// Everything one analysis run produces.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub component_count: usize,
    /// MST weight per component, component `i + 1` at index `i`.
    pub mst_weights: Vec<f64>,
    /// Root-to-leaf diameter per component.
    pub diameters: Vec<f64>,
    /// Sum of `diameters`.
    pub diameter_total: f64,
    pub trees: Vec<SpanningTree>,
    /// Component ids and DFS times of every vertex.
    pub traversal: TraversalState,
}

impl AnalysisReport {
    /// Total MST weight over all components.
    pub fn total_mst_weight(&self) -> f64 {
        self.mst_weights.iter().sum()
    }

    /// Mean MST weight per component, 0 for an empty graph.
    pub fn average_mst_weight(&self) -> f64 {
        if self.component_count == 0 {
            return 0.0;
        }
        self.total_mst_weight() / self.component_count as f64
    }

    /// Mean diameter per component, 0 for an empty graph.
    pub fn average_diameter(&self) -> f64 {
        if self.component_count == 0 {
            return 0.0;
        }
        self.diameter_total / self.component_count as f64
    }
}

/// DFS, spanning forest and diameters in one go.
///
/// The diameter total only covers this run.
pub fn analyze(graph: &RandomGraph) -> AnalysisReport {
    let _span = debug_span!("analyze", vertex_count = graph.vertex_count()).entered();

    let mut analysis = GraphAnalysis::new(graph);
    let summary = analysis.run_dfs();
    let forest = analysis.find_msts();

    let mut mst_weights = Vec::with_capacity(forest.len());
    let mut diameters = Vec::with_capacity(forest.len());
    let mut trees = Vec::with_capacity(forest.len());
    for ComponentMst { weight, tree, .. } in forest {
        mst_weights.push(weight);
        diameters.push(tree_diameter(&tree));
        trees.push(tree);
    }

    AnalysisReport {
        component_count: summary.component_count,
        diameter_total: diameters.iter().sum(),
        mst_weights,
        diameters,
        trees,
        traversal: analysis.into_state(),
    }
}
