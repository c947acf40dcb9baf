// #![warn(missing_docs)]

//! # random_graph_analysis
//!
//! Connected components and minimum spanning trees of random
//! Erdős–Rényi graphs G(n, p).
//!
//! A [`RandomGraph`] is generated once and never changes. Analyses run
//! over it with their own [`TraversalState`]: a DFS numbers the vertices
//! and splits them into components, then a spanning tree is grown inside
//! every component and its longest root-to-leaf path is measured.
//!
//! ```
//! use random_graph_analysis::{RandomGraph, analyze};
//!
//! let graph = RandomGraph::seeded(100, 0.02, 7);
//! let report = analyze(&graph);
//!
//! assert_eq!(report.mst_weights.len(), report.component_count);
//! ```
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).

pub mod analysis;
pub mod dfs;
pub mod diameter;
pub mod error;
pub mod generator;
pub mod graph;
pub mod mst;
pub mod output;
pub mod spanning_tree;
pub mod sweep;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use analysis::{AnalysisReport, GraphAnalysis, analyze};
pub use dfs::{DfsSummary, explore_components};
pub use diameter::tree_diameter;
pub use error::{GraphError, Result};
pub use generator::generate;
pub use graph::RandomGraph;
pub use mst::{ComponentMst, build_spanning_forest};
pub use output::{draw_graph, draw_spanning_tree};
pub use spanning_tree::{SpanningTree, TreeNode};
pub use sweep::{ComponentStats, MstSweepPoint, SweepConfig, component_sweep, mst_sweep};
pub use traversal::{TraversalState, VertexCrumb};
pub use types::{Edge, WeightedGraph};
