//! I use it with `cargo run --example draw_mst | dot -Tsvg > mst.svg`

use random_graph_analysis::{RandomGraph, analyze, draw_spanning_tree};

fn main() {
    let graph = RandomGraph::seeded(12, 0.3, 2024);
    let report = analyze(&graph);

    eprintln!(
        "{} components, total weight {:.3}, diameter total {:.3}",
        report.component_count,
        report.total_mst_weight(),
        report.diameter_total
    );

    // biggest component only, one digraph per output
    if let Some(tree) = report.trees.iter().max_by_key(|tree| tree.len()) {
        print!("{}", draw_spanning_tree(tree));
    }
}
