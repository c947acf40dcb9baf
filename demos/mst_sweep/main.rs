//! Average MST weight and diameter per component over G(n, p).
//!
//! `cargo run --release --example mst_sweep`

use random_graph_analysis::{SweepConfig, mst_sweep};
use tracing_subscriber::EnvFilter;

fn main() -> random_graph_analysis::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SweepConfig::default().with_vertex_counts([20, 100, 500, 1000]);

    let mut current = None;
    for point in mst_sweep(&config, &mut rand::rng())? {
        if current != Some(point.vertex_count) {
            current = Some(point.vertex_count);
            println!("========= {} Nodes =========", point.vertex_count);
        }
        println!(
            "  p={:.2}  components={:<5} mst={:.6}  diameter={:.6}",
            point.probability,
            point.component_count,
            point.average_mst_weight,
            point.average_diameter
        );
    }

    Ok(())
}
