//! Mean and spread of the component count over G(n, p).
//!
//! `RUST_LOG=info cargo run --release --example component_sweep`

use random_graph_analysis::{SweepConfig, component_sweep};
use tracing_subscriber::EnvFilter;

fn main() -> random_graph_analysis::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SweepConfig::default();
    println!(
        "Connected component analysis for undirected graphs of sizes {:?}",
        config.vertex_counts
    );
    println!(
        "with edge probabilities ranging from {:.2} to {:.2} in increments of {:.2} on a sample size of {}",
        config.start_probability,
        config.end_probability,
        config.probability_increment,
        config.sample_size
    );

    let stats = component_sweep(&config, &mut rand::rng())?;

    let mut current = None;
    for point in stats {
        if current != Some(point.vertex_count) {
            current = Some(point.vertex_count);
            println!();
            println!("Graph: {} vertices", point.vertex_count);
            println!("{}", "-".repeat(80));
        }
        println!(
            "G({}, {:.2}), mean({:.3}), sd({:.3})",
            point.vertex_count, point.probability, point.mean, point.standard_deviation
        );
    }

    Ok(())
}
