use crate::graph::RandomGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Generates a G(n, p) graph with uniform edge weights in `[0, 1)`.
///
/// Pairs are examined as `(i, j)` with ascending `i`, then ascending
/// `j > i`. Every pair costs one draw; an accepted pair costs one more draw
/// for its weight. With a seeded `rng` the result is reproducible.
///
/// `p` is not validated: `p <= 0` never adds an edge and `p > 1` always
/// does.
pub fn generate<R: Rng + ?Sized>(vertex_count: usize, p: f64, rng: &mut R) -> RandomGraph {
    let mut graph = RandomGraph::empty(vertex_count, Some(p));

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.random::<f64>() < p {
                let weight = rng.random::<f64>();
                graph.push_edge(i, j, weight);
            }
        }
    }

    debug!(
        vertex_count,
        p,
        edge_count = graph.edge_count(),
        "generated random graph"
    );

    graph
}

impl RandomGraph {
    /// Generates a graph using the thread-local random source.
    pub fn new(vertex_count: usize, p: f64) -> Self {
        generate(vertex_count, p, &mut rand::rng())
    }

    /// Generates a graph drawing from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(vertex_count: usize, p: f64, rng: &mut R) -> Self {
        generate(vertex_count, p, rng)
    }

    /// Generates a reproducible graph from `seed`.
    pub fn seeded(vertex_count: usize, p: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        generate(vertex_count, p, &mut rng)
    }
}
