use crate::analysis::analyze;
use crate::dfs::explore_components;
use crate::error::{GraphError, Result};
use crate::graph::RandomGraph;
use crate::traversal::TraversalState;
use rand::Rng;
use tracing::info;

/// Which graphs a sweep generates.
///
/// Probabilities start at `start_probability` and grow by repeatedly adding
/// `probability_increment` while they stay `<= end_probability`. The
/// default end sits a little above 1 so that rounding in the additions
/// still lets the last step land on 1.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub vertex_counts: Vec<usize>,
    pub start_probability: f64,
    pub end_probability: f64,
    pub probability_increment: f64,
    /// Graphs generated per point of a component sweep.
    pub sample_size: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            vertex_counts: vec![20, 50, 500, 1000],
            start_probability: 0.0,
            end_probability: 1.00004,
            probability_increment: 0.02,
            sample_size: 100,
        }
    }
}

impl SweepConfig {
    pub fn with_vertex_counts(mut self, vertex_counts: impl Into<Vec<usize>>) -> Self {
        self.vertex_counts = vertex_counts.into();
        self
    }

    pub fn with_probabilities(mut self, start: f64, end: f64, increment: f64) -> Self {
        self.start_probability = start;
        self.end_probability = end;
        self.probability_increment = increment;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    /// Checks everything a component sweep needs: the probability range,
    /// the vertex counts and a non-empty sample.
    pub fn validate(&self) -> Result<()> {
        self.validate_range()?;
        if self.sample_size == 0 {
            return Err(GraphError::EmptySample);
        }
        Ok(())
    }

    /// Checks the probability range and the vertex counts, which is all an
    /// MST sweep reads.
    ///
    /// Both ends of the range must be finite and the increment must move
    /// them, otherwise the probabilities would never pass the end.
    pub fn validate_range(&self) -> Result<()> {
        let (start, end, increment) = (
            self.start_probability,
            self.end_probability,
            self.probability_increment,
        );
        if !(increment.is_finite() && increment > 0.0) {
            return Err(GraphError::InvalidIncrement(increment));
        }
        if !(start.is_finite() && end.is_finite())
            || start + increment == start
            || end + increment == end
        {
            return Err(GraphError::InvalidProbabilityRange {
                start,
                end,
                increment,
            });
        }
        if self.vertex_counts.is_empty() {
            return Err(GraphError::NoGraphSizes);
        }
        Ok(())
    }

    /// Every probability of the sweep, in order.
    pub fn probabilities(&self) -> Result<Vec<f64>> {
        self.validate_range()?;

        let mut ret = Vec::new();
        let mut p = self.start_probability;
        while p <= self.end_probability {
            ret.push(p);
            let next = p + self.probability_increment;
            if next <= p {
                break;
            }
            p = next;
        }
        Ok(ret)
    }
}

/// Component count statistics of one `(n, p)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentStats {
    pub vertex_count: usize,
    pub probability: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub standard_deviation: f64,
}

/// Spanning tree averages of one `(n, p)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MstSweepPoint {
    pub vertex_count: usize,
    pub probability: f64,
    pub component_count: usize,
    /// MST weight per component.
    pub average_mst_weight: f64,
    /// Root-to-leaf diameter per component.
    pub average_diameter: f64,
}

/// For every `(n, p)` of the sweep, generates `sample_size` graphs and
/// reports the mean and spread of their component counts.
pub fn component_sweep<R: Rng + ?Sized>(
    config: &SweepConfig,
    rng: &mut R,
) -> Result<Vec<ComponentStats>> {
    config.validate()?;
    let probabilities = config.probabilities()?;
    let mut ret = Vec::with_capacity(config.vertex_counts.len() * probabilities.len());

    for &n in &config.vertex_counts {
        for &p in &probabilities {
            let counts: Vec<usize> = (0..config.sample_size)
                .map(|_| {
                    let graph = RandomGraph::with_rng(n, p, rng);
                    let mut state = TraversalState::new(n);
                    explore_components(&graph, &mut state).component_count
                })
                .collect();

            let (mean, standard_deviation) = mean_and_deviation(&counts);
            info!(vertex_count = n, p, mean, standard_deviation, "component sweep point");

            ret.push(ComponentStats {
                vertex_count: n,
                probability: p,
                mean,
                standard_deviation,
            });
        }
    }

    Ok(ret)
}

/// For every `(n, p)` of the sweep, analyses one graph and reports the
/// per-component averages of MST weight and diameter.
///
/// `sample_size` is not used.
pub fn mst_sweep<R: Rng + ?Sized>(config: &SweepConfig, rng: &mut R) -> Result<Vec<MstSweepPoint>> {
    let probabilities = config.probabilities()?;
    let mut ret = Vec::with_capacity(config.vertex_counts.len() * probabilities.len());

    for &n in &config.vertex_counts {
        for &p in &probabilities {
            let report = analyze(&RandomGraph::with_rng(n, p, rng));
            let point = MstSweepPoint {
                vertex_count: n,
                probability: p,
                component_count: report.component_count,
                average_mst_weight: report.average_mst_weight(),
                average_diameter: report.average_diameter(),
            };
            info!(
                vertex_count = n,
                p,
                average_mst_weight = point.average_mst_weight,
                average_diameter = point.average_diameter,
                "mst sweep point"
            );
            ret.push(point);
        }
    }

    Ok(ret)
}

fn mean_and_deviation(samples: &[usize]) -> (f64, f64) {
    if samples.is_empty() {
        return (0.0, 0.0);
    }
    let len = samples.len() as f64;
    let mean = samples.iter().sum::<usize>() as f64 / len;
    let variance = samples
        .iter()
        .map(|&x| (x as f64 - mean).powi(2))
        .sum::<f64>()
        / len;
    (mean, variance.sqrt())
}
