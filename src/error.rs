use thiserror::Error;

/// Result type for fallible graph builders.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised when a graph or a sweep is assembled from caller input.
///
/// Generation and analysis themselves never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("duplicate edge between {0} and {1}")]
    DuplicateEdge(usize, usize),

    #[error("edge ({u}, {v}) has non-finite weight {weight}")]
    InvalidWeight { u: usize, v: usize, weight: f64 },

    #[error("probability increment must be positive and finite, got {0}")]
    InvalidIncrement(f64),

    #[error("probabilities from {start} to {end} in steps of {increment} never reach the end")]
    InvalidProbabilityRange { start: f64, end: f64, increment: f64 },

    #[error("sample size must be at least 1")]
    EmptySample,

    #[error("sweep needs at least one vertex count")]
    NoGraphSizes,
}
