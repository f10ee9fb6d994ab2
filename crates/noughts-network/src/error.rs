/// Invalid network configuration or shape.
///
/// Raised when a network is built, never while it is evaluated or mutated.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum NetworkError {
    #[display("network needs at least 2 layers, got {count}")]
    TooFewLayers { count: usize },
    #[display("input layer must have {expected} nodes, got {actual}")]
    InputLayerSize { expected: usize, actual: usize },
    #[display("output layer must have {expected} nodes, got {actual}")]
    OutputLayerSize { expected: usize, actual: usize },
    #[display("layer {layer} has no nodes")]
    EmptyLayer { layer: usize },
    #[display("{name} must be positive and finite, got {value}")]
    InvalidBound { name: &'static str, value: f64 },
    #[display("mutability step must be non-negative and finite, got {value}")]
    InvalidMutabilityStep { value: f64 },
    #[display("node {node} of layer {layer} has {actual} weights, expected {expected}")]
    WeightCount {
        layer: usize,
        node: usize,
        expected: usize,
        actual: usize,
    },
    #[display("node {node} of layer {layer} has a bias or weight outside ±{bound}")]
    ParameterOutOfBounds { layer: usize, node: usize, bound: f64 },
    #[display("mutability {value} is outside ±{bound}")]
    MutabilityOutOfBounds { value: f64, bound: f64 },
}
