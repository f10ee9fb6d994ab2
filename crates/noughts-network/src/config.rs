//! Network topology and mutation bounds.

use noughts_engine::CELL_COUNT;
use serde::{Deserialize, Serialize};

use crate::NetworkError;

/// Default hidden-layer topology: input, one hidden layer, output.
pub const DEFAULT_LAYERS: [usize; 3] = [CELL_COUNT, CELL_COUNT, CELL_COUNT];

/// Bounds and step sizes used by [`Network::mutate`](crate::Network::mutate).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationParams {
    /// Every bias and weight stays within `±weight_bound`.
    pub weight_bound: f64,
    /// Mutability stays within `±mutability_bound`.
    pub mutability_bound: f64,
    /// Mutability drifts by `U(-0.5, 0.5) * mutability_step` per mutation.
    pub mutability_step: f64,
}

impl Default for MutationParams {
    fn default() -> Self {
        Self {
            weight_bound: 1.0,
            mutability_bound: 2.0,
            mutability_step: 0.1,
        }
    }
}

impl MutationParams {
    pub fn validate(&self) -> Result<(), NetworkError> {
        for (name, value) in [
            ("weight bound", self.weight_bound),
            ("mutability bound", self.mutability_bound),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(NetworkError::InvalidBound { name, value });
            }
        }
        if !(self.mutability_step.is_finite() && self.mutability_step >= 0.0) {
            return Err(NetworkError::InvalidMutabilityStep {
                value: self.mutability_step,
            });
        }
        Ok(())
    }
}

/// Network topology plus mutation parameters.
///
/// The first and last layers must both have one node per board cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Node count per layer; first is the input layer, last is the output layer.
    pub layers: Vec<usize>,
    #[serde(flatten)]
    pub mutation: MutationParams,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS.to_vec(),
            mutation: MutationParams::default(),
        }
    }
}

impl NetworkConfig {
    #[must_use]
    pub fn with_layers(layers: Vec<usize>) -> Self {
        Self {
            layers,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        validate_layer_sizes(&self.layers)?;
        self.mutation.validate()
    }
}

pub(crate) fn validate_layer_sizes(layers: &[usize]) -> Result<(), NetworkError> {
    let (Some(&input), Some(&output)) = (layers.first(), layers.last()) else {
        return Err(NetworkError::TooFewLayers { count: 0 });
    };
    if layers.len() < 2 {
        return Err(NetworkError::TooFewLayers {
            count: layers.len(),
        });
    }
    if input != CELL_COUNT {
        return Err(NetworkError::InputLayerSize {
            expected: CELL_COUNT,
            actual: input,
        });
    }
    if output != CELL_COUNT {
        return Err(NetworkError::OutputLayerSize {
            expected: CELL_COUNT,
            actual: output,
        });
    }
    if let Some(layer) = layers.iter().position(|size| *size == 0) {
        return Err(NetworkError::EmptyLayer { layer });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = NetworkConfig::default();
        assert_eq!(config.layers, vec![9, 9, 9]);
        assert_eq!(config.mutation.mutability_step, 0.1);
        config.validate().unwrap();
    }

    #[test]
    fn test_layer_count() {
        assert_eq!(
            NetworkConfig::with_layers(vec![]).validate(),
            Err(NetworkError::TooFewLayers { count: 0 })
        );
        assert_eq!(
            NetworkConfig::with_layers(vec![9]).validate(),
            Err(NetworkError::TooFewLayers { count: 1 })
        );
        NetworkConfig::with_layers(vec![9, 9]).validate().unwrap();
        NetworkConfig::with_layers(vec![9, 16, 4, 9]).validate().unwrap();
    }

    #[test]
    fn test_input_and_output_width() {
        assert_eq!(
            NetworkConfig::with_layers(vec![8, 9, 9]).validate(),
            Err(NetworkError::InputLayerSize {
                expected: 9,
                actual: 8
            })
        );
        assert_eq!(
            NetworkConfig::with_layers(vec![9, 9, 10]).validate(),
            Err(NetworkError::OutputLayerSize {
                expected: 9,
                actual: 10
            })
        );
        assert_eq!(
            NetworkConfig::with_layers(vec![9, 0, 9]).validate(),
            Err(NetworkError::EmptyLayer { layer: 1 })
        );
    }

    #[test]
    fn test_mutation_bounds() {
        let mut config = NetworkConfig::default();
        config.mutation.weight_bound = 0.0;
        assert!(matches!(
            config.validate(),
            Err(NetworkError::InvalidBound { .. })
        ));

        let mut config = NetworkConfig::default();
        config.mutation.mutability_bound = f64::INFINITY;
        assert!(config.validate().is_err());

        let mut config = NetworkConfig::default();
        config.mutation.mutability_step = -0.1;
        assert!(matches!(
            config.validate(),
            Err(NetworkError::InvalidMutabilityStep { .. })
        ));

        let mut config = NetworkConfig::default();
        config.mutation.mutability_step = 0.0;
        config.validate().unwrap();
    }

    #[test]
    fn test_error_message() {
        let err = NetworkConfig::with_layers(vec![9, 9, 3])
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "output layer must have 9 nodes, got 3");
    }
}
