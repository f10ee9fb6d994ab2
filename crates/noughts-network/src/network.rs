//! Feedforward network: evaluation, mutation and move selection.

use noughts_engine::{Board, CELL_COUNT, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    NetworkError,
    config::{MutationParams, NetworkConfig, validate_layer_sizes},
    node::Node,
};

/// A fixed-topology feedforward network with bounded parameters.
///
/// Layer 0 is a pure input buffer with one weightless node per board cell.
/// Every later node computes `scaled_sigmoid(bias + Σ wᵢ · prevᵢ)` over the
/// whole previous layer. The last layer holds one move preference per cell,
/// addressed by [`Position::input_index`].
///
/// Networks have value semantics: [`Network::mutate`] always allocates a full
/// new network and never touches the parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetworkParts")]
pub struct Network {
    mutation: MutationParams,
    layers: Vec<Vec<Node>>,
    mutability: f64,
}

/// Unvalidated network fields, checked on deserialization.
#[derive(Deserialize)]
struct NetworkParts {
    mutation: MutationParams,
    layers: Vec<Vec<Node>>,
    mutability: f64,
}

impl TryFrom<NetworkParts> for Network {
    type Error = NetworkError;

    fn try_from(parts: NetworkParts) -> Result<Self, Self::Error> {
        Network::from_parts(parts.mutation, parts.layers, parts.mutability)
    }
}

impl Network {
    /// Creates a network with random parameters.
    ///
    /// Every bias and weight is drawn uniformly from `±weight_bound` and the
    /// mutability from `±mutability_bound`.
    pub fn new<R>(config: &NetworkConfig, rng: &mut R) -> Result<Self, NetworkError>
    where
        R: Rng + ?Sized,
    {
        config.validate()?;
        let bound = config.mutation.weight_bound;
        let mut layers = Vec::with_capacity(config.layers.len());
        let mut incoming = 0;
        for &size in &config.layers {
            layers.push((0..size).map(|_| Node::random(rng, incoming, bound)).collect());
            incoming = size;
        }
        let mutability_bound = config.mutation.mutability_bound;
        let mutability = rng.random_range(-mutability_bound..=mutability_bound);
        Ok(Self {
            mutation: config.mutation,
            layers,
            mutability,
        })
    }

    /// Like [`Self::new`], drawing from the thread-local generator.
    pub fn random(config: &NetworkConfig) -> Result<Self, NetworkError> {
        Self::new(config, &mut rand::rng())
    }

    /// Creates a network whose every bias and weight equals `value`.
    ///
    /// Mostly useful as a deterministic player in tests and experiments.
    pub fn filled(
        config: &NetworkConfig,
        value: f64,
        mutability: f64,
    ) -> Result<Self, NetworkError> {
        config.validate()?;
        let mut layers = Vec::with_capacity(config.layers.len());
        let mut incoming = 0;
        for &size in &config.layers {
            layers.push(
                (0..size)
                    .map(|_| Node::new(value, vec![value; incoming]))
                    .collect(),
            );
            incoming = size;
        }
        Self::from_parts(config.mutation, layers, mutability)
    }

    /// Assembles a network from explicit nodes, checking shape and bounds.
    pub fn from_parts(
        mutation: MutationParams,
        layers: Vec<Vec<Node>>,
        mutability: f64,
    ) -> Result<Self, NetworkError> {
        mutation.validate()?;
        let sizes: Vec<usize> = layers.iter().map(Vec::len).collect();
        validate_layer_sizes(&sizes)?;

        let mut incoming = 0;
        for (layer_index, layer) in layers.iter().enumerate() {
            for (node_index, node) in layer.iter().enumerate() {
                if node.weights().len() != incoming {
                    return Err(NetworkError::WeightCount {
                        layer: layer_index,
                        node: node_index,
                        expected: incoming,
                        actual: node.weights().len(),
                    });
                }
                if !node.is_within(mutation.weight_bound) {
                    return Err(NetworkError::ParameterOutOfBounds {
                        layer: layer_index,
                        node: node_index,
                        bound: mutation.weight_bound,
                    });
                }
            }
            incoming = layer.len();
        }

        if !(-mutation.mutability_bound..=mutation.mutability_bound).contains(&mutability) {
            return Err(NetworkError::MutabilityOutOfBounds {
                value: mutability,
                bound: mutation.mutability_bound,
            });
        }

        Ok(Self {
            mutation,
            layers,
            mutability,
        })
    }

    #[must_use]
    pub fn layers(&self) -> &[Vec<Node>] {
        &self.layers
    }

    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    #[must_use]
    pub fn mutability(&self) -> f64 {
        self.mutability
    }

    #[must_use]
    pub fn mutation_params(&self) -> MutationParams {
        self.mutation
    }

    /// Returns the configuration this network satisfies.
    #[must_use]
    pub fn config(&self) -> NetworkConfig {
        NetworkConfig {
            layers: self.layer_sizes(),
            mutation: self.mutation,
        }
    }

    /// Runs the network on `inputs` and returns the output layer values.
    ///
    /// Pure: node values stored for visualization are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` is not as wide as the input layer.
    #[must_use]
    pub fn evaluate(&self, inputs: &[f64]) -> Vec<f64> {
        assert_eq!(inputs.len(), self.layers[0].len());
        let mut values = inputs.to_vec();
        for layer in &self.layers[1..] {
            values = layer.iter().map(|node| node.compute_value(&values)).collect();
        }
        values
    }

    /// Like [`Self::evaluate`], but records every node's value so it can be
    /// read back through [`Node::value`].
    ///
    /// # Panics
    ///
    /// Panics if `inputs` is not as wide as the input layer.
    pub fn activate(&mut self, inputs: &[f64]) -> Vec<f64> {
        assert_eq!(inputs.len(), self.layers[0].len());
        for (node, value) in self.layers[0].iter_mut().zip(inputs) {
            node.set_value(*value);
        }
        let mut values = inputs.to_vec();
        for layer in &mut self.layers[1..] {
            let next: Vec<f64> = layer.iter().map(|node| node.compute_value(&values)).collect();
            for (node, value) in layer.iter_mut().zip(&next) {
                node.set_value(*value);
            }
            values = next;
        }
        values
    }

    /// Returns a mutated deep copy of this network.
    ///
    /// The child's mutability is
    /// `clamp(mutability + U(-0.5, 0.5) * mutability_step, ±mutability_bound)`,
    /// and every weight and bias becomes
    /// `clamp(old + U(-0.5, 0.5) * child_mutability, ±weight_bound)`.
    /// Topology and bounds are copied unchanged.
    #[must_use]
    pub fn mutate<R>(&self, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let MutationParams {
            weight_bound,
            mutability_bound,
            mutability_step,
        } = self.mutation;
        let mutability = (self.mutability + rng.random_range(-0.5..0.5) * mutability_step)
            .clamp(-mutability_bound, mutability_bound);
        let layers = self
            .layers
            .iter()
            .map(|layer| {
                layer
                    .iter()
                    .map(|node| node.mutated(rng, mutability, weight_bound))
                    .collect()
            })
            .collect();
        Self {
            mutation: self.mutation,
            layers,
            mutability,
        }
    }

    /// Chooses the empty cell with the highest output preference.
    ///
    /// Returns `None` if the game is over.
    #[must_use]
    pub fn choose_move(&self, board: &Board) -> Option<Position> {
        if board.is_terminal() {
            return None;
        }
        let outputs = self.evaluate(&board.input_vector());
        preference_order(&outputs)
            .into_iter()
            .map(Position::from_input_index)
            .find(|pos| board.cell(*pos).is_empty())
    }

    /// Chooses a move with [`Self::choose_move`] and plays it.
    pub fn select_move(&self, board: &mut Board) -> Option<Position> {
        let pos = self.choose_move(board)?;
        board.apply_move(pos);
        Some(pos)
    }
}

/// Ranks output indices by descending value.
///
/// Equal values keep their index order, so the lower index wins a tie.
#[must_use]
pub fn preference_order(outputs: &[f64]) -> Vec<usize> {
    debug_assert_eq!(outputs.len(), CELL_COUNT);
    let mut order: Vec<usize> = (0..outputs.len()).collect();
    order.sort_by(|&a, &b| outputs[b].total_cmp(&outputs[a]));
    order
}
