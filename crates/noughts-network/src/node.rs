//! A single neuron.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Logistic sigmoid rescaled to the open interval (−1, 1).
///
/// `scaled_sigmoid(x) = 2 / (1 + e^-x) - 1`
#[must_use]
pub fn scaled_sigmoid(x: f64) -> f64 {
    2.0 / (1.0 + (-x).exp()) - 1.0
}

/// A neuron with a bias and one weight per node of the previous layer.
///
/// Input-layer nodes have no weights; their value is set directly from the
/// board encoding. `value` holds the activation from the most recent
/// [`Network::activate`](crate::Network::activate) call and is not serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    bias: f64,
    weights: Vec<f64>,
    #[serde(skip)]
    value: f64,
}

impl Node {
    #[must_use]
    pub fn new(bias: f64, weights: Vec<f64>) -> Self {
        Self {
            bias,
            weights,
            value: bias,
        }
    }

    /// Creates a node whose bias and `incoming` weights are drawn uniformly
    /// from `[-bound, bound]`.
    pub fn random<R>(rng: &mut R, incoming: usize, bound: f64) -> Self
    where
        R: Rng + ?Sized,
    {
        let weights = (0..incoming)
            .map(|_| rng.random_range(-bound..=bound))
            .collect();
        let bias = rng.random_range(-bound..=bound);
        Self::new(bias, weights)
    }

    #[must_use]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the weight applied to node `i` of the previous layer.
    #[must_use]
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Returns the activation recorded by the last `activate` call.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub(crate) fn is_within(&self, bound: f64) -> bool {
        iter_params(self).all(|p| (-bound..=bound).contains(&p))
    }

    /// Computes `scaled_sigmoid(bias + Σ weightᵢ · inputᵢ)`.
    ///
    /// # Panics
    ///
    /// Panics if `inputs` does not have one entry per weight.
    #[must_use]
    pub fn compute_value(&self, inputs: &[f64]) -> f64 {
        assert_eq!(inputs.len(), self.weights.len());
        let total = self.bias
            + self
                .weights
                .iter()
                .zip(inputs)
                .map(|(w, x)| w * x)
                .sum::<f64>();
        scaled_sigmoid(total)
    }

    /// Returns a perturbed copy.
    ///
    /// Each weight, then the bias, becomes
    /// `clamp(old + U(-0.5, 0.5) * mutability, -bound, bound)`.
    pub(crate) fn mutated<R>(&self, rng: &mut R, mutability: f64, bound: f64) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut perturb =
            |v: f64| (v + rng.random_range(-0.5..0.5) * mutability).clamp(-bound, bound);
        let weights = self.weights.iter().map(|w| perturb(*w)).collect();
        let bias = perturb(self.bias);
        Self::new(bias, weights)
    }
}

fn iter_params(node: &Node) -> impl Iterator<Item = f64> + '_ {
    std::iter::once(node.bias).chain(node.weights.iter().copied())
}
