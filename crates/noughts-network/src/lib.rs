//! Fixed-topology feedforward network that plays tic-tac-toe.
//!
//! The network reads the board as 9 inputs (X = +1, O = −1, empty = 0),
//! passes them through any number of hidden layers and produces 9 outputs,
//! one preference per cell. The move played is the most preferred empty
//! cell.
//!
//! Networks are not trained by gradient descent. Instead [`Network::mutate`]
//! produces a perturbed copy whose step size is governed by the network's own
//! `mutability`, and the training crate keeps whichever copy plays best.
//!
//! # Modules
//!
//! - [`config`] - topology and mutation bounds
//! - [`node`] - a single neuron and the scaled sigmoid activation
//! - [`network`] - evaluation, mutation and move selection
//!
//! # Example
//!
//! ```
//! use noughts_engine::Board;
//! use noughts_network::{Network, NetworkConfig};
//! use rand::SeedableRng as _;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(1);
//! let network = Network::new(&NetworkConfig::default(), &mut rng)?;
//!
//! let mut board = Board::new();
//! let pos = network.select_move(&mut board).unwrap();
//! assert!(!board.cell(pos).is_empty());
//!
//! let child = network.mutate(&mut rng);
//! assert_eq!(child.layer_sizes(), network.layer_sizes());
//! # Ok::<(), noughts_network::NetworkError>(())
//! ```

pub use self::{config::*, error::*, network::*, node::*};

pub mod config;
mod error;
pub mod network;
pub mod node;
