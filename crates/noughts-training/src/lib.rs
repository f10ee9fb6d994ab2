//! Self-play training by (1+λ) hill climbing.
//!
//! Every generation the [`Trainer`] pits its current network and `λ` mutated
//! copies against the scripted opponents on a shared set of seeded games. The
//! best scorer becomes the new current network. Exact ties keep the parent.
//!
//! # Modules
//!
//! - [`seeds`] - distinct game seeds shared by a generation
//! - [`evaluation`] - playing and scoring candidates, winner selection
//! - [`record`] - the per-generation fitness history
//! - [`trainer`] - the generation loop
//!
//! # Example
//!
//! ```
//! use noughts_network::{Network, NetworkConfig};
//! use noughts_training::Trainer;
//! use rand::SeedableRng as _;
//!
//! let mut rng = rand_pcg::Pcg32::seed_from_u64(42);
//! let network = Network::new(&NetworkConfig::default(), &mut rng)?;
//! let mut trainer = Trainer::with_seed(network, 42);
//!
//! let report = trainer.run_generation(10, 4);
//! assert_eq!(report.pool_size, 5);
//! assert_eq!(trainer.generation(), 1);
//! assert_eq!(trainer.record().len(), 1);
//! # Ok::<(), noughts_network::NetworkError>(())
//! ```

pub use self::{evaluation::*, record::*, seeds::*, trainer::*};

pub mod evaluation;
pub mod record;
pub mod seeds;
pub mod trainer;
