//! Tic-tac-toe rules and scripted opponents.
//!
//! This crate holds everything needed to simulate a game deterministically:
//!
//! - [`Board`] - 3×3 game state machine (cells, turn, outcome, move legality)
//! - [`Opponent`] - scripted policies used as fitness oracles during training
//! - [`SeededGame`] - a fresh board paired with a seeded random source
//! - [`GameSeed`] - 32-bit seed for reproducible games
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameOutcome, GameSeed, Opponent, SeededGame};
//!
//! let mut game = SeededGame::with_seed(GameSeed::new(42));
//! while !game.board().is_terminal() {
//!     game.play_opponent(Opponent::Smart);
//! }
//! assert_ne!(game.board().outcome(), GameOutcome::InProgress);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;
