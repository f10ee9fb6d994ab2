//! Game simulation on top of the core board.
//!
//! - [`GameSeed`] - 32-bit seed for a deterministic random source
//! - [`Opponent`] - scripted move policies (random, smart)
//! - [`SeededGame`] - a board plus its own seeded random source
//!
//! Every simulated game owns its board and random source, so games never
//! share mutable state and replaying a seed replays the opponent's moves.

pub use self::{game_seed::*, opponent::*, seeded_game::*};

mod game_seed;
mod opponent;
mod seeded_game;
