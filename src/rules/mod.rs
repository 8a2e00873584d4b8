//! Game rules: the round engine and the game state built on top of it.
//!
//! ## Key Types
//!
//! - `resolve_round` / `RoundResult`: the canonical round-resolution path
//! - `WarGame`: two players, a round counter, and terminal status

pub mod game;
pub mod round;

pub use game::WarGame;
pub use round::{resolve_round, RoundOutcome, RoundResult, TablePile};
