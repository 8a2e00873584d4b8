//! Core engine types: players, hands, RNG.
//!
//! These are the building blocks the rules layer moves cards between.
//! Nothing here knows how a round of War is resolved.

pub mod hand;
pub mod player;
pub mod rng;

pub use hand::Hand;
pub use player::{Player, PlayerId};
pub use rng::GameRng;
