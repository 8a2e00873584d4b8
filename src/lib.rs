//! # war-engine
//!
//! An engine for the card game War: two 26-card hands played down through
//! repeated single-card comparisons, with the recursive "war" tie-break
//! protocol, until one side holds every card.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no menus, rendering, or animation. Presentation
//!    layers drive the engine through its public operations and never
//!    reimplement round logic.
//!
//! 2. **Exclusive ownership**: each `WarGame` owns its two `Hand`s; every
//!    card transfer is an explicit draw or append through `&mut` access.
//!    No aliasing, no locking, nothing suspends mid-round.
//!
//! 3. **Exhaustion is a value**: drawing from an empty hand is `None`,
//!    consumed internally to drive elimination and win detection. Ordinary
//!    gameplay never produces an error.
//!
//! 4. **Deterministic by seed**: all randomness flows through an injected
//!    [`GameRng`], so whole games replay from a single `u64`.
//!
//! ## Modules
//!
//! - `cards`: the card value type, the rank/suit catalog, the draw pile
//! - `core`: players, hands, RNG
//! - `rules`: the round engine and the `WarGame` state machine
//! - `save`: the snapshot codec (JSON capture/restore)
//!
//! ## Example
//!
//! ```
//! use war_engine::{GameRng, WarGame};
//!
//! let mut game = WarGame::new("Alice", true, &mut GameRng::new(42));
//! assert_eq!(game.total_cards(), 52);
//!
//! let result = game.play_round().expect("game just started");
//! assert_eq!(game.round_number(), 1);
//! assert!(result.cards_moved() >= 2 || game.is_game_over());
//! ```

pub mod cards;
pub mod core;
pub mod rules;
pub mod save;

// Re-export commonly used types
pub use crate::cards::{Card, CardCatalog, CatalogError, Deck, STANDARD_DECK_SIZE};
pub use crate::core::{GameRng, Hand, Player, PlayerId};
pub use crate::rules::{resolve_round, RoundOutcome, RoundResult, TablePile, WarGame};
pub use crate::save::{GameSnapshot, SaveError, SavedCard};
