//! Card system: the card value type, the catalog, and the draw pile.
//!
//! ## Key Types
//!
//! - `Card`: immutable face + rank value
//! - `CardCatalog`: rank/suit configuration (built-in standard table or
//!   external JSON), full-deck construction with fail-fast validation
//! - `Deck`: ordered draw pile with injectable shuffling

pub mod card;
pub mod catalog;
pub mod deck;

pub use card::Card;
pub use catalog::{CardCatalog, CatalogError, STANDARD_DECK_SIZE};
pub use deck::Deck;
