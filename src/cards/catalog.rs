//! Card catalog: rank/suit configuration and full-deck construction.
//!
//! The catalog is the external static table the engine consumes:
//! a list of suits and a rank-name → value mapping. `standard()` is the
//! built-in 52-card configuration; custom tables load from the same JSON
//! shape the config file uses:
//!
//! ```json
//! { "suits": ["Hearts"], "ranks": { "Ace": 14 } }
//! ```
//!
//! Construction fails fast: a catalog that cannot produce a full, valid
//! deck is rejected before any game state exists.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::card::Card;

/// Cards in a standard deck.
pub const STANDARD_DECK_SIZE: usize = 52;

/// Catalog validation and loading failures.
///
/// All of these are fatal at startup: the engine refuses to run with a
/// partial or ambiguous deck.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog defines no suits.
    #[error("catalog defines no suits")]
    NoSuits,

    /// The catalog defines no ranks.
    #[error("catalog defines no ranks")]
    NoRanks,

    /// A suit appears more than once, which would duplicate cards.
    #[error("duplicate suit {0:?} in catalog")]
    DuplicateSuit(String),

    /// The suits × ranks grid does not produce a full deck.
    #[error("catalog produces {actual} cards, expected {expected}")]
    WrongDeckSize { expected: usize, actual: usize },

    /// The config file could not be read.
    #[error("failed to read catalog config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not the expected JSON shape.
    #[error("malformed catalog config: {0}")]
    Format(#[from] serde_json::Error),
}

/// Rank/suit configuration for building a deck.
///
/// ## Example
///
/// ```
/// use war_engine::cards::CardCatalog;
///
/// let deck = CardCatalog::standard().build_full_deck().unwrap();
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardCatalog {
    suits: Vec<String>,
    ranks: FxHashMap<String, i64>,
}

impl CardCatalog {
    /// The standard 52-card configuration: ranks 2..10, Jack=11, Queen=12,
    /// King=13, Ace=14 across four suits.
    #[must_use]
    pub fn standard() -> Self {
        let suits = ["Hearts", "Diamonds", "Clubs", "Spades"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut ranks = FxHashMap::default();
        for value in 2..=10i64 {
            ranks.insert(value.to_string(), value);
        }
        ranks.insert("Jack".to_string(), 11);
        ranks.insert("Queen".to_string(), 12);
        ranks.insert("King".to_string(), 13);
        ranks.insert("Ace".to_string(), 14);

        Self { suits, ranks }
    }

    /// Parse a catalog from its JSON configuration shape.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The configured suits, in declaration order.
    #[must_use]
    pub fn suits(&self) -> &[String] {
        &self.suits
    }

    /// The configured rank-name → value table.
    #[must_use]
    pub fn ranks(&self) -> &FxHashMap<String, i64> {
        &self.ranks
    }

    /// Build the full deck in a stable order: suit-major over the declared
    /// suit order, ranks ascending by value (ties broken by name).
    ///
    /// Pure apart from validation; shuffling is the [`Deck`]'s job.
    ///
    /// [`Deck`]: super::Deck
    pub fn build_full_deck(&self) -> Result<Vec<Card>, CatalogError> {
        self.validate()?;

        let mut ordered_ranks: Vec<(&String, i64)> =
            self.ranks.iter().map(|(name, &value)| (name, value)).collect();
        ordered_ranks.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let mut cards = Vec::with_capacity(self.suits.len() * ordered_ranks.len());
        for suit in &self.suits {
            for (name, value) in &ordered_ranks {
                cards.push(Card::new(format!("{} of {}", name, suit), *value));
            }
        }

        Ok(cards)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.suits.is_empty() {
            return Err(CatalogError::NoSuits);
        }
        if self.ranks.is_empty() {
            return Err(CatalogError::NoRanks);
        }

        for (i, suit) in self.suits.iter().enumerate() {
            if self.suits[..i].contains(suit) {
                return Err(CatalogError::DuplicateSuit(suit.clone()));
            }
        }

        let total = self.suits.len() * self.ranks.len();
        if total != STANDARD_DECK_SIZE {
            return Err(CatalogError::WrongDeckSize {
                expected: STANDARD_DECK_SIZE,
                actual: total,
            });
        }

        Ok(())
    }
}
