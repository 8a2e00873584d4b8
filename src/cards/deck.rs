//! The draw pile.
//!
//! A `Deck` is an ordered pile of cards, built from a catalog and shuffled
//! through an injected [`GameRng`] so games are reproducible from a seed.
//! The top of the deck is the end of the backing vector; all draws come
//! off the top and return `None` once the pile is exhausted.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::catalog::{CardCatalog, CatalogError};
use crate::core::{GameRng, Hand};

/// An ordered pile of cards to draw from.
///
/// ## Example
///
/// ```
/// use war_engine::cards::{CardCatalog, Deck};
/// use war_engine::core::GameRng;
///
/// let mut deck = Deck::from_catalog(&CardCatalog::standard()).unwrap();
/// deck.shuffle(&mut GameRng::new(42));
///
/// let card = deck.draw().unwrap();
/// assert_eq!(deck.size(), 51);
/// assert!((2..=14).contains(&card.value()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Top of the deck is the end of the vec.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a deck from an ordered card sequence.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Build the full deck a catalog describes.
    pub fn from_catalog(catalog: &CardCatalog) -> Result<Self, CatalogError> {
        Ok(Self::new(catalog.build_full_deck()?))
    }

    /// Shuffle the pile in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` when the pile is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Cards remaining in the pile.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal the whole pile one card at a time, alternating between the
    /// two hands starting with `first`. An odd pile leaves `first` with
    /// one extra card.
    pub fn deal_all(&mut self, first: &mut Hand, second: &mut Hand) {
        let mut to_first = true;
        while let Some(card) = self.draw() {
            if to_first {
                first.add(card);
            } else {
                second.add(card);
            }
            to_first = !to_first;
        }
    }
}
