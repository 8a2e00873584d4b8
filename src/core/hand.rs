//! Per-player card queue.
//!
//! A `Hand` is an ordered queue: play comes off the front, winnings go on
//! the back in the order they sat on the table. Backed by `im::Vector` so
//! both ends are cheap and the snapshot codec can walk a hand without
//! copying it first.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// An ordered queue of cards owned by one player.
///
/// ## Example
///
/// ```
/// use war_engine::cards::Card;
/// use war_engine::core::Hand;
///
/// let mut hand = Hand::with_cards([Card::new("2 of Hearts", 2)]);
/// hand.add(Card::new("Ace of Spades", 14));
///
/// assert_eq!(hand.size(), 2);
/// assert_eq!(hand.draw().unwrap().value(), 2); // front first
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand holding `cards` in front-to-back order.
    #[must_use]
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Remove and return the front card, or `None` when the hand is empty.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Append one card to the back.
    pub fn add(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append cards to the back, preserving the given order.
    pub fn add_many(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_back(card);
        }
    }

    /// Whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards currently held.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Iterate front-to-back (draw order).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(value: i64) -> Card {
        Card::new(format!("{} of Hearts", value), value)
    }

    #[test]
    fn test_draw_from_front() {
        let mut hand = Hand::with_cards([card(2), card(3), card(4)]);

        assert_eq!(hand.draw(), Some(card(2)));
        assert_eq!(hand.draw(), Some(card(3)));
        assert_eq!(hand.size(), 1);
    }

    #[test]
    fn test_empty_draw_is_none() {
        let mut hand = Hand::new();

        assert!(hand.is_empty());
        assert_eq!(hand.draw(), None);
        assert_eq!(hand.draw(), None);
    }

    #[test]
    fn test_add_appends_to_back() {
        let mut hand = Hand::with_cards([card(2)]);
        hand.add(card(9));

        assert_eq!(hand.draw(), Some(card(2)));
        assert_eq!(hand.draw(), Some(card(9)));
    }

    #[test]
    fn test_add_many_preserves_order() {
        let mut hand = Hand::new();
        hand.add_many([card(5), card(6), card(7)]);

        let order: Vec<i64> = hand.iter().map(Card::value).collect();
        assert_eq!(order, vec![5, 6, 7]);
    }

    #[test]
    fn test_iter_matches_draw_order() {
        let mut hand = Hand::with_cards([card(10), card(11), card(12)]);
        let seen: Vec<Card> = hand.iter().cloned().collect();

        let mut drawn = Vec::new();
        while let Some(c) = hand.draw() {
            drawn.push(c);
        }

        assert_eq!(seen, drawn);
    }

    #[test]
    fn test_hand_serde_roundtrip() {
        let hand = Hand::with_cards([card(2), card(14)]);
        let json = serde_json::to_string(&hand).unwrap();
        let back: Hand = serde_json::from_str(&json).unwrap();
        assert_eq!(hand, back);
    }
}
