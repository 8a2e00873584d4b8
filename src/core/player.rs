//! Player identity and card ownership.
//!
//! War is strictly two-player, so `PlayerId` is a two-variant enum rather
//! than a numeric index: every "which side" answer is total, and
//! `opponent()` cannot go out of range.
//!
//! A `Player` exclusively owns its `Hand`. All card movement goes through
//! `play_card` (front draw) and `add_card`/`collect` (back append); no
//! other code path can touch a hand it does not own.

use serde::{Deserialize, Serialize};

use super::hand::Hand;
use crate::cards::Card;

/// Which side of the table a player sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1-based player number for display.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A player: identity plus exclusive ownership of one hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    id: PlayerId,
    is_computer: bool,
    hand: Hand,
}

impl Player {
    /// Name given to a computer opponent. Snapshots do not carry the
    /// computer flag, so restore recovers it from this name.
    pub const COMPUTER_NAME: &'static str = "Computer";

    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, id: PlayerId, is_computer: bool) -> Self {
        Self::with_hand(name, id, is_computer, Hand::new())
    }

    /// Create a player holding an existing hand (snapshot restore).
    #[must_use]
    pub fn with_hand(name: impl Into<String>, id: PlayerId, is_computer: bool, hand: Hand) -> Self {
        Self {
            name: name.into(),
            id,
            is_computer,
            hand,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Which side this player sits on.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Whether this is the computer opponent. The computer has no
    /// strategy; it plays its top card like anyone else.
    #[must_use]
    pub const fn is_computer(&self) -> bool {
        self.is_computer
    }

    /// The player's hand, front-to-back.
    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Play the top card, or `None` when the hand is empty.
    pub fn play_card(&mut self) -> Option<Card> {
        self.hand.draw()
    }

    /// Add a single card to the bottom of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
    }

    /// Add won cards to the bottom of the hand in table order.
    pub fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.add_many(cards);
    }

    /// Cards currently held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.size()
    }

    /// Whether the player can still produce a card.
    #[must_use]
    pub fn has_cards(&self) -> bool {
        !self.hand.is_empty()
    }
}
