//! The card value type.
//!
//! A `Card` is immutable once built: a display face like "Ace of Spades"
//! and the rank value used for comparisons. Suits exist only in the face
//! string; they never influence how two cards compare.

use serde::{Deserialize, Serialize};

/// A single playing card.
///
/// Two cards are equal iff both face and value match. Rank values run
/// 2..=14 in the standard catalog, with Ace high at 14.
///
/// ## Example
///
/// ```
/// use war_engine::cards::Card;
///
/// let ace = Card::new("Ace of Spades", 14);
/// assert_eq!(ace.value(), 14);
/// assert_eq!(ace.face(), "Ace of Spades");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    face: String,
    value: i64,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub fn new(face: impl Into<String>, value: i64) -> Self {
        Self {
            face: face.into(),
            value,
        }
    }

    /// The display face, e.g. "Queen of Hearts".
    #[must_use]
    pub fn face(&self) -> &str {
        &self.face
    }

    /// The rank value used for comparisons.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Compare by rank value alone. Suits never break ties.
    #[must_use]
    pub fn beats(&self, other: &Card) -> bool {
        self.value > other.value
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.face, self.value)
    }
}
