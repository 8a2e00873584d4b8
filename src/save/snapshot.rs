//! The snapshot codec: a flattened, persistable view of a game.
//!
//! The wire format is a JSON record with fixed field names:
//!
//! ```json
//! {
//!   "player1Name": "Alice",
//!   "player2Name": "Computer",
//!   "player1Cards": [{ "face": "Ace of Spades", "value": 14 }],
//!   "player2Cards": [{ "face": "2 of Hearts", "value": 2 }],
//!   "gameRound": 17,
//!   "saveDate": "2026-08-07T10:52:37+02:00"
//! }
//! ```
//!
//! Hands are stored front-to-back, so the next draw after a restore
//! reproduces the saved play order. Terminal status is never persisted:
//! a restored game always resumes in progress, and `saveDate` is
//! informational only.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::Card;
use crate::core::{Hand, Player, PlayerId};
use crate::rules::WarGame;

/// Persistence failures. Always recoverable: a failed save or load
/// reports here and leaves any live game untouched.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The save file could not be read or written.
    #[error("failed to access save file: {0}")]
    Io(#[from] std::io::Error),

    /// The save data is not the expected JSON record.
    #[error("malformed save data: {0}")]
    Format(#[from] serde_json::Error),
}

/// One card as persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCard {
    pub face: String,
    pub value: i64,
}

impl SavedCard {
    fn from_card(card: &Card) -> Self {
        Self {
            face: card.face().to_string(),
            value: card.value(),
        }
    }

    fn to_card(&self) -> Card {
        Card::new(self.face.clone(), self.value)
    }
}

/// A serializable capture of a game in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub player1_name: String,
    pub player2_name: String,
    pub player1_cards: Vec<SavedCard>,
    pub player2_cards: Vec<SavedCard>,
    pub game_round: u32,
    pub save_date: String,
}

impl GameSnapshot {
    /// Flatten a game into its persistable record, hands front-to-back.
    #[must_use]
    pub fn capture(game: &WarGame) -> Self {
        Self {
            player1_name: game.player1().name().to_string(),
            player2_name: game.player2().name().to_string(),
            player1_cards: game.player1().hand().iter().map(SavedCard::from_card).collect(),
            player2_cards: game.player2().hand().iter().map(SavedCard::from_card).collect(),
            game_round: game.round_number(),
            save_date: chrono::Local::now().to_rfc3339(),
        }
    }

    /// Rebuild a game from this snapshot, in the exact saved order.
    ///
    /// The game resumes in progress: `game_over` and the winner are
    /// recomputed by play, never loaded. Player 2 is a computer opponent
    /// exactly when its saved name says so.
    #[must_use]
    pub fn restore(&self) -> WarGame {
        let hand1 = Hand::with_cards(self.player1_cards.iter().map(SavedCard::to_card));
        let hand2 = Hand::with_cards(self.player2_cards.iter().map(SavedCard::to_card));

        let player1 = Player::with_hand(self.player1_name.clone(), PlayerId::One, false, hand1);
        let player2 = Player::with_hand(
            self.player2_name.clone(),
            PlayerId::Two,
            self.player2_name == Player::COMPUTER_NAME,
            hand2,
        );

        log::info!(
            "restored game at round {}: {} ({} cards) vs {} ({} cards)",
            self.game_round,
            player1.name(),
            player1.hand_size(),
            player2.name(),
            player2.hand_size()
        );
        WarGame::resume(player1, player2, self.game_round)
    }

    /// Write this snapshot to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        log::info!("game saved to {}", path.display());
        Ok(())
    }

    /// Read a snapshot from a JSON file.
    ///
    /// Missing files and malformed records both come back as `SaveError`;
    /// nothing panics and no game state is involved until `restore`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&text)?;
        log::info!("loaded save from {}", path.display());
        Ok(snapshot)
    }
}
