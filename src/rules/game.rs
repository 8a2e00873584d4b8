//! Game state: players, round counter, terminal status.
//!
//! `WarGame` owns both players and is the single path that advances round
//! state. Construction performs the whole setup (players, shuffle, deal),
//! so there is no "not started" state to misuse; a live game is either in
//! progress or over.

use std::path::Path;

use crate::cards::{CardCatalog, CatalogError, Deck};
use crate::core::{GameRng, Player, PlayerId};
use crate::save::{GameSnapshot, SaveError};

use super::round::{resolve_round, RoundOutcome, RoundResult};

/// A two-player game of War.
///
/// ## Example
///
/// ```
/// use war_engine::core::GameRng;
/// use war_engine::rules::WarGame;
///
/// let mut game = WarGame::new("Alice", true, &mut GameRng::new(42));
/// assert_eq!(game.player1().hand_size(), 26);
/// assert_eq!(game.player2().hand_size(), 26);
///
/// game.play_round();
/// assert_eq!(game.round_number(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WarGame {
    player1: Player,
    player2: Player,
    round_number: u32,
    game_over: bool,
    winner: Option<PlayerId>,
}

impl WarGame {
    /// Start a fresh game with the standard 52-card catalog: shuffle with
    /// the injected RNG, then deal the whole deck alternately starting
    /// with player 1 (26/26).
    ///
    /// Player 2 is the computer opponent when `vs_computer`, otherwise a
    /// second human named "Player 2".
    #[must_use]
    pub fn new(player1_name: impl Into<String>, vs_computer: bool, rng: &mut GameRng) -> Self {
        Self::with_catalog(&CardCatalog::standard(), player1_name, vs_computer, rng)
            .expect("the standard catalog is a valid 52-card configuration")
    }

    /// Start a fresh game from a custom catalog.
    ///
    /// Fails fast when the catalog cannot produce a valid deck.
    pub fn with_catalog(
        catalog: &CardCatalog,
        player1_name: impl Into<String>,
        vs_computer: bool,
        rng: &mut GameRng,
    ) -> Result<Self, CatalogError> {
        let mut deck = Deck::from_catalog(catalog)?;
        deck.shuffle(rng);

        let player2_name = if vs_computer {
            Player::COMPUTER_NAME
        } else {
            "Player 2"
        };
        let mut player1 = Player::new(player1_name, PlayerId::One, false);
        let mut player2 = Player::new(player2_name, PlayerId::Two, vs_computer);

        deck.deal_all(player1.hand_mut(), player2.hand_mut());
        log::info!(
            "game initialized: {} ({} cards) vs {} ({} cards)",
            player1.name(),
            player1.hand_size(),
            player2.name(),
            player2.hand_size()
        );

        Ok(Self {
            player1,
            player2,
            round_number: 0,
            game_over: false,
            winner: None,
        })
    }

    /// Resume a game from restored players and a saved round counter.
    ///
    /// A resumed game is always in progress; terminal status is
    /// recomputed by play, never loaded.
    #[must_use]
    pub fn resume(player1: Player, player2: Player, round_number: u32) -> Self {
        Self {
            player1,
            player2,
            round_number,
            game_over: false,
            winner: None,
        }
    }

    /// Play one top-level round.
    ///
    /// Returns `None` without touching anything once the game is over.
    /// Otherwise the round counter moves by exactly 1 no matter how many
    /// war levels the round contains, and an elimination ends the game in
    /// the opponent's favor.
    pub fn play_round(&mut self) -> Option<RoundResult> {
        if self.game_over {
            return None;
        }

        self.round_number += 1;

        let result = resolve_round(self.player1.hand_mut(), self.player2.hand_mut());
        match result.outcome {
            RoundOutcome::Winner(winner) => {
                log::info!(
                    "round {}: {} takes {} cards ({} war levels); {} has {}, {} has {}",
                    self.round_number,
                    self.player(winner).name(),
                    result.cards_moved(),
                    result.war_levels,
                    self.player1.name(),
                    self.player1.hand_size(),
                    self.player2.name(),
                    self.player2.hand_size()
                );
            }
            RoundOutcome::Eliminated(loser) => {
                self.end_game(loser.opponent());
            }
        }

        Some(result)
    }

    fn end_game(&mut self, winner: PlayerId) {
        self.game_over = true;
        self.winner = Some(winner);
        log::info!(
            "game over after {} rounds: {} wins",
            self.round_number,
            self.player(winner).name()
        );
    }

    /// Player 1.
    #[must_use]
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// Player 2.
    #[must_use]
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// Look up a player by side.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        match id {
            PlayerId::One => &self.player1,
            PlayerId::Two => &self.player2,
        }
    }

    /// Top-level rounds played so far.
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// Whether a winner has been decided.
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winning side, once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Total cards across both hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.player1.hand_size() + self.player2.hand_size()
    }

    /// Snapshot this game to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        GameSnapshot::capture(self).save_to_file(path)
    }

    /// Load a snapshot file and resume it as an in-progress game.
    ///
    /// On failure nothing is constructed, so any existing game the caller
    /// holds is untouched.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        Ok(GameSnapshot::load_from_file(path)?.restore())
    }
}
