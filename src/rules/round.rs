//! The round engine: one full resolution cycle, wars included.
//!
//! ## Protocol
//!
//! Each side plays its top card onto a shared table-pile. The higher value
//! takes the whole pile; equal values start a war. A war level puts two
//! face-down cards from each side onto the pile, then a fresh face-up pair
//! decides it, or ties again and starts another level. A side that cannot
//! produce a card it owes is eliminated on the spot and the pile is
//! abandoned.
//!
//! War chains are unbounded in principle, so the engine runs them as a
//! loop with a level counter instead of recursing.
//!
//! Exhaustion is never an error here: every draw is checked before it is
//! demanded, and an empty hand resolves to an [`RoundOutcome::Eliminated`]
//! value.

use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{Hand, PlayerId};

/// Cards accumulated on the table during one round, in play order.
///
/// Inline capacity covers the common cases without heap allocation:
/// a plain round moves 2 cards, a one-level war 8.
pub type TablePile = SmallVec<[Card; 8]>;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    /// This side won a face-up comparison and took the table-pile.
    Winner(PlayerId),
    /// This side could not produce a card it owed; the game is over in
    /// the opponent's favor.
    Eliminated(PlayerId),
}

/// What one call to [`resolve_round`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Winner or eliminated side.
    pub outcome: RoundOutcome,

    /// Face-up comparisons in order: the opening pair, then one pair per
    /// war level. Player 1's card is always first in each pair.
    pub plays: Vec<(Card, Card)>,

    /// Cards awarded to the winner, in table order. Empty on elimination
    /// (the pile is abandoned; the game is over).
    pub cards_won: TablePile,

    /// War levels fought. 0 for a plain round.
    pub war_levels: u32,
}

impl RoundResult {
    /// The side that took the pile, if the round was decided by a
    /// comparison.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.outcome {
            RoundOutcome::Winner(id) => Some(id),
            RoundOutcome::Eliminated(_) => None,
        }
    }

    /// The side that ran out of cards, if any.
    #[must_use]
    pub fn eliminated(&self) -> Option<PlayerId> {
        match self.outcome {
            RoundOutcome::Eliminated(id) => Some(id),
            RoundOutcome::Winner(_) => None,
        }
    }

    /// How many cards changed hands.
    #[must_use]
    pub fn cards_moved(&self) -> usize {
        self.cards_won.len()
    }

    /// Whether the round escalated past the opening comparison.
    #[must_use]
    pub fn went_to_war(&self) -> bool {
        self.war_levels > 0
    }

    fn elimination(loser: PlayerId, plays: Vec<(Card, Card)>, war_levels: u32) -> Self {
        Self {
            outcome: RoundOutcome::Eliminated(loser),
            plays,
            cards_won: TablePile::new(),
            war_levels,
        }
    }
}

/// Resolve one full round between two hands.
///
/// This is the only round-resolution path in the crate; game state and any
/// presentation layer drive rounds exclusively through it.
///
/// A side whose hand is already empty is eliminated before anything is
/// drawn, player 1 checked first.
pub fn resolve_round(hand1: &mut Hand, hand2: &mut Hand) -> RoundResult {
    if hand1.is_empty() {
        return RoundResult::elimination(PlayerId::One, Vec::new(), 0);
    }
    if hand2.is_empty() {
        return RoundResult::elimination(PlayerId::Two, Vec::new(), 0);
    }

    let mut table = TablePile::new();
    let mut plays: Vec<(Card, Card)> = Vec::new();
    let mut war_levels = 0u32;

    // Opening play; both hands were just checked non-empty.
    let mut pending = face_off(hand1, hand2, &mut table, 0);

    loop {
        let (card1, card2) = match pending {
            Ok(pair) => pair,
            Err(loser) => {
                log::debug!(
                    "{} cannot finish war level {} and is eliminated",
                    loser,
                    war_levels
                );
                return RoundResult::elimination(loser, plays, war_levels);
            }
        };

        log::trace!("face-up: {} vs {}", card1, card2);
        plays.push((card1.clone(), card2.clone()));

        if card1.value() != card2.value() {
            let winner = if card1.beats(&card2) {
                PlayerId::One
            } else {
                PlayerId::Two
            };
            let winning_hand = match winner {
                PlayerId::One => &mut *hand1,
                PlayerId::Two => &mut *hand2,
            };
            winning_hand.add_many(table.iter().cloned());

            log::debug!(
                "{} takes {} cards after {} war level(s)",
                winner,
                table.len(),
                war_levels
            );
            return RoundResult {
                outcome: RoundOutcome::Winner(winner),
                plays,
                cards_won: table,
                war_levels,
            };
        }

        war_levels += 1;
        log::debug!("tie at value {}; war level {}", card1.value(), war_levels);
        pending = face_off(hand1, hand2, &mut table, 2);
    }
}

/// Draw `face_down_pairs` alternating face-down pairs and then a face-up
/// pair onto the table. `Err` names the side whose hand ran dry at the
/// draw it owed.
fn face_off(
    hand1: &mut Hand,
    hand2: &mut Hand,
    table: &mut TablePile,
    face_down_pairs: usize,
) -> Result<(Card, Card), PlayerId> {
    for _ in 0..face_down_pairs {
        draw_onto(hand1, table).ok_or(PlayerId::One)?;
        draw_onto(hand2, table).ok_or(PlayerId::Two)?;
    }

    let up1 = draw_onto(hand1, table).ok_or(PlayerId::One)?;
    let up2 = draw_onto(hand2, table).ok_or(PlayerId::Two)?;
    Ok((up1, up2))
}

fn draw_onto(hand: &mut Hand, table: &mut TablePile) -> Option<Card> {
    let card = hand.draw()?;
    table.push(card.clone());
    Some(card)
}
