//! Round engine integration tests.
//!
//! These build hands card by card and drive `resolve_round` directly,
//! covering plain rounds, single and chained wars, and every elimination
//! shape.

use war_engine::cards::Card;
use war_engine::core::{Hand, PlayerId};
use war_engine::rules::{resolve_round, RoundOutcome};

fn hearts(values: &[i64]) -> Hand {
    Hand::with_cards(
        values
            .iter()
            .map(|v| Card::new(format!("{} of Hearts", v), *v)),
    )
}

fn spades(values: &[i64]) -> Hand {
    Hand::with_cards(
        values
            .iter()
            .map(|v| Card::new(format!("{} of Spades", v), *v)),
    )
}

fn values(hand: &Hand) -> Vec<i64> {
    hand.iter().map(Card::value).collect()
}

// =============================================================================
// Plain Rounds
// =============================================================================

/// The higher card takes both, appended player 1's card first.
#[test]
fn test_plain_round_transfer_order() {
    let mut h1 = hearts(&[3, 6]);
    let mut h2 = spades(&[11, 7]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Winner(PlayerId::Two));
    assert_eq!(result.war_levels, 0);
    assert_eq!(result.plays.len(), 1);
    assert_eq!(values(&h1), vec![6]);
    assert_eq!(values(&h2), vec![7, 3, 11]);
}

/// Ace high: 14 beats everything, including a King.
#[test]
fn test_ace_beats_king() {
    let mut h1 = hearts(&[14]);
    let mut h2 = spades(&[13]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Winner(PlayerId::One));
    assert_eq!(values(&h1), vec![14, 13]);
}

/// Won cards land on the bottom, so the winner's next play is unchanged.
#[test]
fn test_winnings_go_to_the_bottom() {
    let mut h1 = hearts(&[9, 5]);
    let mut h2 = spades(&[2, 8]);

    resolve_round(&mut h1, &mut h2);

    assert_eq!(h1.draw().unwrap().value(), 5);
}

// =============================================================================
// Wars
// =============================================================================

/// One war level: 2 face-down cards each, then a deciding face-up pair.
/// The whole eight-card pile goes to the war winner in table order.
#[test]
fn test_single_war() {
    let mut h1 = hearts(&[10, 2, 3, 12, 6]);
    let mut h2 = spades(&[10, 4, 5, 7, 8]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Winner(PlayerId::One));
    assert_eq!(result.war_levels, 1);
    assert_eq!(result.cards_moved(), 8);

    let won: Vec<i64> = result.cards_won.iter().map(Card::value).collect();
    assert_eq!(won, vec![10, 10, 2, 4, 3, 5, 12, 7]);
    assert_eq!(values(&h1), vec![6, 10, 10, 2, 4, 3, 5, 12, 7]);
    assert_eq!(values(&h2), vec![8]);
}

/// The face-up war pair is recorded as a play alongside the opening pair.
#[test]
fn test_war_plays_are_recorded() {
    let mut h1 = hearts(&[10, 2, 3, 12, 6]);
    let mut h2 = spades(&[10, 4, 5, 7, 8]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.plays.len(), 2);
    assert_eq!(result.plays[0].0.value(), 10);
    assert_eq!(result.plays[0].1.value(), 10);
    assert_eq!(result.plays[1].0.value(), 12);
    assert_eq!(result.plays[1].1.value(), 7);
}

/// Wars chain: another tie at the face-up pair opens another level.
#[test]
fn test_chained_wars_accumulate_one_pile() {
    let mut h1 = hearts(&[4, 2, 2, 9, 3, 3, 11, 5]);
    let mut h2 = spades(&[4, 6, 6, 9, 7, 7, 10, 8]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Winner(PlayerId::One));
    assert_eq!(result.war_levels, 2);
    assert_eq!(result.plays.len(), 3);
    assert_eq!(result.cards_moved(), 14);
    assert_eq!(h1.size(), 15);
    assert_eq!(h2.size(), 1);
}

/// A war the second player wins moves the pile the other way.
#[test]
fn test_player_two_wins_war() {
    let mut h1 = hearts(&[10, 2, 3, 4]);
    let mut h2 = spades(&[10, 5, 6, 13]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Winner(PlayerId::Two));
    assert!(h1.is_empty());
    assert_eq!(h2.size(), 8);
}

// =============================================================================
// Eliminations
// =============================================================================

/// An empty hand at round start is an elimination before any draw.
#[test]
fn test_empty_hand_eliminated_without_drawing() {
    let mut h1 = hearts(&[]);
    let mut h2 = spades(&[5, 6]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Eliminated(PlayerId::One));
    assert!(result.plays.is_empty());
    assert_eq!(result.cards_moved(), 0);
    assert_eq!(h2.size(), 2);
}

/// Both hands empty: player 1 is checked first.
#[test]
fn test_both_empty_eliminates_player_one() {
    let mut h1 = hearts(&[]);
    let mut h2 = spades(&[]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Eliminated(PlayerId::One));
}

/// Fewer than 3 cards when war triggers: eliminated mid-war, no panic.
#[test]
fn test_war_with_too_few_cards_eliminates() {
    // After the opening tie player 2 holds 2 cards: both go face-down,
    // leaving nothing for the face-up card.
    let mut h1 = hearts(&[8, 2, 3, 4, 5]);
    let mut h2 = spades(&[8, 6, 7]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Eliminated(PlayerId::Two));
    assert_eq!(result.war_levels, 1);
    assert!(result.cards_won.is_empty());
}

/// A side with no cards at all for the war loses at its first owed card.
#[test]
fn test_war_with_zero_remaining_cards() {
    let mut h1 = hearts(&[9]);
    let mut h2 = spades(&[9, 4, 5, 6]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Eliminated(PlayerId::One));
}

/// Elimination can happen deep in a war chain.
#[test]
fn test_elimination_in_second_war_level() {
    // First war level ties again; player 2 cannot fund the second level.
    let mut h1 = hearts(&[4, 2, 2, 9, 3, 3, 11]);
    let mut h2 = spades(&[4, 6, 6, 9, 7]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(result.outcome, RoundOutcome::Eliminated(PlayerId::Two));
    assert_eq!(result.war_levels, 2);
    assert_eq!(result.plays.len(), 2);
}

// =============================================================================
// Conservation
// =============================================================================

/// Decided rounds move every table card into exactly one hand.
#[test]
fn test_decided_round_conserves_cards() {
    let mut h1 = hearts(&[10, 2, 3, 12, 6]);
    let mut h2 = spades(&[10, 4, 5, 7, 8]);
    let before = h1.size() + h2.size();

    let result = resolve_round(&mut h1, &mut h2);

    assert!(result.winner().is_some());
    assert_eq!(h1.size() + h2.size(), before);
}

/// Piles are even-sized: 2 opening cards plus 6 per war level.
#[test]
fn test_pile_size_shape() {
    let mut h1 = hearts(&[10, 2, 3, 12, 6]);
    let mut h2 = spades(&[10, 4, 5, 7, 8]);

    let result = resolve_round(&mut h1, &mut h2);

    assert_eq!(
        result.cards_moved(),
        2 + 6 * result.war_levels as usize
    );
}
