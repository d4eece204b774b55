use crate::engine::evaluator::{hand_value, is_soft};
use crate::engine::models::{Card, DealerKey, PlayerKey, TrainerError};

/// Whether an opening hand is splittable as a pair.
///
/// Two cards of the same rank always qualify. Ten-valued cards are also
/// pooled: any hard 20 counts as a pair, so "k,10" splits like "10,10".
/// The soft check keeps "a,9" (a soft 20) out of that pool.
pub fn is_pair(cards: &[Card]) -> Result<bool, TrainerError> {
    let [first, second] = cards else {
        return Err(TrainerError::InvalidHandSize(cards.len()));
    };
    Ok(first.rank == second.rank || (hand_value(cards) == 20 && !is_soft(cards)))
}

/// Fold a hand's value and flags into its chart key.
///
/// `value`, `soft` and `pair` must describe the same two-card hand (as
/// produced by `hand_value`, `is_soft` and `is_pair`). Pairs of aces take
/// precedence over both the pair and soft forms, other pairs over the soft
/// form.
pub fn normalize_player_key(value: u8, soft: bool, pair: bool) -> PlayerKey {
    if pair && soft {
        PlayerKey::AcePair
    } else if pair {
        PlayerKey::Pair(value / 2)
    } else if soft {
        PlayerKey::Soft(value - 11)
    } else {
        PlayerKey::Hard(value)
    }
}

/// Fold a dealer up-card value into its chart column key: 11 is the ace,
/// anything else keeps its point value.
pub fn normalize_dealer_key(value: u8) -> DealerKey {
    if value == 11 {
        DealerKey::Ace
    } else {
        DealerKey::Value(value)
    }
}
