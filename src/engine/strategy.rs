use crate::engine::classifier::{is_pair, normalize_dealer_key, normalize_player_key};
use crate::engine::evaluator::{hand_value, is_soft};
use crate::engine::models::Action::{DoubleDown as D, Hit as H, Split as P, Stand as S, Surrender as R};
use crate::engine::models::{Action, Card, DealerKey, PlayerKey, TrainerError};

/// One action per dealer column, left to right: up-card 2 through 10, then ace.
const DEALER_COLUMNS: usize = 10;

/// The fixed basic-strategy chart, keyed by the canonical player-hand labels.
///
/// Assumes typical casino rules: dealer stands on soft 17, double after split
/// allowed, late surrender, four or more decks. The entries are hand-authored
/// data, not derived logic — quirks included (for example "7,7" stands against
/// an 8 and "8,8" stands against a 10).
const CHART: [(&str, [Action; DEALER_COLUMNS]); 28] = [
    // Hard totals            2  3  4  5  6  7  8  9 10  a
    ("8-",      [H, H, H, H, H, H, H, H, H, H]),
    ("9",       [H, D, D, D, D, H, H, H, H, H]),
    ("10",      [D, D, D, D, D, D, D, D, H, H]),
    ("11",      [D, D, D, D, D, D, D, D, D, D]),
    ("12",      [H, H, S, S, S, H, H, H, H, H]),
    ("13",      [S, S, S, S, S, H, H, H, H, H]),
    ("14",      [S, S, S, S, S, H, H, H, H, H]),
    ("15",      [S, S, S, S, S, H, H, H, R, H]),
    ("16",      [S, S, S, S, S, H, H, R, R, R]),
    ("17+",     [S, S, S, S, S, S, S, S, S, S]),
    // Soft hands
    ("a,2",     [H, H, H, D, D, H, H, H, H, H]),
    ("a,3",     [H, H, H, D, D, H, H, H, H, H]),
    ("a,4",     [H, H, H, D, D, H, H, H, H, H]),
    ("a,5",     [H, H, H, D, D, H, H, H, H, H]),
    ("a,6",     [H, D, D, D, D, H, H, H, H, H]),
    ("a,7",     [S, D, D, D, D, S, S, H, H, H]),
    ("a,8",     [S, S, S, S, S, S, S, S, S, S]),
    ("a,9",     [S, S, S, S, S, S, S, S, S, S]),
    // Pairs
    ("a,a",     [P, P, P, P, P, P, P, P, P, P]),
    ("2,2",     [P, P, P, P, P, P, H, H, H, H]),
    ("3,3",     [P, P, P, P, P, P, H, H, H, H]),
    ("4,4",     [H, H, H, P, P, H, H, H, H, H]),
    ("5,5",     [D, D, D, D, D, D, D, D, H, H]),
    ("6,6",     [P, P, P, P, P, H, H, H, H, H]),
    ("7,7",     [P, P, P, P, P, P, S, H, H, H]),
    ("8,8",     [P, P, P, P, P, P, P, P, S, P]),
    ("9,9",     [P, P, P, P, P, S, P, P, S, S]),
    ("10,10",   [S, S, S, S, S, S, S, S, S, S]),
];

/// Column index for a dealer key, matching the chart layout above.
fn dealer_column(dealer: DealerKey) -> Option<usize> {
    match dealer {
        DealerKey::Value(value) if (2..=10).contains(&value) => Some(usize::from(value) - 2),
        DealerKey::Ace => Some(DEALER_COLUMNS - 1),
        DealerKey::Value(_) => None,
    }
}

/// Recommended action for a normalized player hand against a dealer up-card.
///
/// Extreme hard totals never consult the chart: 8 or below always hits, 17 or
/// above always stands. Everything else resolves through the chart row whose
/// label matches the player key; a missing row or column is a `LookupMiss`,
/// which no reachable two-card deal produces.
pub fn recommend(player: PlayerKey, dealer: DealerKey) -> Result<Action, TrainerError> {
    if let PlayerKey::Hard(total) = player {
        if total <= 8 {
            return Ok(Action::Hit);
        }
        if total >= 17 {
            return Ok(Action::Stand);
        }
    }

    let column = dealer_column(dealer).ok_or(TrainerError::LookupMiss { player, dealer })?;
    let label = player.to_string();
    let (_, row) = CHART
        .iter()
        .find(|(row_label, _)| *row_label == label)
        .ok_or(TrainerError::LookupMiss { player, dealer })?;
    Ok(row[column])
}

/// Recommended action for a raw player hand against a dealer up-card.
///
/// Composes the evaluator, the classifier, and the chart. A two-card 21 has
/// no chart row (naturals resolve before any decision), so asking about one
/// fails with `LookupMiss`.
pub fn recommended_action(player_cards: &[Card], dealer_upcard: Card) -> Result<Action, TrainerError> {
    let value = hand_value(player_cards);
    let soft = is_soft(player_cards);
    let pair = is_pair(player_cards)?;
    let player = normalize_player_key(value, soft, pair);
    let dealer = normalize_dealer_key(hand_value(&[dealer_upcard]));
    recommend(player, dealer)
}
