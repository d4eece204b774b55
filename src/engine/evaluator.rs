use crate::engine::models::{Card, Rank};

/// Point total of a hand, summed left to right.
///
/// Number cards count face value, tens and faces count 10, and an ace counts
/// 11 when the running total so far is 10 or less, otherwise 1. The rule is
/// order-dependent by design: it matches the chart's labels exactly for the
/// two-card hands this trainer deals, and stays cheap. It is not a general
/// best-total evaluator for longer hands.
pub fn hand_value(cards: &[Card]) -> u8 {
    let mut total = 0u8;
    for card in cards {
        total += card_points(card.rank, total);
    }
    total
}

/// Points one card adds on top of the running total.
fn card_points(rank: Rank, running: u8) -> u8 {
    match rank {
        Rank::Two   => 2,
        Rank::Three => 3,
        Rank::Four  => 4,
        Rank::Five  => 5,
        Rank::Six   => 6,
        Rank::Seven => 7,
        Rank::Eight => 8,
        Rank::Nine  => 9,
        Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
        Rank::Ace => {
            if running <= 10 {
                11
            } else {
                1
            }
        }
    }
}

/// Whether the hand is soft, i.e. contains at least one ace.
///
/// Valid for the two-card opening hands this trainer deals; with more cards
/// an ace may already be forced to count 1, which this check ignores.
pub fn is_soft(cards: &[Card]) -> bool {
    cards.iter().any(|card| card.rank == Rank::Ace)
}
