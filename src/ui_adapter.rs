use serde_json::{json, Value};

use crate::engine::classifier::is_pair;
use crate::engine::evaluator::hand_value;
use crate::engine::models::{Card, DecisionResult, NaturalOutcome, RoundView, ScoreState};

/// Asset path for a card face, matching the client's image set layout.
fn card_image(card: &Card) -> String {
    format!("images/playing-cards/{}-{}.svg", card.suit.name(), card.rank)
}

/// One card slot entry; `id` is 1-based to match the client's element ids.
fn card_entry(id: usize, card: &Card) -> Value {
    json!({ "id": id, "image": card_image(card) })
}

/// Button enablement: the five action buttons while a decision is pending,
/// the deal button otherwise. Split only unlocks on a splittable pair.
fn buttons(acting: bool, can_split: bool) -> Value {
    json!({
        "hit":         acting,
        "stand":       acting,
        "double_down": acting,
        "split":       acting && can_split,
        "surrender":   acting,
        "deal":        !acting
    })
}

fn stats(score: ScoreState) -> Value {
    json!({
        "game_score": format!("Score: {}/{}", score.correct, score.total),
        "win_percentage": format!("{}%", score.percentage())
    })
}

/// Map a dealt round to the client's table state: stats line, button
/// enablement, card images, hand-value labels, and the evaluation banner.
pub fn to_round_state(view: &RoundView, score: ScoreState) -> Value {
    let acting = view.natural == NaturalOutcome::None;
    let can_split = is_pair(&view.player_hand).unwrap_or(false);
    let header = if acting { "" } else { "BLACKJACK!" };

    json!({
        "stats": stats(score),
        "buttons": buttons(acting, can_split),
        "player": {
            "hand_value": format!("Player Hand: {}", hand_value(&view.player_hand)),
            "cards": [
                card_entry(1, &view.player_hand[0]),
                card_entry(2, &view.player_hand[1])
            ]
        },
        "dealer": {
            "hand_value": format!("Dealer Hand: {}", hand_value(&[view.dealer_upcard])),
            "cards": [card_entry(1, &view.dealer_upcard)]
        },
        "evaluation": {
            "header": header,
            "detail": "",
            "natural": view.natural.to_string()
        }
    })
}

/// Map a judged decision to the client's post-answer state: updated stats,
/// verdict banner, and buttons back to deal-only.
pub fn to_decision_state(result: &DecisionResult) -> Value {
    let (header, detail) = if result.was_correct {
        (
            "Correct!",
            format!("You always want to {} in this situation", result.recommended),
        )
    } else {
        (
            "Incorrect.",
            format!("The correct action was to {}.", result.recommended),
        )
    };

    json!({
        "stats": stats(result.score),
        "buttons": buttons(false, false),
        "evaluation": {
            "header": header,
            "detail": detail
        }
    })
}
