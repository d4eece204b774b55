//! Guided walkthrough of a seeded drill session.
//!
//! Run with: `cargo run --example drill`
//!
//! This example shows how `blackjack_trainer` works end to end:
//!
//! 1. **Eight seeded rounds** — the session deals reproducible hands; rounds
//!    that open on a natural blackjack resolve on the spot, everything else
//!    takes one declared action and gets judged against the chart.
//!
//! 2. **Client state JSON** — one round rendered through `to_round_state` and
//!    `to_decision_state`, the shape a card-table UI consumes.
//!
//! ## Key concepts demonstrated
//!
//! - `SessionConfig::seeded(u64)` makes every deal fully deterministic.
//! - Naturals take no decision and never move the score.
//! - `DecisionResult` carries the chart's answer, the verdict, and the score.
//! - Every fallible call returns `TrainerError`, so `main` just uses `?`.

use blackjack_trainer::{
    hand_value, recommended_action, to_decision_state, to_round_state, Action, NaturalOutcome,
    SessionConfig, TrainerError, TrainingSession,
};

fn main() -> Result<(), TrainerError> {
    let mut session = TrainingSession::new(SessionConfig::seeded(42))?;

    println!();
    println!("══ Eight seeded rounds (seed=42) ══");

    for round_no in 1..=8 {
        let view = session.new_round()?;

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "  Round {round_no}:  you hold {} {}  —  dealer shows {}",
            view.player_hand[0], view.player_hand[1], view.dealer_upcard
        );
        println!(
            "  Player Hand: {}   Dealer Hand: {}",
            hand_value(&view.player_hand),
            hand_value(&[view.dealer_upcard])
        );

        if view.natural != NaturalOutcome::None {
            println!("  BLACKJACK!  ({}) — already resolved, deal again", view.natural);
            continue;
        }

        // Alternate between the chart's answer and a stubborn always-hit habit,
        // so both verdict paths show up in the output.
        let declared = if round_no % 2 == 0 {
            recommended_action(&view.player_hand, view.dealer_upcard)?
        } else {
            Action::Hit
        };
        let result = session.submit_action(declared)?;
        let verdict = if result.was_correct { "Correct!" } else { "Incorrect." };

        println!("  You declare: {declared}");
        println!("  {verdict} The chart says {} — score {}", result.recommended, result.score);
    }

    // ── Client state JSON ────────────────────────────────────────────────────
    // The adapter renders the same round data as UI-ready state: card image
    // paths, button enablement, score line, and the evaluation banner.
    println!();
    println!("══ Client state JSON for one more round ══");
    println!();

    let view = session.new_round()?;
    println!("{:#}", to_round_state(&view, session.score()));

    if view.natural == NaturalOutcome::None {
        let result = session.submit_action(Action::Stand)?;
        println!();
        println!("{:#}", to_decision_state(&result));
    }

    println!();
    println!("══ Final score: {} ══", session.score());
    println!();
    Ok(())
}
