//! # blackjack_trainer
//!
//! A fully offline basic-strategy trainer core for blackjack.
//!
//! The library deals opening rounds (two player cards against a dealer
//! up-card), asks the caller for a declared action, judges it against a fixed
//! basic-strategy chart, and keeps a running score. It holds no UI state and
//! performs no I/O — a thin presentation layer owns rendering and buttons.
//!
//! ## How it works
//!
//! 1. Create a [`TrainingSession`] from a [`SessionConfig`] (deck count plus
//!    an optional RNG seed).
//! 2. Call [`TrainingSession::new_round`] — the session shuffles a fresh
//!    shoe, deals the hands, and reports any natural blackjack via
//!    [`RoundView`]. Naturals resolve on the spot and take no decision.
//! 3. Call [`TrainingSession::submit_action`] with the player's declared
//!    [`Action`] — the returned [`DecisionResult`] carries the chart's
//!    recommendation, the verdict, and the updated [`ScoreState`].
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same rounds every run — useful for tests and replayable drills.
//! - **Chart-faithful**: the strategy table is verbatim hand-authored data
//!   (dealer stands on soft 17, double after split allowed, late surrender,
//!   four or more decks), quirks included.
//! - **UI-ready state**: [`to_round_state`] and [`to_decision_state`] render
//!   rounds as the JSON a card-table client consumes (image paths, button
//!   enablement, score line).
//!
//! Every fallible operation returns a [`TrainerError`] instead of panicking,
//! including draws from an exhausted shoe.
//!
//! ## Quick start
//!
//! ```rust
//! use blackjack_trainer::{Action, NaturalOutcome, SessionConfig, TrainingSession};
//!
//! let mut session = TrainingSession::new(SessionConfig::seeded(42)).unwrap();
//!
//! let round = session.new_round().unwrap();
//! println!(
//!     "you hold {} {} against a dealer {}",
//!     round.player_hand[0], round.player_hand[1], round.dealer_upcard
//! );
//!
//! if round.natural == NaturalOutcome::None {
//!     let result = session.submit_action(Action::Hit).unwrap();
//!     println!(
//!         "chart says {} — {}",
//!         result.recommended,
//!         if result.was_correct { "correct" } else { "incorrect" }
//!     );
//! }
//!
//! println!("score so far: {}", session.score());
//! ```

pub mod engine;
pub mod ui_adapter;

// Convenience re-exports so callers can use `blackjack_trainer::TrainingSession`
// directly without reaching into `engine::`.
pub use engine::{
    evaluate_decision, hand_value, is_pair, is_soft, natural_outcome, normalize_dealer_key,
    normalize_player_key, recommend, recommended_action, Action, Card, DealerKey, DecisionResult,
    NaturalOutcome, PlayerKey, Rank, RoundView, ScoreState, SessionConfig, Shoe, Suit,
    TrainerError, TrainingSession, DEFAULT_DECKS,
};
pub use ui_adapter::{to_decision_state, to_round_state};

#[cfg(test)]
mod tests;
