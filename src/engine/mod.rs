//! Core trainer engine — card handling, hand analysis, chart lookup, and
//! session scoring.
//!
//! ## Module overview
//!
//! | Module       | Purpose |
//! |--------------|---------|
//! | `models`     | All shared types: cards, actions, keys, score, config, errors |
//! | `shoe`       | Multi-deck shoe with Fisher-Yates shuffle and top-card draws |
//! | `evaluator`  | Hand totals under the order-dependent ace rule, softness |
//! | `classifier` | Pair detection and hand-to-chart-key normalization |
//! | `strategy`   | The fixed basic-strategy chart and recommendation lookup |
//! | `session`    | Round dealing, decision judging, running score |

pub mod classifier;
pub mod evaluator;
pub mod models;
pub mod session;
pub mod shoe;
pub mod strategy;

// Re-export the public API surface so callers can use
// `engine::TrainingSession` without reaching into sub-modules.
pub use classifier::{is_pair, normalize_dealer_key, normalize_player_key};
pub use evaluator::{hand_value, is_soft};
pub use models::{
    Action, Card, DealerKey, DecisionResult, NaturalOutcome, PlayerKey, Rank, RoundView,
    ScoreState, SessionConfig, Suit, TrainerError, DEFAULT_DECKS,
};
pub use session::{evaluate_decision, natural_outcome, TrainingSession};
pub use shoe::Shoe;
pub use strategy::{recommend, recommended_action};
