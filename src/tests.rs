//! Unit tests for the `blackjack_trainer` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage (24 tests)
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical rounds and verdicts; different seeds → varied rounds |
//! | Shoe integrity | Size scales with deck count; shuffle permutes without loss |
//! | Hand evaluation | Two-card totals stay within [4, 21] |
//! | Classification | Ten-pool pairs, soft hands, and the normalized keys they produce |
//! | Strategy coverage | Every reachable two-card deal resolves to a recommendation |
//! | Scenarios | Concrete hands land on the chart's exact answers |
//! | Score keeping | Half-up rounding, zero-safe percentage, display format |
//! | Session flow | Naturals take no decision; score tracks judged rounds only |
//! | UI adapter | Card images, button gating, verdict strings |
//! | Serialization | Action names round-trip the client's phrases |

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{
    evaluate_decision, hand_value, is_pair, is_soft, normalize_player_key, recommend,
    recommended_action, to_decision_state, to_round_state, Action, Card, DealerKey,
    DecisionResult, NaturalOutcome, PlayerKey, Rank, RoundView, ScoreState, SessionConfig, Shoe,
    Suit, TrainerError, TrainingSession,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Suit-independent card builder; most checks only care about ranks.
fn card(rank: Rank) -> Card {
    Card { rank, suit: Suit::Spade }
}

/// Two-deck session with a fixed seed.
fn session_with(seed: u64) -> TrainingSession {
    TrainingSession::new(SessionConfig { decks: 2, rng_seed: Some(seed) }).unwrap()
}

/// Count cards by identity, so multisets can be compared.
fn card_counts(cards: &[Card]) -> std::collections::HashMap<Card, u32> {
    let mut counts = std::collections::HashMap::new();
    for c in cards {
        *counts.entry(*c).or_insert(0) += 1;
    }
    counts
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_sessions() {
    for seed in SEEDS {
        let mut a = session_with(seed);
        let mut b = session_with(seed);
        for _ in 0..10 {
            let view_a = a.new_round().unwrap();
            let view_b = b.new_round().unwrap();
            assert_eq!(view_a, view_b, "round mismatch for seed {seed}");
            if view_a.natural == NaturalOutcome::None {
                assert_eq!(
                    a.submit_action(Action::Stand).unwrap(),
                    b.submit_action(Action::Stand).unwrap(),
                    "verdict mismatch for seed {seed}"
                );
            }
        }
        assert_eq!(a.score(), b.score());
    }
}

#[test]
fn different_seeds_produce_varied_rounds() {
    // Checks that varying the seed produces different opening rounds across a
    // wide range. Not a hard guarantee (collisions are possible) but holds in
    // practice for all reasonable seed ranges.
    let first_round = |seed: u64| -> RoundView {
        let mut session = session_with(seed);
        session.new_round().unwrap()
    };
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        if first_round(seed) == first_round(seed + 500) {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "too many identical rounds across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_config_produces_a_valid_round() {
    // Smoke test: rng_seed: None must not panic and must deal a legal round.
    let mut session = TrainingSession::new(SessionConfig::default()).unwrap();
    let view = session.new_round().unwrap();
    let total = hand_value(&view.player_hand);
    assert!((4..=21).contains(&total), "illegal player total {total}");
    match view.natural {
        NaturalOutcome::None => {
            session.submit_action(Action::Hit).unwrap();
        }
        _ => {
            session.submit_action(Action::Hit).unwrap_err();
        }
    }
}

// ── shoe integrity ───────────────────────────────────────────────────────────

#[test]
fn shoe_size_scales_with_deck_count() {
    let mut rng = StdRng::seed_from_u64(42);
    for decks in 1..=6u8 {
        let shoe = Shoe::new_shuffled(decks, &mut rng).unwrap();
        assert_eq!(shoe.remaining(), usize::from(decks) * 52);
    }
}

#[test]
fn shuffle_is_a_permutation_for_all_deck_counts() {
    let mut rng = StdRng::seed_from_u64(7);
    for decks in 1..=4u8 {
        let mut shoe = Shoe::new_shuffled(decks, &mut rng).unwrap();
        let before = card_counts(shoe.cards());
        shoe.shuffle(&mut rng);
        assert_eq!(card_counts(shoe.cards()), before, "multiset changed for {decks} decks");
    }
}

// ── hand evaluation ──────────────────────────────────────────────────────────

#[test]
fn two_card_values_stay_in_bounds() {
    for first in Rank::ALL {
        for second in Rank::ALL {
            let hand = [card(first), card(second)];
            let total = hand_value(&hand);
            assert!(
                (4..=21).contains(&total),
                "{first:?}+{second:?} totalled {total}"
            );
            if is_soft(&hand) {
                assert!(total >= 12, "soft {first:?}+{second:?} totalled {total}");
            }
        }
    }
}

// ── classification ───────────────────────────────────────────────────────────

#[test]
fn ten_and_king_classify_as_a_hard_pair() {
    let hand = [card(Rank::Ten), card(Rank::King)];
    assert!(is_pair(&hand).unwrap());
    assert!(!is_soft(&hand));
    assert_eq!(normalize_player_key(hand_value(&hand), false, true), PlayerKey::Pair(10));
}

#[test]
fn ace_nine_classifies_soft_not_pair() {
    let hand = [card(Rank::Ace), card(Rank::Nine)];
    assert!(!is_pair(&hand).unwrap());
    assert!(is_soft(&hand));
    let key = normalize_player_key(hand_value(&hand), true, false);
    assert_eq!(key, PlayerKey::Soft(9));
    assert_eq!(key.to_string(), "a,9");
}

#[test]
fn ace_two_normalizes_to_its_soft_key() {
    let hand = [card(Rank::Ace), card(Rank::Two)];
    assert_eq!(hand_value(&hand), 13);
    let key = normalize_player_key(13, true, false);
    assert_eq!(key, PlayerKey::Soft(2));
    assert_eq!(key.to_string(), "a,2");
}

// ── strategy coverage ────────────────────────────────────────────────────────

#[test]
fn every_reachable_deal_has_a_recommendation() {
    // Naturals resolve before any decision, so two-card 21s are skipped; every
    // other rank combination must resolve against every up-card.
    for first in Rank::ALL {
        for second in Rank::ALL {
            let hand = [card(first), card(second)];
            if hand_value(&hand) == 21 {
                continue;
            }
            for up in Rank::ALL {
                let result = recommended_action(&hand, card(up));
                assert!(
                    result.is_ok(),
                    "no recommendation for {first:?}+{second:?} vs {up:?}: {result:?}"
                );
            }
        }
    }
}

#[test]
fn hard_seven_hits_against_every_upcard() {
    for value in 2..=10u8 {
        assert_eq!(recommend(PlayerKey::Hard(7), DealerKey::Value(value)), Ok(Action::Hit));
    }
    assert_eq!(recommend(PlayerKey::Hard(7), DealerKey::Ace), Ok(Action::Hit));
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn hard_fifteen_vs_seven_scores_a_miss() {
    // Hard 15 against a 7 hits per the chart, so standing is a miss.
    let player = [card(Rank::King), card(Rank::Five)];
    let upcard = card(Rank::Seven);

    let (recommended, correct) = evaluate_decision(player, upcard, Action::Stand).unwrap();
    assert_eq!(recommended, Action::Hit);
    assert!(!correct);

    let mut score = ScoreState::default();
    score.record(correct);
    assert_eq!(score, ScoreState { correct: 0, total: 1 });
    assert_eq!(score.percentage(), 0);
}

#[test]
fn ace_pair_always_splits() {
    let hand = [card(Rank::Ace), card(Rank::Ace)];
    for up in Rank::ALL {
        assert_eq!(recommended_action(&hand, card(up)), Ok(Action::Split));
    }
}

#[test]
fn soft_seventeen_vs_six_doubles() {
    let hand = [card(Rank::Ace), card(Rank::Six)];
    assert_eq!(recommended_action(&hand, card(Rank::Six)), Ok(Action::DoubleDown));
}

// ── score keeping ────────────────────────────────────────────────────────────

#[test]
fn percentage_rounds_half_up() {
    let score = |correct: u32, total: u32| ScoreState { correct, total }.percentage();
    assert_eq!(score(0, 0), 0);
    assert_eq!(score(1, 2), 50);
    assert_eq!(score(1, 3), 33);
    assert_eq!(score(2, 3), 67);
    assert_eq!(score(1, 8), 13); // 12.5 rounds up
    assert_eq!(score(5, 6), 83);
    assert_eq!(score(6, 6), 100);
}

#[test]
fn score_displays_like_the_client() {
    let mut score = ScoreState::default();
    score.record(true);
    score.record(false);
    score.record(true);
    assert_eq!(score.to_string(), "2/3 (67%)");
}

// ── session flow ─────────────────────────────────────────────────────────────

#[test]
fn naturals_resolve_without_scoring() {
    let mut session = session_with(1234);
    let mut naturals = 0u32;
    let mut decisions = 0u32;
    for _ in 0..800 {
        let view = session.new_round().unwrap();
        if view.natural == NaturalOutcome::None {
            session.submit_action(Action::Stand).unwrap();
            decisions += 1;
        } else {
            let before = session.score();
            assert_eq!(
                session.submit_action(Action::Stand).unwrap_err(),
                TrainerError::NoActiveRound
            );
            assert_eq!(session.score(), before, "a natural must not move the score");
            naturals += 1;
        }
    }
    assert!(naturals > 0, "no naturals dealt in 800 rounds");
    assert!(decisions > 0, "no decision rounds dealt in 800 rounds");
    assert_eq!(session.score().total, decisions);
}

#[test]
fn perfect_play_scores_everything() {
    let mut session = session_with(77);
    let mut answered = 0u32;
    for _ in 0..300 {
        let view = session.new_round().unwrap();
        if view.natural != NaturalOutcome::None {
            continue;
        }
        let best = recommended_action(&view.player_hand, view.dealer_upcard).unwrap();
        let result = session.submit_action(best).unwrap();
        assert!(result.was_correct);
        answered += 1;
        assert_eq!(result.score, ScoreState { correct: answered, total: answered });
        if answered == 5 {
            break;
        }
    }
    assert_eq!(answered, 5, "expected five decision rounds in 300 deals");
    assert_eq!(session.score().percentage(), 100);
}

#[test]
fn wrong_declarations_score_nothing() {
    let mut session = session_with(78);
    let mut answered = 0u32;
    for _ in 0..300 {
        let view = session.new_round().unwrap();
        if view.natural != NaturalOutcome::None {
            continue;
        }
        let best = recommended_action(&view.player_hand, view.dealer_upcard).unwrap();
        let wrong = Action::ALL.into_iter().find(|&a| a != best).unwrap();
        let result = session.submit_action(wrong).unwrap();
        assert!(!result.was_correct);
        assert_eq!(result.recommended, best);
        answered += 1;
        if answered == 5 {
            break;
        }
    }
    assert_eq!(answered, 5, "expected five decision rounds in 300 deals");
    assert_eq!(session.score(), ScoreState { correct: 0, total: 5 });
    assert_eq!(session.score().percentage(), 0);
}

// ── ui adapter ───────────────────────────────────────────────────────────────

#[test]
fn round_state_renders_cards_and_buttons() {
    let view = RoundView {
        player_hand: [
            Card { rank: Rank::King, suit: Suit::Spade },
            Card { rank: Rank::Five, suit: Suit::Heart },
        ],
        dealer_upcard: Card { rank: Rank::Seven, suit: Suit::Diamond },
        natural: NaturalOutcome::None,
    };
    let state = to_round_state(&view, ScoreState::default());

    assert_eq!(state["player"]["hand_value"], "Player Hand: 15");
    assert_eq!(state["dealer"]["hand_value"], "Dealer Hand: 7");
    assert_eq!(state["player"]["cards"][0]["image"], "images/playing-cards/spade-k.svg");
    assert_eq!(state["player"]["cards"][1]["image"], "images/playing-cards/heart-5.svg");
    assert_eq!(state["dealer"]["cards"][0]["image"], "images/playing-cards/diamond-7.svg");
    assert_eq!(state["buttons"]["hit"], true);
    assert_eq!(state["buttons"]["surrender"], true);
    assert_eq!(state["buttons"]["split"], false);
    assert_eq!(state["buttons"]["deal"], false);
    assert_eq!(state["stats"]["game_score"], "Score: 0/0");
    assert_eq!(state["stats"]["win_percentage"], "0%");
    assert_eq!(state["evaluation"]["header"], "");
}

#[test]
fn round_state_gates_split_on_pairs() {
    let pair_view = |a: Rank, b: Rank| RoundView {
        player_hand: [card(a), Card { rank: b, suit: Suit::Heart }],
        dealer_upcard: card(Rank::Nine),
        natural: NaturalOutcome::None,
    };
    let split_enabled = |view: &RoundView| -> bool {
        to_round_state(view, ScoreState::default())["buttons"]["split"] == true
    };

    assert!(split_enabled(&pair_view(Rank::Eight, Rank::Eight)));
    assert!(split_enabled(&pair_view(Rank::King, Rank::Ten)));
    assert!(!split_enabled(&pair_view(Rank::Ace, Rank::Nine)));
    assert!(!split_enabled(&pair_view(Rank::King, Rank::Five)));
}

#[test]
fn natural_round_locks_actions() {
    let view = RoundView {
        player_hand: [card(Rank::Ace), card(Rank::King)],
        dealer_upcard: card(Rank::Six),
        natural: NaturalOutcome::PlayerBlackjack,
    };
    let state = to_round_state(&view, ScoreState::default());

    assert_eq!(state["evaluation"]["header"], "BLACKJACK!");
    assert_eq!(state["evaluation"]["natural"], "player blackjack");
    assert_eq!(state["buttons"]["hit"], false);
    assert_eq!(state["buttons"]["split"], false);
    assert_eq!(state["buttons"]["deal"], true);
}

#[test]
fn decision_state_strings_match_the_client() {
    let right = DecisionResult {
        recommended: Action::Stand,
        was_correct: true,
        score: ScoreState { correct: 1, total: 1 },
    };
    let state = to_decision_state(&right);
    assert_eq!(state["evaluation"]["header"], "Correct!");
    assert_eq!(
        state["evaluation"]["detail"],
        "You always want to stand in this situation"
    );
    assert_eq!(state["stats"]["game_score"], "Score: 1/1");
    assert_eq!(state["stats"]["win_percentage"], "100%");
    assert_eq!(state["buttons"]["deal"], true);

    let wrong = DecisionResult {
        recommended: Action::DoubleDown,
        was_correct: false,
        score: ScoreState { correct: 1, total: 2 },
    };
    let state = to_decision_state(&wrong);
    assert_eq!(state["evaluation"]["header"], "Incorrect.");
    assert_eq!(
        state["evaluation"]["detail"],
        "The correct action was to double down."
    );
    assert_eq!(state["stats"]["win_percentage"], "50%");
}

// ── serialization ────────────────────────────────────────────────────────────

#[test]
fn action_names_round_trip_the_client_strings() {
    assert_eq!(serde_json::to_string(&Action::DoubleDown).unwrap(), "\"double down\"");
    assert_eq!(
        serde_json::from_str::<Action>("\"double down\"").unwrap(),
        Action::DoubleDown
    );
    for action in Action::ALL {
        assert_eq!(Action::from_name(&action.to_string()), Some(action));
    }
    assert_eq!(Action::from_name("fold"), None);
    assert_eq!(Action::from_name("Double Down"), None);
}
