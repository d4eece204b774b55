use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::evaluator::hand_value;
use crate::engine::models::{
    Action, Card, DecisionResult, NaturalOutcome, RoundView, ScoreState, SessionConfig,
    TrainerError,
};
use crate::engine::shoe::Shoe;
use crate::engine::strategy::recommended_action;

/// One dealt round. The hole card is consumed by the natural check at deal
/// time and plays no further part.
#[derive(Debug)]
struct Round {
    player: [Card; 2],
    dealer_up: Card,
    awaiting_decision: bool,
}

/// A drill session: deals rounds, judges declared actions against the chart,
/// and keeps the running score.
///
/// Owns its random source and score; nothing is shared across sessions.
#[derive(Debug)]
pub struct TrainingSession {
    decks: u8,
    rng: StdRng,
    round: Option<Round>,
    score: ScoreState,
}

impl TrainingSession {
    pub fn new(config: SessionConfig) -> Result<Self, TrainerError> {
        if config.decks == 0 {
            return Err(TrainerError::InvalidConfiguration(config.decks));
        }
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Ok(TrainingSession {
            decks: config.decks,
            rng,
            round: None,
            score: ScoreState::default(),
        })
    }

    /// Deal a new round from a freshly shuffled shoe.
    ///
    /// Draws player card, player card, dealer up-card, dealer hole card, in
    /// that fixed order, then checks for naturals. A round that opens on a
    /// natural is already resolved: it takes no decision and never touches
    /// the score.
    pub fn new_round(&mut self) -> Result<RoundView, TrainerError> {
        let mut shoe = Shoe::new_shuffled(self.decks, &mut self.rng)?;
        let player = [shoe.draw()?, shoe.draw()?];
        let dealer_up = shoe.draw()?;
        let dealer_hole = shoe.draw()?;

        let natural = natural_outcome(&player, &[dealer_up, dealer_hole]);
        if natural != NaturalOutcome::None {
            log::debug!("round opened on a natural: {natural}");
        }

        self.round = Some(Round {
            player,
            dealer_up,
            awaiting_decision: natural == NaturalOutcome::None,
        });
        Ok(RoundView { player_hand: player, dealer_upcard: dealer_up, natural })
    }

    /// Judge a declared action against the chart and record the result.
    ///
    /// Fails with `NoActiveRound` when nothing is awaiting a decision: before
    /// the first deal, after a round was already answered, or when the round
    /// opened on a natural.
    pub fn submit_action(&mut self, declared: Action) -> Result<DecisionResult, TrainerError> {
        let round = match self.round.as_mut() {
            Some(round) if round.awaiting_decision => round,
            _ => return Err(TrainerError::NoActiveRound),
        };

        let (recommended, was_correct) = evaluate_decision(round.player, round.dealer_up, declared)?;
        round.awaiting_decision = false;
        self.score.record(was_correct);
        log::debug!("declared {declared}, recommended {recommended}, score {}", self.score);

        Ok(DecisionResult { recommended, was_correct, score: self.score })
    }

    /// The running score.
    pub fn score(&self) -> ScoreState {
        self.score
    }
}

/// Pure decision step: the chart's recommendation and whether `declared`
/// matches it. Score bookkeeping is the caller's explicit follow-up, which
/// keeps this judgable in isolation.
pub fn evaluate_decision(
    player: [Card; 2],
    dealer_upcard: Card,
    declared: Action,
) -> Result<(Action, bool), TrainerError> {
    let recommended = recommended_action(&player, dealer_upcard)?;
    Ok((recommended, declared == recommended))
}

/// Outcome of the opening deal: who, if anyone, holds a two-card 21.
pub fn natural_outcome(player: &[Card], dealer: &[Card]) -> NaturalOutcome {
    match (hand_value(player) == 21, hand_value(dealer) == 21) {
        (true, true)   => NaturalOutcome::Push,
        (true, false)  => NaturalOutcome::PlayerBlackjack,
        (false, true)  => NaturalOutcome::DealerBlackjack,
        (false, false) => NaturalOutcome::None,
    }
}
