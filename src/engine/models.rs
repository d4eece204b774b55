use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

/// Suit names follow the card image asset set, where clubs appear as "clover".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Diamond,
    Clover,
    Heart,
    Spade,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamond, Suit::Clover, Suit::Heart, Suit::Spade];

    /// Full lowercase name, as used in card image asset paths.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Diamond => "diamond",
            Suit::Clover  => "clover",
            Suit::Heart   => "heart",
            Suit::Spade   => "spade",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suit::Diamond => write!(f, "d"),
            Suit::Clover  => write!(f, "c"),
            Suit::Heart   => write!(f, "h"),
            Suit::Spade   => write!(f, "s"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Short label: "a", "2".."10", "j", "q", "k".
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace   => "a",
            Rank::Two   => "2",
            Rank::Three => "3",
            Rank::Four  => "4",
            Rank::Five  => "5",
            Rank::Six   => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine  => "9",
            Rank::Ten   => "10",
            Rank::Jack  => "j",
            Rank::Queen => "q",
            Rank::King  => "k",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

// ---------------------------------------------------------------------------
// Player actions
// ---------------------------------------------------------------------------

/// The five moves a player can declare on an opening hand.
///
/// The serialized and displayed forms are the lowercase phrases clients send
/// and show verbatim ("double down" keeps its space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Hit,
    Stand,
    #[serde(rename = "double down")]
    DoubleDown,
    Split,
    Surrender,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Hit,
        Action::Stand,
        Action::DoubleDown,
        Action::Split,
        Action::Surrender,
    ];

    /// Parse a client action phrase; `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Action> {
        match name {
            "hit"         => Some(Action::Hit),
            "stand"       => Some(Action::Stand),
            "double down" => Some(Action::DoubleDown),
            "split"       => Some(Action::Split),
            "surrender"   => Some(Action::Surrender),
            _             => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Hit        => "hit",
            Action::Stand      => "stand",
            Action::DoubleDown => "double down",
            Action::Split      => "split",
            Action::Surrender  => "surrender",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Strategy keys
// ---------------------------------------------------------------------------

/// Canonical form of a player's opening hand, as the strategy chart keys it.
///
/// Precedence when classifying: a pair of aces beats the pair and soft rules,
/// any other pair beats the soft rule, and everything else is hard or soft by
/// whether an ace is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKey {
    /// Hard total. Displays folded into the chart buckets: totals of 8 or
    /// less read "8-", totals of 17 or more read "17+".
    Hard(u8),
    /// Ace plus a kicker worth this many points; displays as "a,{kicker}".
    Soft(u8),
    /// Pair of cards each worth this many points; displays as "{v},{v}".
    /// Ten-valued pairs fold together, so "k,k" and "10,j" both read "10,10".
    Pair(u8),
    /// Pair of aces; displays as "a,a".
    AcePair,
}

impl fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PlayerKey::Hard(total) if total <= 8  => write!(f, "8-"),
            PlayerKey::Hard(total) if total >= 17 => write!(f, "17+"),
            PlayerKey::Hard(total)                => write!(f, "{}", total),
            PlayerKey::Soft(kicker)               => write!(f, "a,{}", kicker),
            PlayerKey::Pair(value)                => write!(f, "{0},{0}", value),
            PlayerKey::AcePair                    => write!(f, "a,a"),
        }
    }
}

/// Canonical form of the dealer's up-card: its point value, with the ace kept
/// distinct because the chart gives it its own column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DealerKey {
    /// Up-card worth this many points (2-10; tens and faces fold to 10).
    Value(u8),
    Ace,
}

impl fmt::Display for DealerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DealerKey::Value(value) => write!(f, "{}", value),
            DealerKey::Ace          => write!(f, "a"),
        }
    }
}

// ---------------------------------------------------------------------------
// Round and score types
// ---------------------------------------------------------------------------

/// Outcome of the opening deal, before any decision is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaturalOutcome {
    /// Neither side holds a two-card 21; the round proceeds to a decision.
    None,
    PlayerBlackjack,
    DealerBlackjack,
    /// Both sides hold a natural.
    Push,
}

impl fmt::Display for NaturalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NaturalOutcome::None            => write!(f, "none"),
            NaturalOutcome::PlayerBlackjack => write!(f, "player blackjack"),
            NaturalOutcome::DealerBlackjack => write!(f, "dealer blackjack"),
            NaturalOutcome::Push            => write!(f, "push"),
        }
    }
}

/// What the player sees once a round is dealt: their own two cards and the
/// dealer's up-card. The dealer's hole card stays hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    pub player_hand: [Card; 2],
    pub dealer_upcard: Card,
    pub natural: NaturalOutcome,
}

/// Verdict on one submitted decision, with the score after recording it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    pub recommended: Action,
    pub was_correct: bool,
    pub score: ScoreState,
}

/// Running tally of judged decisions. Naturals never reach a decision, so
/// they leave the tally untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreState {
    pub correct: u32,
    pub total: u32,
}

impl ScoreState {
    /// Record one judged decision.
    pub fn record(&mut self, was_correct: bool) {
        self.total += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    /// Share of correct decisions as a whole percentage, rounded half-up.
    /// An empty tally reads 0%, not NaN.
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.correct) * 100.0 / f64::from(self.total)).round() as u8
    }
}

impl fmt::Display for ScoreState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.percentage())
    }
}

// ---------------------------------------------------------------------------
// Session configuration
// ---------------------------------------------------------------------------

/// Shoe size used when a config does not say otherwise.
pub const DEFAULT_DECKS: u8 = 4;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of 52-card decks shuffled into each round's shoe. Must be ≥ 1.
    pub decks: u8,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { decks: DEFAULT_DECKS, rng_seed: None }
    }
}

impl SessionConfig {
    /// Default shoe with a fixed seed — reproduces the exact same rounds every
    /// run, useful for tests and replayable drills.
    pub fn seeded(seed: u64) -> Self {
        SessionConfig { rng_seed: Some(seed), ..SessionConfig::default() }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong inside the trainer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrainerError {
    /// A shoe cannot be built from zero decks.
    #[error("invalid configuration: deck count must be at least 1, got {0}")]
    InvalidConfiguration(u8),

    /// A draw was requested from a shoe with no cards left.
    #[error("the shoe is empty")]
    EmptyShoe,

    /// No chart row and column matched the normalized hand keys.
    #[error("no strategy entry for player {player} vs dealer {dealer}")]
    LookupMiss { player: PlayerKey, dealer: DealerKey },

    /// Pair detection only makes sense for an opening two-card hand.
    #[error("expected exactly 2 cards, got {0}")]
    InvalidHandSize(usize),

    /// A decision was submitted while no round was awaiting one.
    #[error("no round is awaiting a decision")]
    NoActiveRound,
}
