//! Per-card reversal assignment.
//!
//! Each card is an independent fair coin flip: one random bit per card,
//! no state carried from one card to the next.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::deck::Deck;

/// Whether reversed cards are included in a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReversalMode {
    /// Every card is drawn upright.
    #[serde(rename = "Upright only")]
    UprightOnly,
    /// Each card is independently upright or reversed.
    #[default]
    #[serde(rename = "Upright and reversed")]
    UprightAndReversed,
}

impl ReversalMode {
    /// Both modes, in the order they are offered to users.
    pub const ALL: [Self; 2] = [Self::UprightOnly, Self::UprightAndReversed];

    /// Parse a mode from a form label or alias.
    ///
    /// Only the reversal labels enable reversal; anything else, including
    /// unrecognized input, is upright only.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "upright and reversed" | "reversed" | "both" => Self::UprightAndReversed,
            _ => Self::UprightOnly,
        }
    }

    /// Match the canonical reversal label exactly. Any other value, aliases
    /// included, is upright only.
    pub fn from_label(s: &str) -> Self {
        if s == Self::UprightAndReversed.label() {
            Self::UprightAndReversed
        } else {
            Self::UprightOnly
        }
    }

    /// Canonical form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::UprightOnly => "Upright only",
            Self::UprightAndReversed => "Upright and reversed",
        }
    }

    /// Returns true if this mode assigns reversals.
    pub fn includes_reversed(self) -> bool {
        self == Self::UprightAndReversed
    }
}

impl std::fmt::Display for ReversalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Return a new deck where each card is reversed with probability 1/2.
pub fn apply_reversal(deck: Deck, rng: &mut StdRng) -> Deck {
    deck.into_iter()
        .map(|card| card.with_reversed(rng.random()))
        .collect()
}
