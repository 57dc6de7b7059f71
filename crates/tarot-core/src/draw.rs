//! Draw requests, draw selection and the full draw pipeline.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::deck::{Deck, DeckVariant};
use crate::error::DeckResult;
use crate::reversal::{ReversalMode, apply_reversal};
use crate::shuffle::shuffle;

/// Number of cards drawn when the request gives no usable count.
pub const DEFAULT_DRAW_COUNT: usize = 8;

/// Message attached to a draw that asked for more cards than the deck holds.
pub const NO_MORE_CARDS_MESSAGE: &str = "There are no more cards to display.";

/// Parameters of a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    /// Which cards make up the deck.
    pub variant: DeckVariant,
    /// Whether cards may come up reversed.
    pub reversal: ReversalMode,
    /// Requested number of cards. `None` or `0` means [`DEFAULT_DRAW_COUNT`].
    pub num_cards: Option<usize>,
}

impl DrawRequest {
    /// An upright draw of the default size from the given variant.
    pub fn new(variant: DeckVariant) -> Self {
        Self {
            variant,
            reversal: ReversalMode::UprightOnly,
            num_cards: None,
        }
    }

    /// Set the reversal mode.
    pub fn with_reversal(mut self, reversal: ReversalMode) -> Self {
        self.reversal = reversal;
        self
    }

    /// Set the requested number of cards.
    pub fn with_count(mut self, num_cards: usize) -> Self {
        self.num_cards = Some(num_cards);
        self
    }

    /// Build a request from form labels.
    ///
    /// Fails only when the deck label is not a known variant. The reversal
    /// label and count are normalized, never rejected.
    pub fn parse(deck: &str, reversal: &str, num_cards: Option<usize>) -> DeckResult<Self> {
        Ok(Self {
            variant: deck.parse()?,
            reversal: ReversalMode::parse(reversal),
            num_cards,
        })
    }
}

/// Cards selected by a draw.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    /// The drawn cards, in shuffled order.
    pub drawn_cards: Vec<Card>,
    /// Informational message; empty unless the draw was truncated.
    pub message: String,
}

impl DrawResult {
    /// Returns true if fewer cards were drawn than requested.
    pub fn is_truncated(&self) -> bool {
        !self.message.is_empty()
    }

    /// Number of drawn cards.
    pub fn len(&self) -> usize {
        self.drawn_cards.len()
    }

    /// Returns true if no cards were drawn.
    pub fn is_empty(&self) -> bool {
        self.drawn_cards.is_empty()
    }
}

/// Take the first `requested` cards of an already shuffled deck.
///
/// A missing or zero count becomes [`DEFAULT_DRAW_COUNT`]. A count larger
/// than the deck is clamped to the deck size and the result carries
/// [`NO_MORE_CARDS_MESSAGE`].
pub fn select_draw(deck: Deck, requested: Option<usize>) -> DrawResult {
    let requested = requested
        .filter(|n| *n >= 1)
        .unwrap_or(DEFAULT_DRAW_COUNT);

    let (count, message) = if requested > deck.len() {
        (deck.len(), NO_MORE_CARDS_MESSAGE.to_string())
    } else {
        (requested, String::new())
    };

    let mut drawn_cards = deck.into_cards();
    drawn_cards.truncate(count);
    DrawResult {
        drawn_cards,
        message,
    }
}

/// Run a complete draw: build, reverse if requested, shuffle, select.
pub fn draw(request: &DrawRequest, rng: &mut StdRng) -> DrawResult {
    let mut deck = Deck::build(request.variant);
    if request.reversal.includes_reversed() {
        deck = apply_reversal(deck, rng);
    }
    shuffle(&mut deck, rng);
    select_draw(deck, request.num_cards)
}
