//! Deck variants and deck construction.

use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::catalog::{MajorArcana, Rank, Suit};
use crate::error::{DeckError, DeckResult};

/// Which part of the tarot a deck is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeckVariant {
    /// The 22 Major Arcana.
    #[serde(rename = "Major Arcana only")]
    MajorOnly,
    /// The 56 Minor Arcana.
    #[serde(rename = "Minor Arcana only")]
    MinorOnly,
    /// All 78 cards.
    #[default]
    #[serde(rename = "Full Deck")]
    FullDeck,
}

impl DeckVariant {
    /// All variants, in the order they are offered to users.
    pub const ALL: [Self; 3] = [Self::FullDeck, Self::MajorOnly, Self::MinorOnly];

    /// Parse a variant from a form label ("Major Arcana only") or a short
    /// alias ("major"). Case-insensitive; `-` and `_` count as spaces.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "major arcana only" | "major arcana" | "major" => Some(Self::MajorOnly),
            "minor arcana only" | "minor arcana" | "minor" => Some(Self::MinorOnly),
            "full deck" | "full" => Some(Self::FullDeck),
            _ => None,
        }
    }

    /// Match a canonical form label exactly, with no aliases or case folding.
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|variant| variant.label() == s)
    }

    /// Canonical form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MajorOnly => "Major Arcana only",
            Self::MinorOnly => "Minor Arcana only",
            Self::FullDeck => "Full Deck",
        }
    }

    /// Shortest alias accepted by [`DeckVariant::parse`].
    pub fn alias(self) -> &'static str {
        match self {
            Self::MajorOnly => "major",
            Self::MinorOnly => "minor",
            Self::FullDeck => "full",
        }
    }

    /// Number of cards a deck of this variant holds.
    pub fn card_count(self) -> usize {
        let major = MajorArcana::ALL.len();
        let minor = Suit::ALL.len() * Rank::ALL.len();
        match self {
            Self::MajorOnly => major,
            Self::MinorOnly => minor,
            Self::FullDeck => major + minor,
        }
    }
}

impl std::str::FromStr for DeckVariant {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DeckError::InvalidVariant(s.to_string()))
    }
}

impl std::fmt::Display for DeckVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An ordered sequence of cards belonging to a single draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build a fresh, upright deck for the given variant.
    ///
    /// Every catalog entry of the variant appears exactly once. The order is
    /// catalog order; callers shuffle before drawing.
    pub fn build(variant: DeckVariant) -> Self {
        let mut cards = Vec::with_capacity(variant.card_count());
        if matches!(variant, DeckVariant::MajorOnly | DeckVariant::FullDeck) {
            cards.extend(MajorArcana::ALL.into_iter().map(Card::major));
        }
        if matches!(variant, DeckVariant::MinorOnly | DeckVariant::FullDeck) {
            for suit in Suit::ALL {
                cards.extend(Rank::ALL.into_iter().map(|rank| Card::minor(suit, rank)));
            }
        }
        Self { cards }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns true if the deck has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in their current order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Mutable access for in-place reordering.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Consume the deck, returning its cards.
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Build a deck from a variant label, rejecting unknown variants.
pub fn build_deck(variant: &str) -> DeckResult<Deck> {
    let variant: DeckVariant = variant.parse()?;
    Ok(Deck::build(variant))
}
