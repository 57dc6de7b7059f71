//! Card records produced for a draw.

use serde::{Deserialize, Serialize};

use crate::catalog::{MajorArcana, Rank, Suit, minor_image};

/// Catalog key of a card. Determines every display field of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKey {
    /// A Major Arcana card.
    Major(MajorArcana),
    /// A Minor Arcana card.
    Minor {
        /// The card's suit.
        suit: Suit,
        /// The card's rank.
        rank: Rank,
    },
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Major(card) => write!(f, "{}", card.numeral()),
            Self::Minor { suit, rank } => write!(f, "{}{}", suit.key(), rank.key()),
        }
    }
}

/// A single drawn card.
///
/// Each draw gets its own `Card` values copied out of the catalog, so
/// reversing or reordering them never touches another draw.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Catalog key the card was built from.
    pub key: CardKey,
    /// Major numeral ("VII") or minor rank name ("Ace").
    #[serde(rename = "number")]
    pub rank_or_numeral: String,
    /// Major title ("The Chariot") or minor suit phrase ("of Cups").
    #[serde(rename = "nameSuit")]
    pub suit_or_title: String,
    /// Whether the card was drawn upside-down.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reversed: bool,
    /// Image filename, resolved to a URL by the caller.
    #[serde(rename = "image")]
    pub image_reference: String,
}

impl Card {
    /// Build an upright card from its catalog key.
    pub fn from_key(key: CardKey) -> Self {
        match key {
            CardKey::Major(card) => Self {
                key,
                rank_or_numeral: card.numeral().to_string(),
                suit_or_title: card.title().to_string(),
                reversed: false,
                image_reference: card.image().to_string(),
            },
            CardKey::Minor { suit, rank } => Self {
                key,
                rank_or_numeral: rank.name().to_string(),
                suit_or_title: format!("of {}", suit.name()),
                reversed: false,
                image_reference: minor_image(suit, rank),
            },
        }
    }

    /// Build an upright Major Arcana card.
    pub fn major(card: MajorArcana) -> Self {
        Self::from_key(CardKey::Major(card))
    }

    /// Build an upright Minor Arcana card.
    pub fn minor(suit: Suit, rank: Rank) -> Self {
        Self::from_key(CardKey::Minor { suit, rank })
    }

    /// Returns true for Major Arcana cards.
    pub fn is_major(&self) -> bool {
        matches!(self.key, CardKey::Major(_))
    }

    /// `"(Reversed)"` for reversed cards, empty otherwise.
    pub fn orientation_label(&self) -> &'static str {
        if self.reversed { "(Reversed)" } else { "" }
    }

    /// This card with the given orientation.
    pub fn with_reversed(self, reversed: bool) -> Self {
        Self { reversed, ..self }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.rank_or_numeral, self.suit_or_title)?;
        if self.reversed {
            write!(f, " {}", self.orientation_label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_card_fields() {
        let card = Card::major(MajorArcana::Chariot);
        assert_eq!(card.rank_or_numeral, "VII");
        assert_eq!(card.suit_or_title, "The Chariot");
        assert_eq!(card.image_reference, "RWS_Tarot_07_Chariot.jpg");
        assert!(!card.reversed);
        assert!(card.is_major());
    }

    #[test]
    fn minor_card_fields() {
        let card = Card::minor(Suit::Pentacles, Rank::Queen);
        assert_eq!(card.rank_or_numeral, "Queen");
        assert_eq!(card.suit_or_title, "of Pentacles");
        assert_eq!(card.image_reference, "Pents13.jpg");
        assert!(!card.is_major());
    }

    #[test]
    fn key_display() {
        assert_eq!(CardKey::Major(MajorArcana::Fool).to_string(), "_");
        let key = CardKey::Minor {
            suit: Suit::Swords,
            rank: Rank::Ten,
        };
        assert_eq!(key.to_string(), "Swords10");
    }

    #[test]
    fn display_with_orientation() {
        let card = Card::minor(Suit::Cups, Rank::Ace);
        assert_eq!(card.to_string(), "Ace of Cups");
        assert_eq!(card.orientation_label(), "");

        let reversed = card.clone().with_reversed(true);
        assert_eq!(reversed.to_string(), "Ace of Cups (Reversed)");
        assert_eq!(reversed.orientation_label(), "(Reversed)");
        assert!(!card.reversed);
        assert_eq!(reversed.with_reversed(false), card);
    }

    #[test]
    fn serializes_with_wire_names() {
        let card = Card::major(MajorArcana::Sun);
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["number"], "XIX");
        assert_eq!(json["nameSuit"], "The Sun");
        assert_eq!(json["image"], "RWS_Tarot_19_Sun.jpg");
        assert!(json.get("reversed").is_none());

        let json = serde_json::to_value(card.with_reversed(true)).unwrap();
        assert_eq!(json["reversed"], true);
    }

    #[test]
    fn deserializes_without_reversed_field() {
        let card = Card::minor(Suit::Wands, Rank::Nine);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, card);
    }
}
