//! Static card catalog.
//!
//! The Major Arcana are keyed by numeral, the Minor Arcana by suit and rank.
//! Every lookup is an exhaustive `match`, so a key without a title or image
//! cannot exist. Numerals, titles and image filenames follow the published
//! image set, which pairs "VIII Justice" with the Strength artwork and
//! "XI Strength" with the Justice artwork.

use serde::{Deserialize, Serialize};

/// One of the 22 Major Arcana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MajorArcana {
    /// The Fool (unnumbered).
    Fool,
    /// I.
    Magician,
    /// II.
    Papess,
    /// III.
    Empress,
    /// IV.
    Emperor,
    /// V.
    Hierophant,
    /// VI.
    Lovers,
    /// VII.
    Chariot,
    /// VIII.
    Justice,
    /// IX.
    Hermit,
    /// X.
    WheelOfFortune,
    /// XI.
    Strength,
    /// XII.
    HangedMan,
    /// XIII.
    Death,
    /// XIV.
    Temperance,
    /// XV.
    Devil,
    /// XVI.
    Tower,
    /// XVII.
    Star,
    /// XVIII.
    Moon,
    /// XIX.
    Sun,
    /// XX.
    LastJudgment,
    /// XXI.
    World,
}

impl MajorArcana {
    /// Every Major Arcana card, The Fool first.
    pub const ALL: [Self; 22] = [
        Self::Fool,
        Self::Magician,
        Self::Papess,
        Self::Empress,
        Self::Emperor,
        Self::Hierophant,
        Self::Lovers,
        Self::Chariot,
        Self::Justice,
        Self::Hermit,
        Self::WheelOfFortune,
        Self::Strength,
        Self::HangedMan,
        Self::Death,
        Self::Temperance,
        Self::Devil,
        Self::Tower,
        Self::Star,
        Self::Moon,
        Self::Sun,
        Self::LastJudgment,
        Self::World,
    ];

    /// The catalog key: a roman numeral, or `"_"` for The Fool.
    pub fn numeral(self) -> &'static str {
        match self {
            Self::Fool => "_",
            Self::Magician => "I",
            Self::Papess => "II",
            Self::Empress => "III",
            Self::Emperor => "IV",
            Self::Hierophant => "V",
            Self::Lovers => "VI",
            Self::Chariot => "VII",
            Self::Justice => "VIII",
            Self::Hermit => "IX",
            Self::WheelOfFortune => "X",
            Self::Strength => "XI",
            Self::HangedMan => "XII",
            Self::Death => "XIII",
            Self::Temperance => "XIV",
            Self::Devil => "XV",
            Self::Tower => "XVI",
            Self::Star => "XVII",
            Self::Moon => "XVIII",
            Self::Sun => "XIX",
            Self::LastJudgment => "XX",
            Self::World => "XXI",
        }
    }

    /// The card's proper name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Fool => "The Fool",
            Self::Magician => "The Magician",
            Self::Papess => "The Papess",
            Self::Empress => "The Empress",
            Self::Emperor => "The Emperor",
            Self::Hierophant => "The Heirophant",
            Self::Lovers => "The Lovers",
            Self::Chariot => "The Chariot",
            Self::Justice => "Justice",
            Self::Hermit => "The Hermit",
            Self::WheelOfFortune => "The Wheel Of Fortune",
            Self::Strength => "Strength",
            Self::HangedMan => "The Hanged Man",
            Self::Death => "Death",
            Self::Temperance => "Temperance",
            Self::Devil => "The Devil",
            Self::Tower => "The Tower",
            Self::Star => "The Star",
            Self::Moon => "The Moon",
            Self::Sun => "The Sun",
            Self::LastJudgment => "The Last Judgment",
            Self::World => "The World",
        }
    }

    /// Image filename for this card.
    pub fn image(self) -> &'static str {
        match self {
            Self::Fool => "RWS_Tarot_00_Fool.jpg",
            Self::Magician => "RWS_Tarot_01_Magician.jpg",
            Self::Papess => "RWS_Tarot_02_High_Priestess.jpg",
            Self::Empress => "RWS_Tarot_03_Empress.jpg",
            Self::Emperor => "RWS_Tarot_04_Emperor.jpg",
            Self::Hierophant => "RWS_Tarot_05_Hierophant.jpg",
            Self::Lovers => "RWS_Tarot_06_Lovers.jpg",
            Self::Chariot => "RWS_Tarot_07_Chariot.jpg",
            Self::Justice => "RWS_Tarot_08_Strength.jpg",
            Self::Hermit => "RWS_Tarot_09_Hermit.jpg",
            Self::WheelOfFortune => "RWS_Tarot_10_Wheel_of_Fortune.jpg",
            Self::Strength => "RWS_Tarot_11_Justice.jpg",
            Self::HangedMan => "RWS_Tarot_12_Hanged_Man.jpg",
            Self::Death => "RWS_Tarot_13_Death.jpg",
            Self::Temperance => "RWS_Tarot_14_Temperance.jpg",
            Self::Devil => "RWS_Tarot_15_Devil.jpg",
            Self::Tower => "RWS_Tarot_16_Tower.jpg",
            Self::Star => "RWS_Tarot_17_Star.jpg",
            Self::Moon => "RWS_Tarot_18_Moon.jpg",
            Self::Sun => "RWS_Tarot_19_Sun.jpg",
            Self::LastJudgment => "RWS_Tarot_20_Judgement.jpg",
            Self::World => "RWS_Tarot_21_World.jpg",
        }
    }
}

/// A Minor Arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suit {
    /// Cups.
    Cups,
    /// Wands.
    Wands,
    /// Swords.
    Swords,
    /// Pentacles.
    Pentacles,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Cups, Self::Wands, Self::Swords, Self::Pentacles];

    /// Key used as the image filename prefix.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cups => "Cups",
            Self::Wands => "Wands",
            Self::Swords => "Swords",
            Self::Pentacles => "Pents",
        }
    }

    /// Display name of the suit.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cups => "Cups",
            Self::Wands => "Wands",
            Self::Swords => "Swords",
            Self::Pentacles => "Pentacles",
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A Minor Arcana rank. There is no Jack: the court is Page, Knight, Queen, King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rank {
    /// 01.
    Ace,
    /// 02.
    Two,
    /// 03.
    Three,
    /// 04.
    Four,
    /// 05.
    Five,
    /// 06.
    Six,
    /// 07.
    Seven,
    /// 08.
    Eight,
    /// 09.
    Nine,
    /// 10.
    Ten,
    /// 11.
    Page,
    /// 12.
    Knight,
    /// 13.
    Queen,
    /// 14.
    King,
}

impl Rank {
    /// All fourteen ranks, Ace to King.
    pub const ALL: [Self; 14] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Page,
        Self::Knight,
        Self::Queen,
        Self::King,
    ];

    /// Two-digit key used in image filenames ("01" to "14").
    pub fn key(self) -> &'static str {
        match self {
            Self::Ace => "01",
            Self::Two => "02",
            Self::Three => "03",
            Self::Four => "04",
            Self::Five => "05",
            Self::Six => "06",
            Self::Seven => "07",
            Self::Eight => "08",
            Self::Nine => "09",
            Self::Ten => "10",
            Self::Page => "11",
            Self::Knight => "12",
            Self::Queen => "13",
            Self::King => "14",
        }
    }

    /// Word name of the rank.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Page => "Page",
            Self::Knight => "Knight",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Image filename for a Minor Arcana card.
///
/// Every card uses `<suit key><rank key>.jpg` except the Nine of Wands,
/// which ships under its own name.
pub fn minor_image(suit: Suit, rank: Rank) -> String {
    match (suit, rank) {
        (Suit::Wands, Rank::Nine) => "Tarot_Nine_of_Wands.jpg".to_string(),
        _ => format!("{}{}.jpg", suit.key(), rank.key()),
    }
}
