//! Tarot deck engine.
//!
//! Builds the 78-card tarot deck (or the Major or Minor Arcana on their own)
//! from a static catalog, optionally assigns reversals, shuffles it and
//! draws a prefix of the shuffled deck. Every draw is independent: nothing
//! is shared between draws apart from the immutable catalog.

pub mod card;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod reversal;
pub mod shuffle;

pub use card::{Card, CardKey};
pub use catalog::{MajorArcana, Rank, Suit};
pub use config::DrawConfig;
pub use deck::{Deck, DeckVariant, build_deck};
pub use draw::{
    DEFAULT_DRAW_COUNT, DrawRequest, DrawResult, NO_MORE_CARDS_MESSAGE, draw, select_draw,
};
pub use error::{DeckError, DeckResult};
pub use reversal::{ReversalMode, apply_reversal};
pub use shuffle::{shuffle, shuffle_slice};
