//! Uniform in-place shuffling.
//!
//! Forward Fisher-Yates: for each position `i` from first to last, pick `j`
//! uniformly from `0..=i` and swap. The workspace builds `rand` with its
//! `unbiased` feature, so `random_range` samples the bound exactly instead
//! of with the small bias of its default method, and every one of the `n!`
//! orderings is equally likely.

use rand::Rng;
use rand::rngs::StdRng;

use crate::deck::Deck;

/// Shuffle any slice in place.
pub fn shuffle_slice<T>(items: &mut [T], rng: &mut StdRng) {
    for i in 0..items.len() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a deck in place.
pub fn shuffle(deck: &mut Deck, rng: &mut StdRng) {
    shuffle_slice(deck.cards_mut(), rng);
}
