//! Integration tests for the draw pipeline.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use tarot_core::{
    CardKey, DeckError, DeckVariant, DrawConfig, DrawRequest, NO_MORE_CARDS_MESSAGE,
    ReversalMode, build_deck, draw,
};

#[test]
fn major_upright_five() {
    let mut rng = StdRng::seed_from_u64(42);
    let request = DrawRequest::new(DeckVariant::MajorOnly)
        .with_reversal(ReversalMode::UprightOnly)
        .with_count(5);
    let result = draw(&request, &mut rng);

    assert_eq!(result.drawn_cards.len(), 5);
    assert!(result.drawn_cards.iter().all(|c| !c.reversed));
    assert!(result.drawn_cards.iter().all(|c| c.is_major()));
    assert_eq!(result.message, "");
}

#[test]
fn full_deck_with_reversals_eight() {
    let mut rng = StdRng::seed_from_u64(7);
    let request = DrawRequest::new(DeckVariant::FullDeck)
        .with_reversal(ReversalMode::UprightAndReversed)
        .with_count(8);
    let result = draw(&request, &mut rng);

    assert_eq!(result.drawn_cards.len(), 8);
    assert_eq!(result.message, "");
}

#[test]
fn reversals_appear_across_many_draws() {
    let mut rng = StdRng::seed_from_u64(1234);
    let request = DrawRequest::new(DeckVariant::FullDeck)
        .with_reversal(ReversalMode::UprightAndReversed)
        .with_count(8);

    let mut reversed = 0usize;
    let mut total = 0usize;
    for _ in 0..250 {
        let result = draw(&request, &mut rng);
        reversed += result.drawn_cards.iter().filter(|c| c.reversed).count();
        total += result.drawn_cards.len();
    }
    let fraction = reversed as f64 / total as f64;
    assert!((0.45..=0.55).contains(&fraction), "fraction {fraction}");
}

#[test]
fn default_count_is_eight() {
    let mut rng = StdRng::seed_from_u64(3);
    let result = draw(&DrawRequest::new(DeckVariant::MajorOnly), &mut rng);
    assert_eq!(result.drawn_cards.len(), 8);

    let request = DrawRequest::parse("Minor Arcana only", "Upright only", Some(0)).unwrap();
    let result = draw(&request, &mut rng);
    assert_eq!(result.drawn_cards.len(), 8);
}

#[test]
fn too_many_cards_returns_whole_deck() {
    let mut rng = StdRng::seed_from_u64(8);
    let request = DrawRequest::new(DeckVariant::MajorOnly).with_count(100);
    let result = draw(&request, &mut rng);

    assert_eq!(result.drawn_cards.len(), 22);
    assert_eq!(result.message, NO_MORE_CARDS_MESSAGE);

    let keys: HashSet<CardKey> = result.drawn_cards.iter().map(|c| c.key).collect();
    assert_eq!(keys.len(), 22);
}

#[test]
fn invalid_variant_is_rejected() {
    assert!(matches!(
        build_deck("Invalid Size"),
        Err(DeckError::InvalidVariant(_))
    ));
    assert!(matches!(
        DrawRequest::parse("Invalid Deck", "Upright and reversed", Some(3)),
        Err(DeckError::InvalidVariant(_))
    ));
}

#[test]
fn deck_sizes_from_labels() {
    assert_eq!(build_deck("Major Arcana only").unwrap().len(), 22);
    assert_eq!(build_deck("Minor Arcana only").unwrap().len(), 56);
    assert_eq!(build_deck("Full Deck").unwrap().len(), 78);
}

#[test]
fn unseeded_draws_vary() {
    let config = DrawConfig::default();
    let request = DrawRequest::new(DeckVariant::FullDeck).with_count(78);
    let first = draw(&request, &mut config.rng());
    let differs = (0..10).any(|_| draw(&request, &mut config.rng()) != first);
    assert!(differs);
}

#[test]
fn seeded_config_reproduces_draw() {
    let config = DrawConfig::default().with_seed(77);
    let request = DrawRequest::new(DeckVariant::FullDeck)
        .with_reversal(ReversalMode::UprightAndReversed)
        .with_count(12);
    assert_eq!(
        draw(&request, &mut config.rng()),
        draw(&request, &mut config.rng())
    );
}
