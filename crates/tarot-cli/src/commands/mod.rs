pub mod catalog;
pub mod draw;
pub mod options;
pub mod request;

use tarot_core::{DeckError, DeckVariant, DrawResult};

/// Parse a deck variant argument into a user-facing error message.
fn parse_variant(deck: &str) -> Result<DeckVariant, String> {
    deck.parse::<DeckVariant>().map_err(variant_error)
}

/// Render a deck error with the accepted aliases appended.
fn variant_error(e: DeckError) -> String {
    let choices: Vec<_> = DeckVariant::ALL.iter().map(|v| v.alias()).collect();
    format!("{e}. Use: {}", choices.join(", "))
}

/// Resolve an image filename against the configured base URL.
///
/// Without a base URL the bare filename is returned.
fn image_url(base: Option<&str>, image: &str) -> String {
    match base {
        Some(base) => format!("{}/images/{image}", base.trim_end_matches('/')),
        None => image.to_string(),
    }
}

/// Rewrite every drawn card's image reference into a URL.
fn resolve_images(result: &mut DrawResult, base: Option<&str>) {
    for card in &mut result.drawn_cards {
        card.image_reference = image_url(base, &card.image_reference);
    }
}
