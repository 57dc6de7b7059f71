//! JSON request/response adapter.
//!
//! Accepts the same body as the hosted draw endpoint and answers with the
//! same response and error shapes, without any network transport. Labels
//! are matched exactly here; `tarot draw` is the place for aliases.

use std::io::Read;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use tarot_core::{Card, DeckVariant, DrawConfig, DrawRequest, DrawResult, ReversalMode, draw};

/// Incoming request body. Every field may be missing or `null`, so that
/// absent values are reported separately from malformed JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRequest {
    #[serde(default)]
    deck_size: Option<String>,
    #[serde(default)]
    deck_reverse: Option<String>,
    #[serde(default)]
    num_cards: Option<i64>,
}

/// A drawn card as the hosted client expects it: `reversed` is the
/// `"(Reversed)"` label or an empty string, and there is no catalog key.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct WireCard {
    number: String,
    #[serde(rename = "nameSuit")]
    name_suit: String,
    reversed: &'static str,
    image: String,
}

impl From<Card> for WireCard {
    fn from(card: Card) -> Self {
        Self {
            reversed: card.orientation_label(),
            number: card.rank_or_numeral,
            name_suit: card.suit_or_title,
            image: card.image_reference,
        }
    }
}

/// Successful response body.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireResponse {
    drawn_cards: Vec<WireCard>,
    message: String,
}

impl From<DrawResult> for WireResponse {
    fn from(result: DrawResult) -> Self {
        Self {
            drawn_cards: result.drawn_cards.into_iter().map(WireCard::from).collect(),
            message: result.message,
        }
    }
}

/// Error response body.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: &'static str,
}

impl ErrorBody {
    const INVALID_REQUEST: Self = Self {
        error: "invalid_request",
        message: "Invalid JSON in request body",
    };

    const MISSING_PARAMETERS: Self = Self {
        error: "missing_parameters",
        message: "deckSize and deckReverse are required",
    };

    const INVALID_DECK_OPTIONS: Self = Self {
        error: "invalid_deck_options",
        message: "Invalid deck size or reverse option",
    };
}

pub fn run(seed: Option<u64>, image_base_url: Option<&str>) -> Result<(), String> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| format!("cannot read request from stdin: {e}"))?;

    let mut config = DrawConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    match handle(&body, &mut config.rng(), image_base_url) {
        Ok(response) => {
            let out = serde_json::to_string(&response)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{out}");
            Ok(())
        }
        Err(err) => {
            let out = serde_json::to_string(&err)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{out}");
            Err(err.message.to_string())
        }
    }
}

/// Decode a request body, run the draw and resolve image URLs.
fn handle(
    body: &str,
    rng: &mut StdRng,
    image_base_url: Option<&str>,
) -> Result<WireResponse, ErrorBody> {
    let wire: WireRequest =
        serde_json::from_str(body).map_err(|_| ErrorBody::INVALID_REQUEST)?;

    let deck_size = wire.deck_size.unwrap_or_default();
    let deck_reverse = wire.deck_reverse.unwrap_or_default();
    if deck_size.is_empty() || deck_reverse.is_empty() {
        return Err(ErrorBody::MISSING_PARAMETERS);
    }

    let variant =
        DeckVariant::from_label(&deck_size).ok_or(ErrorBody::INVALID_DECK_OPTIONS)?;
    let request = DrawRequest {
        variant,
        reversal: ReversalMode::from_label(&deck_reverse),
        num_cards: wire
            .num_cards
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| *n >= 1),
    };

    let mut result = draw(&request, rng);
    super::resolve_images(&mut result, image_base_url);
    Ok(result.into())
}
