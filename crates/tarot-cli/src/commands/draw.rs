use colored::Colorize;

use tarot_core::{DrawConfig, DrawRequest, DrawResult, draw};

pub fn run(
    deck: &str,
    reversal: &str,
    count: Option<usize>,
    seed: Option<u64>,
    json: bool,
    image_base_url: Option<&str>,
) -> Result<(), String> {
    let request = DrawRequest::parse(deck, reversal, count).map_err(super::variant_error)?;

    let mut config = DrawConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut result = draw(&request, &mut config.rng());
    super::resolve_images(&mut result, image_base_url);

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
    } else {
        print_text(&request, &result);
    }

    Ok(())
}

fn print_text(request: &DrawRequest, result: &DrawResult) {
    println!(
        "  {} {}",
        request.variant.label().bold(),
        format!("({}, {} cards)", request.reversal, result.len()).dimmed()
    );
    println!();

    for (i, card) in result.drawn_cards.iter().enumerate() {
        let name = format!("{} {}", card.rank_or_numeral, card.suit_or_title);
        if card.reversed {
            println!(
                "  {:>2}. {} {}",
                i + 1,
                name,
                card.orientation_label().red()
            );
        } else {
            println!("  {:>2}. {}", i + 1, name);
        }
        println!("      {}", card.image_reference.dimmed());
    }

    if result.is_truncated() {
        println!();
        println!("  {}", result.message.yellow());
    }
}
