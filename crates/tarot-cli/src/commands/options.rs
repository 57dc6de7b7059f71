use colored::Colorize;

use tarot_core::{DEFAULT_DRAW_COUNT, DeckVariant, ReversalMode};

pub fn run() -> Result<(), String> {
    println!("  {}", "Which cards would you like to use?".bold());
    for variant in DeckVariant::ALL {
        println!(
            "    {:<20} {:>2} cards  {}",
            variant.label(),
            variant.card_count(),
            format!("(--deck {})", variant.alias()).dimmed()
        );
    }
    println!();

    println!("  {}", "Would you like to include reversed cards?".bold());
    for mode in ReversalMode::ALL {
        println!("    {}", mode.label());
    }
    println!();

    println!("  {}", "How many cards would you like to draw?".bold());
    println!("    at least 1 (default {DEFAULT_DRAW_COUNT})");

    Ok(())
}
