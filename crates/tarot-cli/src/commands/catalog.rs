use comfy_table::{ContentArrangement, Table};

use tarot_core::Deck;

pub fn run(deck: &str) -> Result<(), String> {
    let variant = super::parse_variant(deck)?;
    let deck = Deck::build(variant);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Card", "Image"]);

    for card in deck.iter() {
        let name = if card.is_major() {
            card.suit_or_title.clone()
        } else {
            format!("{} {}", card.rank_or_numeral, card.suit_or_title)
        };
        table.add_row(vec![card.key.to_string(), name, card.image_reference.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} cards ({})", deck.len(), variant);

    Ok(())
}
