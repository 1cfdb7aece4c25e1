use anyhow::{bail, Result};

use crate::app::App;

pub fn run(
    app: &mut App,
    set_name: &str,
    card_number: usize,
    question: &str,
    answer: &str,
) -> Result<()> {
    let set = app.find_set(set_name)?;

    if card_number == 0 || card_number > set.cards.len() {
        bail!(
            "No card {} in set '{}' ({} cards)",
            card_number,
            set.name,
            set.cards.len()
        );
    }

    let card_id = set.cards[card_number - 1].id;
    match app.sets.update_card(set.id, card_id, question, answer)? {
        Some(card) => println!("Updated card {}: {}", card_number, card.question),
        None => bail!("Card {} was removed before it could be updated", card_number),
    }

    Ok(())
}
