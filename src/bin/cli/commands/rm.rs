use anyhow::{bail, Result};

use crate::app::App;

pub fn run(app: &mut App, set_name: &str, card_number: Option<usize>) -> Result<()> {
    let set = app.find_set(set_name)?;

    match card_number {
        Some(number) => {
            if number == 0 || number > set.cards.len() {
                bail!(
                    "No card {} in set '{}' ({} cards)",
                    number,
                    set.name,
                    set.cards.len()
                );
            }
            let card_id = set.cards[number - 1].id;
            app.sets.delete_card(set.id, card_id)?;
            println!("Deleted card {} from '{}'", number, set.name);
        }
        None => {
            app.sets.delete_set(set.id)?;
            let cards = set.cards.len();
            let plural = if cards == 1 { "card" } else { "cards" };
            println!("Deleted set '{}' and its {} {}", set.name, cards, plural);
        }
    }

    Ok(())
}
