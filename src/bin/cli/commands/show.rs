use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, set_name: &str, format: &OutputFormat) -> Result<()> {
    let set = app.find_set(set_name)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&set)?);
        }
        OutputFormat::Plain => {
            let cards = set.cards.len();
            let plural = if cards == 1 { "card" } else { "cards" };
            println!("{} ({} {})", set.name, cards, plural);

            if set.cards.is_empty() {
                println!("  (no cards)");
            }
            for (i, card) in set.cards.iter().enumerate() {
                println!("{:3}. Q: {}", i + 1, card.question);
                println!("     A: {}", card.answer);
            }
        }
    }

    Ok(())
}
