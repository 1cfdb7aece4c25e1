use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let sets = app.sets.list_sets();

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = sets
                .iter()
                .map(|set| {
                    serde_json::json!({
                        "id": set.id.to_string(),
                        "name": set.name,
                        "cardCount": set.cards.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if sets.is_empty() {
                println!("No sets yet. Create one with `flashlearn-cli new <name>`.");
            } else {
                for set in &sets {
                    let cards = set.cards.len();
                    let plural = if cards == 1 { "card" } else { "cards" };
                    println!("{} ({} {})", set.name, cards, plural);
                }
            }
        }
    }

    Ok(())
}
