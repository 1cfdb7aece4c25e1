use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    set_name: &str,
    question: &str,
    answer: &str,
    format: &OutputFormat,
) -> Result<()> {
    let set = app.find_set(set_name)?;
    let card = app.sets.create_card(set.id, question, answer)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&card)?);
        }
        OutputFormat::Plain => {
            println!("Added card to '{}': {}", set.name, card.question);
        }
    }

    Ok(())
}
