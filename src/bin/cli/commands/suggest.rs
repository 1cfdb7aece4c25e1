use anyhow::{Context, Result};

use flashlearn_lib::suggest::SuggestionClient;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, set_name: &str, format: &OutputFormat) -> Result<()> {
    let set = app.find_set(set_name)?;

    let client = SuggestionClient::from_env()?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let question = runtime
        .block_on(client.suggest_question(&set.name))
        .context("Could not generate a question")?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "setName": set.name,
                "suggestedQuestion": question,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Suggested question for '{}':", set.name);
            println!("  {}", question);
            println!();
            println!(
                "Add it with: flashlearn-cli add '{}' --question '{}' --answer '...'",
                set.name, question
            );
        }
    }

    Ok(())
}
