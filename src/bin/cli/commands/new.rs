use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &mut App, name: &str, format: &OutputFormat) -> Result<()> {
    let set = app.sets.create_set(name)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": set.id.to_string(),
                "name": set.name,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Created set '{}'", set.name);
        }
    }

    Ok(())
}
