mod app;
mod commands;
#[cfg(feature = "tui")]
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashlearn-cli", about = "FlashLearn flashcard CLI", version)]
struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all flashcard sets
    List,

    /// Show the cards in a set
    Show {
        /// Set name (case-insensitive prefix match)
        set: String,
    },

    /// Create a new flashcard set
    New {
        /// Set name
        name: String,
    },

    /// Add a card to a set
    Add {
        /// Set name (case-insensitive prefix match)
        set: String,
        /// Question (front of the card)
        #[arg(long)]
        question: String,
        /// Answer (back of the card)
        #[arg(long)]
        answer: String,
    },

    /// Edit a card in a set
    Edit {
        /// Set name (case-insensitive prefix match)
        set: String,
        /// Card number as shown by `show` (1-based)
        card: usize,
        /// New question
        #[arg(long)]
        question: String,
        /// New answer
        #[arg(long)]
        answer: String,
    },

    /// Delete a set, or a single card with --card
    Rm {
        /// Set name (case-insensitive prefix match)
        set: String,
        /// Card number as shown by `show` (1-based)
        #[arg(long)]
        card: Option<usize>,
    },

    /// Ask the AI for a question suggestion for a set
    Suggest {
        /// Set name (case-insensitive prefix match)
        set: String,
    },

    /// Study a set as a flip-card session
    #[cfg(feature = "tui")]
    Study {
        /// Set name (case-insensitive prefix match)
        set: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let app = app::App::new()?;
            commands::list::run(&app, &cli.format)?;
        }
        Command::Show { set } => {
            let app = app::App::new()?;
            commands::show::run(&app, &set, &cli.format)?;
        }
        Command::New { name } => {
            let mut app = app::App::new()?;
            commands::new::run(&mut app, &name, &cli.format)?;
        }
        Command::Add {
            set,
            question,
            answer,
        } => {
            let mut app = app::App::new()?;
            commands::add::run(&mut app, &set, &question, &answer, &cli.format)?;
        }
        Command::Edit {
            set,
            card,
            question,
            answer,
        } => {
            let mut app = app::App::new()?;
            commands::edit::run(&mut app, &set, card, &question, &answer)?;
        }
        Command::Rm { set, card } => {
            let mut app = app::App::new()?;
            commands::rm::run(&mut app, &set, card)?;
        }
        Command::Suggest { set } => {
            let app = app::App::new()?;
            commands::suggest::run(&app, &set, &cli.format)?;
        }
        #[cfg(feature = "tui")]
        Command::Study { set } => {
            let app = app::App::new()?;
            let set = app.find_set(&set)?;
            if set.cards.is_empty() {
                anyhow::bail!("Set '{}' has no cards to study", set.name);
            }
            tui::run(set)?;
        }
    }

    Ok(())
}
