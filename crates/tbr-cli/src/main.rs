//! TBR CLI
//!
//! Command-line interface for TBR - a local reading-list tracker.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tbr_core::{Status, Store};

mod catalog;
mod commands;
mod output;
mod prompt;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "tbr")]
#[command(about = "TBR - track your to-be-read pile from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the book catalog
    Search {
        /// Search query
        query: String,
        /// Result page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Search the catalog and add a result to the For Later shelf
    Add {
        /// Search query
        query: String,
        /// Which result to add (1-based rank on the first page)
        #[arg(short = 'n', long, default_value_t = 1)]
        pick: usize,
    },
    /// Show the reading list
    #[command(alias = "ls")]
    List {
        /// Only show one shelf
        #[arg(short, long)]
        shelf: Option<Shelf>,
    },
    /// Move a book to another shelf
    #[command(alias = "mv")]
    Move {
        /// Book key (as shown by `list`)
        key: String,
        /// Target shelf
        shelf: Shelf,
    },
    /// Reorder a shelf by moving one book to a new position
    Reorder {
        /// Shelf to reorder
        shelf: Shelf,
        /// Current position (1-based, as shown by `list`)
        from: usize,
        /// Target position (1-based)
        to: usize,
    },
    /// Remove a book from the list
    #[command(alias = "rm")]
    Remove {
        /// Book key (as shown by `list`)
        key: String,
    },
    /// Show status (shelf counts, snapshot location)
    Status,
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, search_page_size)
        key: String,
        /// Configuration value
        value: String,
    },
}

/// CLI-facing shelf names
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shelf {
    Reading,
    Later,
    Done,
}

impl From<Shelf> for Status {
    fn from(shelf: Shelf) -> Self {
        match shelf {
            Shelf::Reading => Status::Reading,
            Shelf::Later => Status::Later,
            Shelf::Done => Status::Done,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need the store
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let mut store = Store::open()?;

    match cli.command {
        Commands::Search { query, page } => {
            commands::search::run(&store, query, page, &output).await
        }
        Commands::Add { query, pick } => {
            commands::book::add(&mut store, query, pick, &output).await
        }
        Commands::List { shelf } => {
            commands::book::list(&store, shelf.map(Into::into), &output)
        }
        Commands::Move { key, shelf } => {
            commands::book::move_book(&mut store, key, shelf.into(), &output)
        }
        Commands::Reorder { shelf, from, to } => {
            commands::book::reorder(&mut store, shelf.into(), from, to, &output)
        }
        Commands::Remove { key } => commands::book::remove(&mut store, key, &output),
        Commands::Status => commands::status::show(&store, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
