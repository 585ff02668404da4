//! Bookshelf CLI
//!
//! Command-line interface for Bookshelf - track the books you are reading.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use shelf_core::{BookId, Config, RepositoryError, StorageError, Store};

mod commands;
mod editor;
mod logging;
mod output;

use commands::book::BookChanges;
use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Bookshelf - keep track of the books you have and haven't read")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a book
    Add {
        /// Book title
        title: String,
        /// Author name
        #[arg(short, long)]
        author: String,
        /// Publication year
        #[arg(short, long, allow_negative_numbers = true)]
        year: i32,
        /// Put the book straight on the finished shelf
        #[arg(short, long)]
        complete: bool,
    },
    /// List both shelves
    #[command(alias = "ls")]
    List {
        /// Only show books whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Search books by title
    Search {
        /// Search query
        query: String,
    },
    /// Show book details
    Show {
        /// Book ID
        id: BookId,
    },
    /// Edit a book (prompts for each field when no flags are given)
    Edit {
        /// Book ID
        id: BookId,
        /// New title
        #[arg(short = 'T', long)]
        title: Option<String>,
        /// New author
        #[arg(short, long)]
        author: Option<String>,
        /// New publication year
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i32>,
        /// Set the read status
        #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
        complete: Option<bool>,
    },
    /// Delete a book
    #[command(alias = "rm")]
    Delete {
        /// Book ID
        id: BookId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Move a book between the unread and finished shelves
    Toggle {
        /// Book ID
        id: BookId,
    },
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
        /// Configuration key (data_dir, backend, storage_key, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            if let Some(hint) = recovery_hint(&err) {
                eprintln!();
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

/// Recovery suggestion from the first storage error in the chain
fn recovery_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.chain().find_map(|cause| {
        if let Some(storage) = cause.downcast_ref::<StorageError>() {
            return storage.recovery_suggestion();
        }
        match cause.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::Storage(storage)) => storage.recovery_suggestion(),
            _ => None,
        }
    })
}

fn run(cli: Cli) -> Result<()> {
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Config commands don't need the store
    if let Some(Commands::Config { command }) = &cli.command {
        return handle_config_command(command.clone(), config_path, &output);
    }

    let config =
        Config::load_with_cli_override(config_path).context("Failed to load configuration")?;
    logging::init_logging(&config);

    let mut store = Store::open_with_config(config)?;
    if !store.is_available() && !output.is_quiet() {
        eprintln!("⚠ Storage is unavailable; changes will not be saved.");
    }

    match cli.command.unwrap_or(Commands::List { search: None }) {
        Commands::Add {
            title,
            author,
            year,
            complete,
        } => commands::book::add(&mut store, title, author, year, complete, &output),
        Commands::List { search } => commands::book::list(&store, search, &output),
        Commands::Search { query } => commands::book::list(&store, Some(query), &output),
        Commands::Show { id } => commands::book::show(&store, id, &output),
        Commands::Edit {
            id,
            title,
            author,
            year,
            complete,
        } => {
            let changes = BookChanges {
                title,
                author,
                year,
                complete,
            };
            commands::book::edit(&mut store, id, changes, &output)
        }
        Commands::Delete { id, yes } => commands::book::delete(&mut store, id, yes, &output),
        Commands::Toggle { id } => commands::book::toggle(&mut store, id, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_config_command(
    command: Option<ConfigCommands>,
    config_path: Option<&PathBuf>,
    output: &Output,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
        Some(ConfigCommands::Set { key, value }) => {
            commands::config::set(key, value, config_path, output)
        }
    }
}
