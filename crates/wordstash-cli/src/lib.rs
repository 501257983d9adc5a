//! Command dispatch for the `wordstash` binary.
//!
//! Every invocation runs exactly one action. The flags are not combinable;
//! the dispatcher picks the first matching flag in a fixed priority order
//! (version, serve, init, add, delete, show) and ignores the rest. The
//! selection lives here, out of `main`, so the priority order is testable.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use wordstash_core::{filter_words, render_plain, summary_rows, AddOutcome, Settings, WordStore};
use wordstash_web::{shutdown_signal, ServerConfig, WordsServer};

#[derive(Parser, Debug)]
#[clap(
    name = "wordstash",
    about = "Track looked-up English words in a local database",
    disable_version_flag = true
)]
pub struct Cli {
    /// Create the database schema
    #[clap(long)]
    pub init: bool,

    /// Comma-separated words to add
    #[clap(short = 'a', long = "add", value_name = "WORDS")]
    pub add: Option<String>,

    /// Print the summary table
    #[clap(short = 's', long = "show")]
    pub show: bool,

    /// Word to delete
    #[clap(short = 'd', long = "delete", value_name = "WORD")]
    pub delete: Option<String>,

    /// Run the web server
    #[clap(short = 'D', long = "daemon")]
    pub daemon: bool,

    /// Web server port
    #[clap(short = 'p', long = "port", default_value_t = 8080)]
    pub port: u16,

    /// Print the version string and exit
    #[clap(short = 'v', long = "version-info")]
    pub version: bool,

    /// Database file path (defaults to .wordstash.sqlite in the home directory)
    #[clap(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[clap(long, short, default_value = "info")]
    pub log_level: String,
}

/// The single action an invocation performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Version,
    Serve { port: u16 },
    Init,
    Add { words: String },
    Delete { word: String },
    Show,
}

/// Pick the action for this invocation: first matching flag wins.
///
/// Returns `None` when no action flag was given; the caller prints usage
/// and exits without side effects.
pub fn select_action(cli: &Cli) -> Option<Action> {
    if cli.version {
        return Some(Action::Version);
    }
    if cli.daemon {
        return Some(Action::Serve { port: cli.port });
    }
    if cli.init {
        return Some(Action::Init);
    }
    if let Some(words) = cli.add.as_deref() {
        if !words.is_empty() {
            return Some(Action::Add {
                words: words.to_string(),
            });
        }
    }
    if let Some(word) = cli.delete.as_deref() {
        if !word.is_empty() {
            return Some(Action::Delete {
                word: word.to_string(),
            });
        }
    }
    if cli.show {
        return Some(Action::Show);
    }
    None
}

fn open_store(db_path: Option<PathBuf>) -> Result<WordStore> {
    let settings = Settings::resolve(db_path)?;
    Ok(WordStore::open(&settings.db_path)?)
}

/// Execute one action to completion.
pub async fn run_action(action: Action, db_path: Option<PathBuf>) -> Result<()> {
    match action {
        Action::Version => {
            println!("wordstash version: {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Action::Serve { port } => {
            if port == 0 {
                anyhow::bail!("port must be between 1 and 65535");
            }
            let store = open_store(db_path)?;
            let config = ServerConfig::new().with_port(port);
            WordsServer::with_config(store, config)
                .serve_with_shutdown(shutdown_signal())
                .await?;
            Ok(())
        }
        Action::Init => {
            let store = open_store(db_path)?;
            store.init_schema()?;
            log::info!("initialized database schema");
            Ok(())
        }
        Action::Add { words } => {
            let store = open_store(db_path)?;
            for word in filter_words(&words) {
                match store.add_word(&word)? {
                    AddOutcome::Created => log::info!("add word '{}'", word),
                    AddOutcome::Incremented => {
                        log::info!("word '{}' already in database, added_count++", word)
                    }
                }
            }
            Ok(())
        }
        Action::Delete { word } => {
            let store = open_store(db_path)?;
            if store.delete_word(&word)? {
                log::info!("del word '{}'", word);
            } else {
                log::info!("word '{}' not in database", word);
            }
            Ok(())
        }
        Action::Show => {
            let store = open_store(db_path)?;
            let rows = summary_rows(&store.list_words()?);
            print!("{}", render_plain(&rows));
            Ok(())
        }
    }
}

/// Entry point shared by `main`: dispatch the parsed flags.
pub async fn run(cli: Cli) -> Result<()> {
    match select_action(&cli) {
        Some(action) => run_action(action, cli.db.clone()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
