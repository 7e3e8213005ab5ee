//! Wayline terminal binary
//!
//! Bootstraps the terminal: resolves the collection file path from the
//! command line or the `COLLECTION` environment variable, loads the
//! initial collection, and hands control to the interactive loop. Any
//! startup failure prints one message and exits non-zero.

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use wayline_cli::terminal::Terminal;
use wayline_core::logging::{self, Profile};
use wayline_core::Store;

#[derive(Debug, Parser)]
#[command(name = "wayline")]
#[command(about = "Wayline - interactive route collection terminal", long_about = None)]
struct Cli {
    /// Path to the collection file (falls back to the COLLECTION
    /// environment variable)
    #[arg(env = "COLLECTION")]
    collection: PathBuf,

    /// Emit JSON structured logs instead of human-readable ones
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(if cli.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let routes = wayline_store::load_collection(&cli.collection)
        .context("failed to load the initial collection")?;
    let store = Store::with_routes(routes)
        .context("the collection file holds conflicting elements")?;
    tracing::info!(count = store.len(), "collection loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(store, cli.collection, stdin.lock(), stdout.lock());
    terminal.run()?;
    Ok(())
}
