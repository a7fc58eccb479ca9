//! Address Book - Main entry point
//!
//! Loads the saved book, runs the assistant over stdin/stdout, and saves the
//! book when the user exits.

use address_book::{Assistant, Config, FileBookRepository};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logs go to stderr so the prompt on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Using address book file: {}", config.book_file.display());

    let repository = FileBookRepository::new(&config.book_file);
    let assistant = match Assistant::new(repository) {
        Ok(assistant) => assistant.with_birthday_window(config.birthday_window_days),
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    assistant.run(io::stdin().lock(), io::stdout().lock())?;

    info!("Address book session finished");
    Ok(())
}
