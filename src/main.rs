//! Contact Book - Main entry point
//!
//! Starts the interactive assistant: loads configuration, initializes
//! logging, and hands control to the command loop.

use anyhow::Result;
use contact_book::{repl, AddressBook, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr so command output on stdout stays clean.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book session");

    let mut book = AddressBook::new();
    println!("Welcome to the assistant bot!");
    repl::run(&mut book, &config)?;

    info!(contacts = book.len(), "Session ended");
    Ok(())
}
