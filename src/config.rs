//! Configuration for the contact book.
//!
//! Loaded from environment variables (with `.env` support via `dotenvy`).
//! Everything has a default, so startup never fails on configuration.

use std::env;

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter for stderr diagnostics (default: "warn")
    pub log_level: String,

    /// Prompt printed before each command line (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: tracing filter, e.g. "debug" (default: "warn")
    /// - `CONTACT_BOOK_PROMPT`: prompt text
    pub fn from_env() -> Self {
        // Load .env if present; silently skip otherwise.
        let _ = dotenvy::dotenv();

        Config {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            prompt: env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
