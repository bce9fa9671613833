//! Contact Book - an interactive command-line contact book with birthday reminders.
//!
//! Contacts carry a name, validated 10-digit phone numbers, and an optional
//! `DD.MM.YYYY` birthday. The book answers which birthdays fall within the
//! next 7 days, shifting weekend greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phone numbers, birthdays)
//! - **models**: the per-contact `Record`
//! - **book**: the `AddressBook` container and the birthday-window calculator
//! - **error**: the error taxonomy shared by all operations
//! - **config**: environment-driven configuration
//! - **repl**: the interactive command loop and its handlers

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{upcoming_greeting, AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult};
pub use models::Record;
