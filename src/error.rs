//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! All variants are value-level failures: the command layer renders them as the
//! command's output line and the session continues.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number or birthday failed format validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already present on the record
    #[error("Phone already exists.")]
    DuplicatePhone { number: String },

    /// The phone number to edit is not present on the record
    #[error("Phone '{number}' not found for contact '{name}'.")]
    PhoneNotFound { name: String, number: String },

    /// No contact with the given name exists
    #[error("Contact not found.")]
    ContactNotFound { name: String },

    /// The contact has no birthday set (or does not exist)
    #[error("Birthday not found.")]
    BirthdayNotFound { name: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
