//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Display strings are user-facing: the command layer prints them verbatim
/// as the command's output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 characters long.
    PhoneLength,

    /// The provided phone number contains a non-digit character.
    PhoneNotNumeric,

    /// The provided birthday does not parse as a DD.MM.YYYY calendar date.
    InvalidDate,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::PhoneLength => write!(f, "Phone number must contain 10 digits"),
            Self::PhoneNotNumeric => write!(f, "Phone number must contain only numbers"),
            Self::InvalidDate => write!(f, "Invalid date format. Use DD.MM.YYYY"),
        }
    }
}

impl std::error::Error for ValidationError {}
