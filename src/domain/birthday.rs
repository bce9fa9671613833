//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wire/display format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Strict shape check: two-digit day, two-digit month, four-digit year.
/// chrono alone would also accept "1.1.2020".
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid regex"));

/// A type-safe wrapper for birthdays.
///
/// Parsed from a strict `DD.MM.YYYY` string at construction time and stored
/// as a real calendar date, because the upcoming-birthday computation needs
/// date arithmetic (year substitution, weekday checks), not a raw string.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.03.1988").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1988");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (zero-padded day and month)
    /// - Must be a real calendar date (31.02.2020, day 00, month 13 all fail;
    ///   leap days such as 29.02.2000 are accepted)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on any parse failure.
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(value) {
            return Err(ValidationError::InvalidDate);
        }

        let date = NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate)?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<Birthday> for NaiveDate {
    fn from(birthday: Birthday) -> Self {
        birthday.0
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
