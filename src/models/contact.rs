//! Contact record: one person's name, phones, and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// Phones keep insertion order and never contain two value-equal numbers.
/// The name is fixed at creation; the birthday is optional and replaceable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for an empty name.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` for a malformed number, or
    /// `BookError::DuplicatePhone` if an equal-valued phone is already
    /// present. A failed call leaves the phone list unchanged.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = PhoneNumber::new(number)?;
        if self.phones.contains(&phone) {
            return Err(BookError::DuplicatePhone {
                number: number.to_string(),
            });
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to the given value. Silently does nothing
    /// when no phone matches.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|phone| phone.as_str() != number);
    }

    /// Replace the first phone equal to `old` with a freshly validated
    /// number built from `new`, keeping its position in the list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if no phone equals `old`;
    /// validation failure on `new` propagates as `BookError::Validation`
    /// without touching the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let position = self
            .phones
            .iter()
            .position(|phone| phone.as_str() == old)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name().to_string(),
                number: old.to_string(),
            })?;
        self.phones[position] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// Find a phone by value.
    pub fn find_phone(&self, number: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `BookError::Validation` for a malformed date; the previous
    /// birthday (if any) is kept in that case.
    pub fn add_birthday(&mut self, value: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = match &self.birthday {
            Some(birthday) => birthday.to_string(),
            None => "Not set".to_string(),
        };
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name, phones, birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new("Vitalii").unwrap()
    }

    #[test]
    fn test_new_record_is_empty() {
        let record = record();
        assert_eq!(record.name(), "Vitalii");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_add_phone_preserves_order() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        let values: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890", "0987654321"]);
    }

    #[test]
    fn test_add_phone_rejects_duplicate() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        let err = record.add_phone("1234567890").unwrap_err();
        assert_eq!(err.to_string(), "Phone already exists.");
        // The list is unchanged after the failed attempt.
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_add_phone_rejects_invalid() {
        let mut record = record();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(
            err,
            BookError::Validation(ValidationError::PhoneLength)
        );
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.remove_phone("1234567890");
        let values: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["0987654321"]);
    }

    #[test]
    fn test_remove_phone_missing_is_noop() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.remove_phone("0000000000");
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.edit_phone("1234567890", "1111111111").unwrap();
        let values: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1111111111", "0987654321"]);
    }

    #[test]
    fn test_edit_phone_missing_fails() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        let err = record.edit_phone("0000000000", "1111111111").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Phone '0000000000' not found for contact 'Vitalii'."
        );
        let values: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_list_unchanged() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        let err = record.edit_phone("1234567890", "bad").unwrap_err();
        assert_eq!(err, BookError::Validation(ValidationError::PhoneLength));
        let values: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        assert!(record.find_phone("1234567890").is_some());
        assert!(record.find_phone("0987654321").is_none());
    }

    #[test]
    fn test_add_birthday_last_write_wins() {
        let mut record = record();
        record.add_birthday("11.11.2002").unwrap();
        record.add_birthday("01.01.1990").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = record();
        record.add_birthday("11.11.2002").unwrap();
        assert!(record.add_birthday("31.02.2020").is_err());
        assert_eq!(record.birthday().unwrap().to_string(), "11.11.2002");
    }

    #[test]
    fn test_display_with_birthday() {
        let mut record = record();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_birthday("11.11.2002").unwrap();
        assert_eq!(
            record.to_string(),
            "Name: Vitalii, Phones: 1234567890, 0987654321, Birthday: 11.11.2002"
        );
    }

    #[test]
    fn test_display_without_birthday() {
        let record = record();
        assert_eq!(record.to_string(), "Name: Vitalii, Phones: , Birthday: Not set");
    }
}
