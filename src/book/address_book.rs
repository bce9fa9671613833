//! The address book: a name-keyed, insertion-ordered collection of records.

use crate::book::upcoming::upcoming_greeting;
use crate::domain::DATE_FORMAT;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use serde::Serialize;

/// One entry of the upcoming-birthday report.
///
/// `greet_date` is the weekend-adjusted date, rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(rename = "birthday")]
    pub greet_date: String,
}

/// Mapping from contact name to record.
///
/// Backed by a vector so that "list all" output and the upcoming-birthday
/// report come out in insertion order. Lookups are linear, which is fine at
/// personal-address-book scale.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    ///
    /// Replacement keeps the original insertion position. This is an upsert:
    /// callers wanting "add or update" semantics do a `find` first.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => self.records[index] = record,
            None => self.records.push(record),
        }
    }

    /// Find a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.position(name).map(|index| &self.records[index])
    }

    /// Find a record by exact name, for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.position(name).map(|index| &mut self.records[index])
    }

    /// Remove a record by name.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        let index = self.position(name).ok_or_else(|| BookError::ContactNotFound {
            name: name.to_string(),
        })?;
        self.records.remove(index);
        Ok(())
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect everyone whose birthday falls within the next 7 days of
    /// `today`, with greeting dates shifted off weekends.
    ///
    /// `today` is an explicit parameter so the scan stays deterministic in
    /// tests; production callers pass the current local date.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let greet_date = upcoming_greeting(birthday.date(), today)?;
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    greet_date: greet_date.format(DATE_FORMAT).to_string(),
                })
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}
