//! Command handlers.
//!
//! Each handler turns a tokenized command into one output line. Domain
//! errors are not caught here: they bubble up as `HandlerError` and a
//! single adapter (`render`) converts them to the line the user sees, so
//! no command ever terminates the session.

use crate::book::AddressBook;
use crate::error::BookError;
use crate::models::Record;
use chrono::NaiveDate;
use thiserror::Error;

/// Failure of one command: either a domain error or bad arguments.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("{0}")]
    Book(#[from] BookError),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

pub type HandlerResult = Result<String, HandlerError>;

/// The error-to-output adapter: every command's result becomes a line.
pub fn render(result: HandlerResult) -> String {
    result.unwrap_or_else(|err| err.to_string())
}

/// `add <name> <phone>`: find-or-create the contact, then attach the phone.
///
/// The contact is created even when the phone is rejected, matching the
/// add-then-validate flow users expect from the original bot.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, phone] = args else {
        return Err(HandlerError::Usage("add <name> <phone>"));
    };

    let message = if book.find(name).is_some() {
        "Contact updated."
    } else {
        let record = Record::new(name.clone()).map_err(BookError::from)?;
        book.add_record(record);
        "Contact added."
    };

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
    }

    Ok(message.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_phone(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, old, new] = args else {
        return Err(HandlerError::Usage("change <name> <old phone> <new phone>"));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound { name: name.clone() })?;
    record.edit_phone(old, new)?;

    Ok("Phone number updated.".to_string())
}

/// `phone <name>`
pub fn show_phones(args: &[String], book: &AddressBook) -> HandlerResult {
    let [name] = args else {
        return Err(HandlerError::Usage("phone <name>"));
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound { name: name.clone() })?;
    let phones = record
        .phones()
        .iter()
        .map(|phone| phone.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("Phones: {phones}"))
}

/// `all`
pub fn show_all(book: &AddressBook) -> HandlerResult {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }

    Ok(book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> HandlerResult {
    let [name, date] = args else {
        return Err(HandlerError::Usage("add-birthday <name> <DD.MM.YYYY>"));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound { name: name.clone() })?;
    record.add_birthday(date)?;

    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: a missing contact and a contact without a
/// birthday both report "Birthday not found.".
pub fn show_birthday(args: &[String], book: &AddressBook) -> HandlerResult {
    let [name] = args else {
        return Err(HandlerError::Usage("show-birthday <name>"));
    };

    let birthday = book
        .find(name)
        .and_then(|record| record.birthday())
        .ok_or_else(|| BookError::BirthdayNotFound { name: name.clone() })?;

    Ok(format!("Birthday: {birthday}"))
}

/// `birthdays`: everyone to greet within the next week of `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate) -> HandlerResult {
    let upcoming = book.get_upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No birthdays in the next 7 days.".to_string());
    }

    Ok(upcoming
        .iter()
        .map(|entry| format!("{}: {}", entry.name, entry.greet_date))
        .collect::<Vec<_>>()
        .join("\n"))
}
