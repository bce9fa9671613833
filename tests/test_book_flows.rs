//! End-to-end tests for record and address-book operations.
//!
//! These exercise whole lifecycles through the public API: create a
//! contact, grow and edit its phone list, set a birthday, delete it.

use contact_book::{AddressBook, BookError, Record, ValidationError};

#[test]
fn test_contact_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    let mut record = Record::new("Vitalii").unwrap();
    record.add_phone("1234567890").unwrap();
    book.add_record(record);
    assert_eq!(book.len(), 1);

    // READ
    let record = book.find("Vitalii").expect("contact should exist");
    assert!(record.find_phone("1234567890").is_some());

    // UPDATE
    let record = book.find_mut("Vitalii").unwrap();
    record.add_phone("0987654321").unwrap();
    record.edit_phone("1234567890", "1111111111").unwrap();
    record.add_birthday("11.11.2002").unwrap();

    let record = book.find("Vitalii").unwrap();
    let phones: Vec<_> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, vec!["1111111111", "0987654321"]);
    assert_eq!(record.birthday().unwrap().to_string(), "11.11.2002");
    assert_eq!(
        record.to_string(),
        "Name: Vitalii, Phones: 1111111111, 0987654321, Birthday: 11.11.2002"
    );

    // DELETE
    book.delete("Vitalii").unwrap();
    assert!(book.find("Vitalii").is_none());
    assert_eq!(
        book.delete("Vitalii"),
        Err(BookError::ContactNotFound {
            name: "Vitalii".to_string()
        })
    );
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let mut book = AddressBook::new();
    let mut record = Record::new("Ann").unwrap();
    record.add_phone("1234567890").unwrap();
    book.add_record(record);

    let record = book.find_mut("Ann").unwrap();

    // Duplicate add fails, list unchanged.
    assert_eq!(
        record.add_phone("1234567890"),
        Err(BookError::DuplicatePhone {
            number: "1234567890".to_string()
        })
    );
    assert_eq!(record.phones().len(), 1);

    // Edit of a missing number fails, list unchanged.
    assert!(matches!(
        record.edit_phone("0000000000", "1111111111"),
        Err(BookError::PhoneNotFound { .. })
    ));
    assert_eq!(record.phones()[0].as_str(), "1234567890");

    // Invalid replacement fails validation, list unchanged.
    assert_eq!(
        record.edit_phone("1234567890", "letters!!!"),
        Err(BookError::Validation(ValidationError::PhoneNotNumeric))
    );
    assert_eq!(record.phones()[0].as_str(), "1234567890");
}

#[test]
fn test_validation_never_constructs_invalid_values() {
    use contact_book::{Birthday, PhoneNumber};

    for bad in ["", "123", "12345678901", "123456789x", "+380501234"] {
        assert!(PhoneNumber::new(bad).is_err(), "accepted {bad:?}");
    }
    for good in ["0000000000", "1234567890", "0987654321"] {
        assert_eq!(PhoneNumber::new(good).unwrap().as_str(), good);
    }

    for bad in ["31.02.2020", "29.02.2021", "1.1.2020", "2020.01.01", "hello"] {
        assert!(Birthday::new(bad).is_err(), "accepted {bad:?}");
    }
    assert!(Birthday::new("29.02.2000").is_ok());
}
