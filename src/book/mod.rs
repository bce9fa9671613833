//! Address book container and the upcoming-birthday scan.

pub mod address_book;
pub mod upcoming;

pub use address_book::{AddressBook, UpcomingBirthday};
pub use upcoming::{upcoming_greeting, UPCOMING_WINDOW_DAYS};
