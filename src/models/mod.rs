//! Data models for contact book entities.

pub mod contact;

pub use contact::Record;
