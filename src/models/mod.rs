//! Data models for the address book.
//!
//! A `Record` holds one contact's data and an `AddressBook` holds every
//! record, keyed by name.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
pub use record::{Record, BIRTHDAY_NOT_SET};
