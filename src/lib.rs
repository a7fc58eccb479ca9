//! Address Book - a command-line assistant bot for contacts.
//!
//! This library stores contact names, phone numbers, and birthdays, answers
//! lookups and upcoming-birthday queries, and persists the whole book to a
//! single file between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Records and the address book that holds them
//! - **repositories**: Loading and saving the book
//! - **matching**: Fuzzy search over names and phones
//! - **assistant**: Input parsing, command handlers, and the REPL
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;

pub use assistant::{Assistant, CommandError, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use matching::{ContactMatcher, MatchResult};
pub use models::{AddressBook, Record};
pub use repositories::{BookRepository, FileBookRepository};
