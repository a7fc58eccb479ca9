//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Value error. It`s not a phone number: {0}")]
    InvalidPhone(String),

    /// The provided birthday does not match DD.MM.YYYY or is not a real date.
    #[error("Invalid date format. Use DD.MM.YYYY: {0}")]
    InvalidBirthday(String),
}
