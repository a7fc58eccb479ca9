//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered in place of a birthday that was never set.
pub const BIRTHDAY_NOT_SET: &str = "not set";

/// A single contact: a name, an ordered list of phones and an optional birthday.
///
/// Phones keep insertion order and may repeat. The record's identity is its name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create an empty record for `name`.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `number` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    /// Append an already validated phone.
    pub fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the first phone equal to `number`.
    ///
    /// Returns `true` if a phone was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == number) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace every phone equal to `old` with `new`.
    ///
    /// `new` is validated even when nothing matches `old`. Returns how many
    /// phones were replaced.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let replacement = Phone::new(new)?;
        let mut replaced = 0;
        for phone in self.phones.iter_mut().filter(|p| p.as_str() == old) {
            *phone = replacement.clone();
            replaced += 1;
        }
        Ok(replaced)
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, text: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(text)?);
        Ok(())
    }

    /// Phones joined with `"; "`, the way the assistant prints them.
    pub fn phones_line(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_line(),
            self.birthday
                .as_ref()
                .map(Birthday::as_str)
                .unwrap_or(BIRTHDAY_NOT_SET)
        )
    }
}
