//! The address book: every record, keyed by contact name.

use super::record::Record;
use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Default length of the upcoming-birthday window, in days.
pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// In-memory table of records keyed by name.
///
/// Names are used exactly as given; no case folding happens here.
/// Iteration is ordered by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored there.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "Storing record");
        self.records.insert(key, record);
    }

    /// Look up the record stored under exactly `name`.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup, used to edit a record in place.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove and return the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        let record = self
            .records
            .remove(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        debug!(name, "Deleted record");
        Ok(record)
    }

    /// Every record, in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first key whose record carries a different name, if any.
    ///
    /// `add_record` never produces one; a decoded snapshot can.
    pub fn misfiled_key(&self) -> Option<&str> {
        self.records
            .iter()
            .find(|(key, record)| key.as_str() != record.name().as_str())
            .map(|(key, _)| key.as_str())
    }

    /// Records whose next birthday falls within `window_days` of `today`, inclusive.
    ///
    /// The stored birth year is ignored. A birthday that already passed this
    /// year counts from its occurrence next year, so early-January birthdays
    /// show up in late December. Results are ordered by upcoming date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<&Record> {
        let mut upcoming: Vec<(NaiveDate, &Record)> = self
            .records
            .values()
            .filter_map(|record| {
                let next = record.birthday()?.next_occurrence(today);
                let days = (next - today).num_days();
                (0..=i64::from(window_days))
                    .contains(&days)
                    .then_some((next, record))
            })
            .collect();

        upcoming.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.name().cmp(b.1.name())));
        upcoming.into_iter().map(|(_, record)| record).collect()
    }

    /// Upcoming birthdays for the local calendar date and the default window.
    pub fn get_upcoming_birthdays(&self) -> Vec<&Record> {
        self.upcoming_birthdays(Local::now().date_naive(), DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}
