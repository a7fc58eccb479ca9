//! Command handlers for the assistant.
//!
//! Each fallible handler returns a `CommandResult<String>`. The dispatcher
//! wraps them with [`input_error`], which turns every `CommandError` into one
//! of the fixed messages the assistant prints.

use crate::domain::{Birthday, Phone, ValidationError};
use crate::error::BookError;
use crate::matching::{ContactMatcher, DEFAULT_MAX_RESULTS, DEFAULT_MIN_CONFIDENCE};
use crate::models::{AddressBook, Record, BIRTHDAY_NOT_SET};
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

pub const INVALID_ARGUMENTS_MESSAGE: &str = "Enter the correct arguments for the command";
pub const KEY_ERROR_MESSAGE: &str = "Key error";
pub const INDEX_ERROR_MESSAGE: &str = "Index error";
pub const CONTACT_MISSING_MESSAGE: &str = "Contact is not exist.";

/// Errors a command handler can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A phone, birthday or name failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The book has no record under the given name
    #[error(transparent)]
    NotFound(#[from] BookError),

    /// Fewer arguments than the command destructures
    #[error("'{command}' expects {expected} arguments, got {got}")]
    MissingArguments {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// A positional argument is absent
    #[error("Missing argument at position {index}")]
    MissingArgument { index: usize },
}

impl CommandError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::MissingArguments { .. } => INVALID_ARGUMENTS_MESSAGE,
            Self::NotFound(_) => KEY_ERROR_MESSAGE,
            Self::MissingArgument { .. } => INDEX_ERROR_MESSAGE,
        }
    }
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Wrap `handler` so that any error becomes its user-facing message.
pub fn input_error<F>(handler: F) -> impl Fn(&[String], &mut AddressBook) -> String
where
    F: Fn(&[String], &mut AddressBook) -> CommandResult<String>,
{
    move |args: &[String], book: &mut AddressBook| match handler(args, book) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "Command failed");
            e.user_message().to_string()
        }
    }
}

/// Take the first `N` arguments, ignoring any extras.
fn take<'a, const N: usize>(
    command: &'static str,
    args: &'a [String],
) -> CommandResult<[&'a str; N]> {
    if args.len() < N {
        return Err(CommandError::MissingArguments {
            command,
            expected: N,
            got: args.len(),
        });
    }
    Ok(std::array::from_fn(|i| args[i].as_str()))
}

fn nth(args: &[String], index: usize) -> CommandResult<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument { index })
}

/// `add <name> <phone>`: create the contact if needed and append the phone.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take::<2>("add", args)?;
    let phone = Phone::new(phone)?;

    if let Some(record) = book.find_mut(name) {
        record.push_phone(phone);
        debug!(name, "Appended phone to existing contact");
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name)?;
    record.push_phone(phone);
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = take::<3>("change", args)?;

    match book.find_mut(name) {
        Some(record) => {
            let replaced = record.edit_phone(old, new)?;
            debug!(name, replaced, "Edited phone");
            Ok("Contact`s phone updated.".to_string())
        }
        None => Ok(CONTACT_MISSING_MESSAGE.to_string()),
    }
}

/// `phone <name>`.
pub fn show_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = nth(args, 0)?;

    Ok(match book.find(name) {
        Some(record) => format!("Phones: {}", record.phones_line()),
        None => CONTACT_MISSING_MESSAGE.to_string(),
    })
}

/// `all`: every record, one per line.
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "Address book is empty.".to_string();
    }
    render_records(book.records())
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, birthday] = take::<2>("add-birthday", args)?;

    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok("Contact`s birthday updated.".to_string())
        }
        None => Ok(CONTACT_MISSING_MESSAGE.to_string()),
    }
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = nth(args, 0)?;

    Ok(match book.find(name) {
        Some(record) => format!(
            "Birthday: {}",
            record
                .birthday()
                .map(Birthday::as_str)
                .unwrap_or(BIRTHDAY_NOT_SET)
        ),
        None => CONTACT_MISSING_MESSAGE.to_string(),
    })
}

/// `birthdays`: records with a birthday in the next `window_days` days.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let upcoming = book.upcoming_birthdays(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    render_records(upcoming)
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = nth(args, 0)?;
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}

/// `remove-phone <name> <phone>`.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = take::<2>("remove-phone", args)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(CONTACT_MISSING_MESSAGE.to_string());
    };

    Ok(if record.remove_phone(phone) {
        "Contact`s phone removed.".to_string()
    } else {
        "Phone is not exist.".to_string()
    })
}

/// `search <query...>`: fuzzy search over names and phones.
pub fn search_contacts(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    nth(args, 0)?;
    let query = args.join(" ");

    let matches = ContactMatcher::new().find_matches(
        &query,
        book,
        DEFAULT_MAX_RESULTS,
        DEFAULT_MIN_CONFIDENCE,
    );
    if matches.is_empty() {
        return Ok("No matches found.".to_string());
    }
    Ok(render_records(matches.into_iter().map(|m| m.record)))
}

/// `help`.
pub fn help() -> String {
    [
        "Available commands:",
        "  hello                              greet the assistant",
        "  add <name> <phone>                 add a contact or append a phone",
        "  change <name> <old> <new>          replace a phone",
        "  phone <name>                       show a contact's phones",
        "  remove-phone <name> <phone>        remove a phone",
        "  delete <name>                      delete a contact",
        "  all                                show every contact",
        "  add-birthday <name> <DD.MM.YYYY>   set a birthday",
        "  show-birthday <name>               show a birthday",
        "  birthdays                          show upcoming birthdays",
        "  search <query>                     find contacts by name or phone",
        "  close | exit                       save and quit",
    ]
    .join("\n")
}

fn render_records<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records
        .into_iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
