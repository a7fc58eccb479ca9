//! The interactive assistant bot.
//!
//! The assistant owns the address book for the whole session: it loads the
//! book from a [`BookRepository`] when created, dispatches one command per
//! input line, and saves the book back when the user exits or input ends.

pub mod handlers;
pub mod parser;

pub use handlers::{CommandError, CommandResult};
pub use parser::{parse_input, ParsedInput};

use crate::error::StorageResult;
use crate::models::{AddressBook, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use crate::repositories::BookRepository;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use handlers::input_error;
use std::io::{BufRead, Write};
use tracing::{debug, error, info, warn};

pub const WELCOME_MESSAGE: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL_MESSAGE: &str = "Good bye!";
pub const INVALID_COMMAND_MESSAGE: &str = "Invalid command.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this reply and read the next line
    Reply(String),
    /// Nothing to print (blank line)
    Silent,
    /// Save and stop
    Exit,
}

/// A command-line session over one address book.
pub struct Assistant<R: BookRepository> {
    book: AddressBook,
    repository: R,
    birthday_window_days: u32,
}

impl<R: BookRepository> Assistant<R> {
    /// Load the book from `repository` and start a session.
    ///
    /// # Errors
    ///
    /// Fails if the stored book exists but cannot be read or decoded.
    pub fn new(repository: R) -> StorageResult<Self> {
        let book = repository.load()?;
        Ok(Self {
            book,
            repository,
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
        })
    }

    /// Use a different upcoming-birthday window.
    pub fn with_birthday_window(mut self, days: u32) -> Self {
        self.birthday_window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one raw input line, using the local date for `birthdays`.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        self.handle_line_on(line, Local::now().date_naive())
    }

    /// Handle one raw input line as if today were `today`.
    pub fn handle_line_on(&mut self, line: &str, today: NaiveDate) -> Outcome {
        let Some(ParsedInput { command, args }) = parse_input(line) else {
            return Outcome::Silent;
        };
        debug!(command = %command, args = args.len(), "Dispatching command");

        let book = &mut self.book;
        let reply = match command.as_str() {
            "close" | "exit" => return Outcome::Exit,
            "hello" => "How can I help you?".to_string(),
            "help" => handlers::help(),
            "add" => input_error(handlers::add_contact)(&args, book),
            "change" => input_error(handlers::change_contact)(&args, book),
            "phone" => input_error(handlers::show_phone)(&args, book),
            "remove-phone" => input_error(handlers::remove_phone)(&args, book),
            "delete" => input_error(handlers::delete_contact)(&args, book),
            "all" => handlers::show_all(book),
            "add-birthday" => input_error(handlers::add_birthday)(&args, book),
            "show-birthday" => input_error(handlers::show_birthday)(&args, book),
            "birthdays" => handlers::birthdays(book, today, self.birthday_window_days),
            "search" => input_error(handlers::search_contacts)(&args, book),
            _ => INVALID_COMMAND_MESSAGE.to_string(),
        };
        Outcome::Reply(reply)
    }

    /// Persist the book through the repository.
    pub fn save(&self) -> StorageResult<()> {
        self.repository.save(&self.book)
    }

    /// Run the read-eval-print loop until `close`, `exit` or end of input.
    ///
    /// The book is saved once, when the loop stops. A line that is not valid
    /// UTF-8 is answered with the invalid-command reply and the loop goes on.
    pub fn run<I: BufRead, O: Write>(mut self, mut input: I, mut output: O) -> Result<()> {
        writeln!(output, "{}", WELCOME_MESSAGE)?;

        let mut buffer = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buffer.clear();
            let read = match input.read_until(b'\n', &mut buffer) {
                Ok(read) => read,
                Err(e) => {
                    error!(error = %e, "Reading input failed, saving before stopping");
                    self.save().context("Failed to save address book")?;
                    return Err(e).context("Failed to read command");
                }
            };
            if read == 0 {
                info!("End of input, closing session");
                writeln!(output)?;
                break;
            }

            let Ok(line) = std::str::from_utf8(&buffer) else {
                warn!(bytes = buffer.len(), "Ignoring input line that is not valid UTF-8");
                writeln!(output, "{}", INVALID_COMMAND_MESSAGE)?;
                continue;
            };

            match self.handle_line(line) {
                Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
                Outcome::Silent => {}
                Outcome::Exit => break,
            }
        }

        writeln!(output, "{}", FAREWELL_MESSAGE)?;
        self.save().context("Failed to save address book")?;
        Ok(())
    }
}
