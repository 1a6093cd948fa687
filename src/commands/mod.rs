//! Command layer for the assistant.
//!
//! [`Assistant`] owns the address book and routes each parsed command to its
//! handler, wrapping every handler with [`handlers::guard`] so failures come
//! back as ordinary replies.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command};

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::models::{AddressBook, BIRTHDAY_WINDOW_DAYS};
use handlers::guard;
use tracing::debug;

/// What the driver should do with a command's output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A single line
    Text(String),
    /// Several lines printed in order
    Lines(Vec<String>),
    /// Print the farewell and stop reading input
    Exit(String),
}

impl Reply {
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Reply::Text(text) | Reply::Exit(text) => vec![text.as_str()],
            Reply::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Reply::Exit(_))
    }
}

/// The assistant: an address book plus the clock used for birthday queries.
pub struct Assistant {
    book: AddressBook,
    clock: Box<dyn Clock>,
    window_days: u32,
}

impl Assistant {
    /// Create an assistant over `book` with the default seven-day window.
    pub fn new(book: AddressBook, clock: Box<dyn Clock>) -> Self {
        Self {
            book,
            clock,
            window_days: BIRTHDAY_WINDOW_DAYS,
        }
    }

    /// Create an empty assistant using the system clock and configured window.
    pub fn from_config(config: &Config) -> Self {
        Self::new(AddressBook::new(), Box::new(SystemClock)).with_window_days(config.window_days)
    }

    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Parse and run one input line. Blank lines produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let (command, args) = parse_input(line)?;
        Some(self.execute(&command, &args))
    }

    /// Run `command` with `args` to completion.
    pub fn execute(&mut self, command: &Command, args: &[String]) -> Reply {
        debug!(command = %command, args = args.len(), "Dispatching command");

        let book = &mut self.book;
        match command {
            Command::Hello => Reply::Text(handlers::GREETING.to_string()),
            Command::Add => Reply::Text(guard(handlers::add_contact(args, book))),
            Command::Change => Reply::Text(guard(handlers::change_contact(args, book))),
            Command::Phone => Reply::Text(guard(handlers::show_phone(args, book))),
            Command::All => Reply::Lines(handlers::show_all(book)),
            Command::AddBirthday => Reply::Text(guard(handlers::add_birthday(args, book))),
            Command::ShowBirthday => Reply::Text(guard(handlers::show_birthday(args, book))),
            Command::Birthdays => Reply::Lines(handlers::birthdays(
                book,
                self.clock.today(),
                self.window_days,
            )),
            Command::RemovePhone => Reply::Text(guard(handlers::remove_phone(args, book))),
            Command::Delete => Reply::Text(guard(handlers::delete_contact(args, book))),
            Command::Exit => Reply::Exit(handlers::FAREWELL.to_string()),
            Command::Unknown(_) => Reply::Text(handlers::INVALID_COMMAND.to_string()),
        }
    }
}
