//! Shared fixtures for integration tests.
//!
//! Builds assistants pinned to a fixed date and records with sample data.

use address_book_assistant::{AddressBook, Assistant, ContactName, FixedClock, Record, Reply};
use chrono::NaiveDate;

/// The date every fixture assistant considers "today".
#[allow(dead_code)]
pub fn today() -> NaiveDate {
    date(2024, 6, 10)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// An empty assistant whose clock is stuck on `today`.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::new(AddressBook::new(), Box::new(FixedClock(today)))
}

/// A record with the given birthday and no phones.
#[allow(dead_code)]
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid fixture name"));
    record.add_birthday(birthday).expect("valid fixture birthday");
    record
}

/// Send one line and return every line of the reply.
#[allow(dead_code)]
pub fn send(assistant: &mut Assistant, line: &str) -> Vec<String> {
    match assistant.handle_line(line) {
        Some(reply) => reply.lines().into_iter().map(str::to_string).collect(),
        None => Vec::new(),
    }
}

/// Send one line expecting a single-line reply.
#[allow(dead_code)]
pub fn send_text(assistant: &mut Assistant, line: &str) -> String {
    match assistant.handle_line(line) {
        Some(Reply::Text(text)) => text,
        other => panic!("Expected text reply to {:?}, got: {:?}", line, other),
    }
}
