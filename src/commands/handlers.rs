//! Command handlers.
//!
//! Each handler takes the positional arguments and the address book and
//! returns the text to show, or a [`CommandError`] that [`guard`] turns into
//! text. No handler error ever stops the assistant.

use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::NaiveDate;
use tracing::{debug, warn};

pub const GREETING: &str = "How can I help you?";
pub const FAREWELL: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const CONTACT_NOT_FOUND: &str = "Contact not found";

/// Convert a handler result into the text shown at the prompt.
///
/// Format errors and not-found errors show their own message; arity errors
/// show the generic "unexpected error" text.
pub fn guard(result: CommandResult<String>) -> String {
    match result {
        Ok(text) => text,
        Err(err) => {
            match &err {
                CommandError::InvalidFormat(_) | CommandError::NotFound(_) => {
                    debug!(error = %err, "Command rejected input")
                }
                CommandError::MissingArgument { .. } => warn!(error = %err, "Command failed"),
            }
            err.to_string()
        }
    }
}

/// Fetch positional argument `index`, failing as an arity error.
fn arg<'a>(
    args: &'a [String],
    index: usize,
    command: &'static str,
    expected: usize,
) -> CommandResult<&'a str> {
    args.get(index)
        .map(String::as_str)
        .ok_or(CommandError::MissingArgument {
            command,
            expected,
            got: args.len(),
        })
}

/// `add <name> <phone>`: create a record with one phone, replacing any
/// record already stored under that name.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::InvalidFormat(
            "Please provide both a name and a phone number.".to_string(),
        ));
    };

    let mut record = Record::new(ContactName::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <phone>`: overwrite the contact's phones with one number.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = args else {
        return Err(CommandError::MissingArgument {
            command: "change",
            expected: 2,
            got: args.len(),
        });
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(CONTACT_NOT_FOUND.to_string()))?;
    record.edit_phone(phone)?;
    Ok("Phone changed.".to_string())
}

/// `phone <name>`: the contact's numbers joined with ", ".
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "phone", 1)?;
    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    if record.phones().is_empty() {
        Ok("No phone numbers found".to_string())
    } else {
        Ok(record.joined_phones(", "))
    }
}

/// `all`: one rendered line per contact, nothing for an empty book.
pub fn show_all(book: &AddressBook) -> Vec<String> {
    book.iter().map(Record::to_string).collect()
}

/// `add-birthday <name> <DD.MM.YYYY>`.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let (Some(name), Some(date)) = (args.first(), args.get(1)) else {
        return Ok("Please provide both a name and a birthday.".to_string());
    };

    let Some(record) = book.find_mut(name) else {
        return Ok("Username not found in contacts.".to_string());
    };
    record.add_birthday(date)?;
    Ok("Birthday added successfully.".to_string())
}

/// `show-birthday <name>`.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "show-birthday", 1)?;
    let Some(record) = book.find(name) else {
        return Ok(CONTACT_NOT_FOUND.to_string());
    };

    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday was not added for this contact".to_string(),
    })
}

/// `birthdays`: the upcoming birthday report for the window ending
/// `window_days` after `today`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> Vec<String> {
    book.birthday_report(today, window_days).lines()
}

/// `remove-phone <name> <phone>`.
pub fn remove_phone(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "remove-phone", 2)?;
    let phone = arg(args, 1, "remove-phone", 2)?;

    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(CONTACT_NOT_FOUND.to_string()))?;
    Ok(record.remove_phone(phone).to_string())
}

/// `delete <name>`.
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0, "delete", 1)?;
    Ok(book.delete(name).to_string())
}
