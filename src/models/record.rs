//! Contact record: one person's name, phones and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`Record::remove_phone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneRemoval {
    /// The first matching number was removed
    Removed,
    /// No stored number matched
    NotFound,
}

impl fmt::Display for PhoneRemoval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneRemoval::Removed => write!(f, "Phone deleted"),
            PhoneRemoval::NotFound => write!(f, "Phone not found"),
        }
    }
}

/// A contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> PhoneRemoval {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                PhoneRemoval::Removed
            }
            None => PhoneRemoval::NotFound,
        }
    }

    /// Replace the whole phone list with `phone`.
    ///
    /// This is a single-slot overwrite, not an edit of one entry: afterwards
    /// the record holds exactly one number. Invalid input leaves the list
    /// unchanged.
    pub fn edit_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        self.phones = vec![phone];
        Ok(())
    }

    /// Phones joined with `"; "`, or `None` when there are none.
    pub fn find_phone(&self) -> Option<String> {
        if self.phones.is_empty() {
            None
        } else {
            Some(self.joined_phones("; "))
        }
    }

    /// Parse and set the birthday, replacing any earlier one.
    pub fn add_birthday(&mut self, date: &str) -> Result<&Birthday, ValidationError> {
        let birthday = Birthday::parse(date)?;
        Ok(self.birthday.insert(birthday))
    }

    pub(crate) fn joined_phones(&self, separator: &str) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, Phone: {}",
            self.name,
            self.find_phone().unwrap_or_default()
        )
    }
}
