//! The in-memory address book and its upcoming birthday query.

use super::record::Record;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Default length of the upcoming birthday window, in days.
pub const BIRTHDAY_WINDOW_DAYS: u32 = 7;

/// Outcome of [`AddressBook::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStatus {
    Deleted,
    NotFound,
}

impl fmt::Display for DeleteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteStatus::Deleted => write!(f, "Record deleted"),
            DeleteStatus::NotFound => write!(f, "Record not found"),
        }
    }
}

/// A contact whose birthday falls inside the query window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// The birthday moved into the year it is next celebrated
    pub date: NaiveDate,
}

/// Result of the weekly birthday query, rendered as the assistant prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReport {
    pub upcoming: Vec<UpcomingBirthday>,
}

impl BirthdayReport {
    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }

    /// Output lines: a header, then one line per contact or a "none" line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec!["Upcoming birthdays this week:".to_string()];
        if self.upcoming.is_empty() {
            lines.push("No birthdays next week.".to_string());
        } else {
            lines.extend(
                self.upcoming
                    .iter()
                    .map(|u| format!("{}: {}", u.name, u.date.format("%d.%m.%Y"))),
            );
        }
        lines
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}

/// Mapping from contact name to record.
///
/// Every stored record's name equals its key. Iteration is ordered by name.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record`, replacing any record already stored under its name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        debug!(name = %key, "Storing record");
        self.records.insert(key, record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> DeleteStatus {
        match self.records.remove(name) {
            Some(_) => {
                debug!(name, "Deleted record");
                DeleteStatus::Deleted
            }
            None => DeleteStatus::NotFound,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday lies in `[today, today + window_days]`.
    ///
    /// A birthday is projected onto today's year and pushed to the next year
    /// only if that projection is strictly before `today`. Both window bounds
    /// are inclusive. Results are sorted by date, then name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u32) -> Vec<UpcomingBirthday> {
        let window_end = today + Duration::days(i64::from(window_days));

        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|(name, record)| {
                let date = record.birthday()?.next_occurrence(today)?;
                (today <= date && date <= window_end).then(|| UpcomingBirthday {
                    name: name.clone(),
                    date,
                })
            })
            .collect();

        upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        upcoming
    }

    /// The seven-day report printed by the `birthdays` command.
    pub fn get_birthdays_per_week(&self, today: NaiveDate) -> BirthdayReport {
        self.birthday_report(today, BIRTHDAY_WINDOW_DAYS)
    }

    /// Like [`AddressBook::get_birthdays_per_week`] with a custom window.
    pub fn birthday_report(&self, today: NaiveDate, window_days: u32) -> BirthdayReport {
        BirthdayReport {
            upcoming: self.upcoming_birthdays(today, window_days),
        }
    }
}
