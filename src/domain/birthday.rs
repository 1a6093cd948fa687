//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded fields, so the exact shape is checked first.
static BIRTHDAY_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// The full date is kept, but only day and month matter for the recurring
/// birthday query.
///
/// # Example
///
/// ```
/// use address_book_assistant::domain::Birthday;
///
/// let birthday = Birthday::parse("15.06.2020").unwrap();
/// assert_eq!(birthday.to_string(), "15.06.2020");
/// assert!(Birthday::parse("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not exactly
    /// `DD.MM.YYYY` or does not name a real calendar date.
    pub fn parse(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_SHAPE_RE.is_match(text) {
            return Err(ValidationError::InvalidBirthday(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(text.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's month and day placed in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).or_else(|| {
            if self.0.month() == 2 && self.0.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first celebration of this birthday on or after `today`.
    ///
    /// The date is projected onto `today`'s year and moved to the following
    /// year only when it is strictly before `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(today.year())?;
        if this_year < today {
            self.in_year(today.year() + 1)
        } else {
            Some(this_year)
        }
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("15.06.2020").unwrap();
        assert_eq!(birthday.date(), ymd(2020, 6, 15));
    }

    #[test]
    fn test_birthday_round_trips_text() {
        for text in ["01.01.2000", "29.02.2024", "31.12.1999", "15.06.2020"] {
            assert_eq!(Birthday::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::parse("31.02.2020").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("00.01.2020").is_err());
        assert!(Birthday::parse("01.13.2020").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_shape() {
        assert!(Birthday::parse("1.1.2020").is_err());
        assert!(Birthday::parse("2020-06-15").is_err());
        assert!(Birthday::parse("15/06/2020").is_err());
        assert!(Birthday::parse("15.06.20").is_err());
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse(" 15.06.2020").is_err());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::parse("15.06.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 6, 10)), Some(ymd(2024, 6, 15)));
    }

    #[test]
    fn test_next_occurrence_today_is_not_advanced() {
        let birthday = Birthday::parse("10.06.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 6, 10)), Some(ymd(2024, 6, 10)));
    }

    #[test]
    fn test_next_occurrence_passed_moves_to_next_year() {
        let birthday = Birthday::parse("09.06.1990").unwrap();
        assert_eq!(birthday.next_occurrence(ymd(2024, 6, 10)), Some(ymd(2025, 6, 9)));

        let new_year = Birthday::parse("01.01.2000").unwrap();
        assert_eq!(new_year.next_occurrence(ymd(2024, 12, 28)), Some(ymd(2025, 1, 1)));
    }

    #[test]
    fn test_leap_day_in_common_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2023), Some(ymd(2023, 2, 28)));
        assert_eq!(birthday.in_year(2024), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("15.06.2020").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"15.06.2020\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }
}
