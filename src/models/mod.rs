//! Data models for the address book.
//!
//! This module contains the contact record and the in-memory address book
//! that stores records by name and answers the upcoming birthday query.

pub mod address_book;
pub mod record;

pub use address_book::{
    AddressBook, BirthdayReport, DeleteStatus, UpcomingBirthday, BIRTHDAY_WINDOW_DAYS,
};
pub use record::{PhoneRemoval, Record};
