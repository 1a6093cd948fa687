//! Address Book Assistant - a command-line assistant that keeps contacts in
//! memory and reports upcoming birthdays.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: Contact records and the address book with its birthday query
//! - **clock**: Source of "today" for date-dependent commands
//! - **commands**: Input parsing, command handlers and the dispatcher
//! - **repl**: The line-oriented driver loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod clock;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::{AddressBook, BirthdayReport, DeleteStatus, PhoneRemoval, Record, UpcomingBirthday};
