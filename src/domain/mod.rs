//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the address book's domain
//! concepts: contact names, phone numbers, and birthdays. These value objects
//! validate at construction time so invalid data cannot be represented in a
//! record.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::Birthday;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
