//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a contact is made
//! of: its name, its phone numbers and its birthday. Each value object is
//! validated at construction time so an invalid value can never be stored.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
