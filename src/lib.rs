//! Contact Assistant - a command-line contact manager with birthday reminders.
//!
//! Contacts live in an in-memory address book, persist to a JSON file
//! between runs, and are driven through a small interactive command loop.
//!
//! # Architecture
//!
//! - **models**: validated field types, records, and the address book
//! - **validation**: the phone/email/date format rules
//! - **birthdays**: next-week celebration calculator (weekend shift, leap days)
//! - **storage**: JSON persistence of the address book
//! - **commands**: command parsing, dispatch, and reply formatting
//! - **clock**: injectable "today" source for deterministic date logic
//! - **error** / **config**: ambient plumbing

// Re-export commonly used types
pub mod birthdays;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::LoopAction;
pub use config::Config;
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Birthday, Email, Name, Outcome, Phone, Record};
