//! Validated field types for contact records.
//!
//! Each wrapper enforces its format rule on construction, so a value that
//! exists is known to be well-formed. Construction returns `None` for bad
//! input; the command layer turns that into a `Wrong format.` reply.

use crate::validation::{is_valid_date, is_valid_email, is_valid_phone};
use chrono::NaiveDate;
use std::fmt;

/// Date format used everywhere a birthday is shown or persisted.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's name. Non-empty; its string value keys the address book.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly ten decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Option<Self> {
        is_valid_phone(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address. Validated on construction; not yet carried by
/// `Record`, kept as a reusable type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Option<Self> {
        is_valid_email(value).then(|| Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact's birthday, date-only precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Builds a birthday from a `(year, month, day)` triple. The date must
    /// be strictly between 1900-01-01 and `today`.
    pub fn from_ymd(year: i32, month: u32, day: u32, today: NaiveDate) -> Option<Self> {
        if !is_valid_date(year, month, day, today) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses the persisted `DD.MM.YYYY` form. Range rules are not
    /// re-checked here; saved data was validated when it was entered.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).ok().map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
