//! A single contact record and the outcomes its operations report.

use crate::models::field::{Birthday, Name, Phone};
use chrono::NaiveDate;
use std::fmt;

/// Result of a record or address-book mutation.
///
/// These are expected outcomes, returned as values: bad user input never
/// panics and never becomes an `Err`. The command layer owns the mapping
/// from each variant to a user-facing string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    AlreadyExists,
    AlreadySet,
    Changed,
    Deleted,
    NotFound,
    NotSet,
    InvalidFormat,
}

/// One contact: a name, an ordered list of unique phones, and at most one
/// birthday. The name is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self::with_birthday(name, None)
    }

    /// Loader entry point: the birthday was validated when it was saved.
    pub fn with_birthday(name: Name, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Appends a phone number, rejecting bad formats and duplicates.
    pub fn add_phone(&mut self, number: &str) -> Outcome {
        let Some(phone) = Phone::new(number) else {
            return Outcome::InvalidFormat;
        };
        if self.phones.contains(&phone) {
            return Outcome::AlreadyExists;
        }
        self.phones.push(phone);
        Outcome::Added
    }

    /// Removes the first exact match for `number`.
    pub fn delete_phone(&mut self, number: &str) -> Outcome {
        match self.phones.iter().position(|phone| phone.as_str() == number) {
            Some(index) => {
                self.phones.remove(index);
                Outcome::Deleted
            }
            None => Outcome::NotFound,
        }
    }

    /// Substring search over the stored numbers. An empty result means no
    /// match; equality is deliberately not required.
    pub fn find_phone(&self, fragment: &str) -> Vec<String> {
        self.phones
            .iter()
            .filter(|phone| phone.as_str().contains(fragment))
            .map(|phone| phone.as_str().to_string())
            .collect()
    }

    /// Replaces `current` with `new` in place, keeping its position.
    pub fn edit_phone(&mut self, current: &str, new: &str) -> Outcome {
        let Some(replacement) = Phone::new(new) else {
            return Outcome::InvalidFormat;
        };
        match self
            .phones
            .iter_mut()
            .find(|phone| phone.as_str() == current)
        {
            Some(slot) => {
                *slot = replacement;
                Outcome::Changed
            }
            None => Outcome::NotFound,
        }
    }

    /// Sets the birthday if none is present.
    pub fn add_birthday(&mut self, year: i32, month: u32, day: u32, today: NaiveDate) -> Outcome {
        let Some(birthday) = Birthday::from_ymd(year, month, day, today) else {
            return Outcome::InvalidFormat;
        };
        if self.birthday.is_some() {
            return Outcome::AlreadySet;
        }
        self.birthday = Some(birthday);
        Outcome::Added
    }

    /// Overwrites an existing birthday.
    pub fn edit_birthday(&mut self, year: i32, month: u32, day: u32, today: NaiveDate) -> Outcome {
        let Some(birthday) = Birthday::from_ymd(year, month, day, today) else {
            return Outcome::InvalidFormat;
        };
        if self.birthday.is_none() {
            return Outcome::NotSet;
        }
        self.birthday = Some(birthday);
        Outcome::Changed
    }

    /// Clears the birthday if one is set.
    pub fn delete_birthday(&mut self) -> Outcome {
        if self.birthday.take().is_some() {
            Outcome::Deleted
        } else {
            Outcome::NotSet
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}", self.name)?;
        if self.phones.is_empty() {
            write!(f, "; no phones added")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
            write!(f, "; phones: {}", phones.join("; "))?;
        }
        match &self.birthday {
            Some(birthday) => write!(f, "; birthday is at {birthday}"),
            None => write!(f, "; no birthday added"),
        }
    }
}
