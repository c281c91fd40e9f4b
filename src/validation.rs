//! Pure validators for phone numbers, email addresses, and calendar dates.
//!
//! These are the only places where format rules live; the field types in
//! `models::field` call into them on construction.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w.-]+@[\w.-]{2,}\.\w{2,}$").expect("Failed to compile email regex"));

/// True iff `number` is exactly ten ASCII decimal digits.
pub fn is_valid_phone(number: &str) -> bool {
    PHONE_REGEX.is_match(number)
}

/// True iff `value` has a `local@domain.tld` shape.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// True iff the triple names a real calendar day strictly after 1900-01-01
/// and strictly before `today`. Never panics on out-of-range input.
pub fn is_valid_date(year: i32, month: u32, day: u32, today: NaiveDate) -> bool {
    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        return false;
    };
    let floor = NaiveDate::from_ymd_opt(1900, 1, 1).expect("1900-01-01 is a valid date");
    floor < date && date < today
}
