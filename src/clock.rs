//! Clock seam for date-dependent logic.
//!
//! Birthday validation and the next-week report both depend on "today".
//! They receive it through this trait so tests can pin the calendar to a
//! known day instead of reading the system clock.

use chrono::{Local, NaiveDate};

/// Supplies the current date to the command layer.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same day. Used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
