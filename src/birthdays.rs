//! Next-week birthday calculator.
//!
//! Pure date arithmetic: "today" is always passed in, never read from the
//! system clock, so every year/leap/weekend boundary is testable.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Moves a weekend celebration forward to the following Monday.
pub fn shift_from_weekend(mut date: NaiveDate) -> NaiveDate {
    while is_weekend(date) {
        date += Duration::days(1);
    }
    date
}

/// The birthday's occurrence in `year`. A 29 February birthday falls on
/// 28 February in non-leap years.
fn occurrence_in(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .expect("month and day taken from a valid date")
}

/// Resolves the upcoming celebration date for `birthday`, if it lands
/// within the seven days starting at `today`.
///
/// The branch that decides whether to project into next year looks at the
/// un-shifted current-year date, including its weekday. That asymmetry
/// with the window test below is long-standing behavior and is kept as-is.
pub fn upcoming_celebration(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = occurrence_in(birthday, today.year());
    let resolved = if this_year < today && !is_weekend(this_year) {
        shift_from_weekend(occurrence_in(birthday, today.year() + 1))
    } else {
        shift_from_weekend(this_year)
    };
    let days_until = (resolved - today).num_days();
    (0..7).contains(&days_until).then_some(resolved)
}

/// Builds the day-by-day congratulation report for the week ahead.
///
/// Each qualifying contact is grouped under its resolved celebration date;
/// dates are emitted ascending, names within a date sorted, one line per
/// date as `"<Weekday>: <name1>, <name2>"`.
pub fn birthdays_per_week<'a, I>(entries: I, today: NaiveDate) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, NaiveDate)>,
{
    let mut to_celebrate: BTreeMap<NaiveDate, Vec<&str>> = BTreeMap::new();
    for (name, birthday) in entries {
        if let Some(date) = upcoming_celebration(birthday, today) {
            to_celebrate.entry(date).or_default().push(name);
        }
    }
    to_celebrate
        .into_iter()
        .map(|(date, mut names)| {
            names.sort_unstable();
            format!("{}: {}", date.format("%A"), names.join(", "))
        })
        .collect()
}
