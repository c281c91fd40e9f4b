//! Command parsing, dispatch, and reply formatting for the interactive loop.
//!
//! This layer owns every user-facing string: the models report `Outcome`
//! values and the functions here translate them. The core is never asked
//! to format anything except a record's own display line.

use crate::birthdays;
use crate::clock::Clock;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Name, Outcome, Record};

/// What the loop should do after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopAction {
    /// Print this reply and keep going
    Reply(String),
    /// Save and leave
    Exit,
}

/// Interprets one non-empty line of user input against the book.
pub fn handle(line: &str, book: &mut AddressBook, clock: &dyn Clock) -> LoopAction {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(word) => word.to_lowercase(),
        None => return LoopAction::Reply("Invalid command.".to_string()),
    };
    let args: Vec<&str> = parts.collect();

    if matches!(command.as_str(), "close" | "exit" | "goodbye") {
        return LoopAction::Exit;
    }

    let reply = dispatch(&command, &args, book, clock)
        .unwrap_or_else(|err| err.to_string());
    LoopAction::Reply(reply)
}

fn dispatch(
    command: &str,
    args: &[&str],
    book: &mut AddressBook,
    clock: &dyn Clock,
) -> CommandResult<String> {
    match command {
        "hello" => Ok("How can I help you?".to_string()),
        "add-contact" => add_contact(args, book),
        "add-number" => add_number(args, book),
        "add-birthday" => add_birthday(args, book, clock),
        "change-phone" => change_phone(args, book),
        "change-birthday" => change_birthday(args, book, clock),
        "show-phones" => show_phones(args, book),
        "show-birthday" => show_birthday(args, book),
        "find-phone" => find_phone(args, book),
        "delete-number" => delete_number(args, book),
        "delete-birthday" => delete_birthday(args, book),
        "delete-contact" => delete_contact(args, book),
        "all" => Ok(list_contacts(book)),
        "birthdays" => Ok(birthdays_report(book, clock)),
        _ => Ok("Invalid command.".to_string()),
    }
}

/// Positional argument or `Invalid index.`
fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index).copied().ok_or(CommandError::InvalidIndex)
}

/// Numeric argument or `Wrong format.`
fn number_arg<T: std::str::FromStr>(args: &[&str], index: usize) -> CommandResult<T> {
    arg(args, index)?
        .parse()
        .map_err(|_| CommandError::InvalidFormat)
}

fn record_mut<'a>(book: &'a mut AddressBook, name: &str) -> CommandResult<&'a mut Record> {
    book.find_mut(name).ok_or(CommandError::ContactNotFound)
}

fn record<'a>(book: &'a AddressBook, name: &str) -> CommandResult<&'a Record> {
    book.find(name).ok_or(CommandError::ContactNotFound)
}

/// Translation of phone-operation outcomes to replies.
fn phone_reply(outcome: Outcome) -> String {
    match outcome {
        Outcome::Added => "Number added.",
        Outcome::AlreadyExists => "Number already exists.",
        Outcome::Changed => "Number changed.",
        Outcome::Deleted => "Number deleted.",
        Outcome::NotFound => "No such number.",
        _ => "Wrong format.",
    }
    .to_string()
}

/// Translation of birthday-operation outcomes to replies.
fn birthday_reply(outcome: Outcome) -> String {
    match outcome {
        Outcome::Added => "Birthday added.",
        Outcome::AlreadySet => "Birthday is already set.",
        Outcome::Changed => "Birthday changed.",
        Outcome::Deleted => "Birthday deleted.",
        Outcome::NotSet => "No birthday set.",
        _ => "Wrong format.",
    }
    .to_string()
}

fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    if book.find(name).is_some() {
        return Ok("Contact is already in list.".to_string());
    }
    let name = Name::new(name).ok_or(CommandError::InvalidFormat)?;
    book.add(Record::new(name));
    Ok("Contact added.".to_string())
}

fn add_number(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let number = arg(args, 1)?;
    let rec = record_mut(book, name)?;
    Ok(phone_reply(rec.add_phone(number)))
}

// Birthday arguments follow the display format: day month year.
fn add_birthday(args: &[&str], book: &mut AddressBook, clock: &dyn Clock) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let day: u32 = number_arg(args, 1)?;
    let month: u32 = number_arg(args, 2)?;
    let year: i32 = number_arg(args, 3)?;
    let today = clock.today();
    let rec = record_mut(book, name)?;
    Ok(birthday_reply(rec.add_birthday(year, month, day, today)))
}

fn change_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let current = arg(args, 1)?;
    let new = arg(args, 2)?;
    let rec = record_mut(book, name)?;
    Ok(phone_reply(rec.edit_phone(current, new)))
}

fn change_birthday(
    args: &[&str],
    book: &mut AddressBook,
    clock: &dyn Clock,
) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let day: u32 = number_arg(args, 1)?;
    let month: u32 = number_arg(args, 2)?;
    let year: i32 = number_arg(args, 3)?;
    let today = clock.today();
    let rec = record_mut(book, name)?;
    Ok(birthday_reply(rec.edit_birthday(year, month, day, today)))
}

fn show_phones(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let rec = record(book, arg(args, 0)?)?;
    if rec.phones().is_empty() {
        return Ok("No numbers added.".to_string());
    }
    let phones: Vec<&str> = rec.phones().iter().map(|phone| phone.as_str()).collect();
    Ok(phones.join("; "))
}

fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let rec = record(book, arg(args, 0)?)?;
    Ok(match rec.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "No birthday added.".to_string(),
    })
}

fn find_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let fragment = arg(args, 1)?;
    let rec = record(book, name)?;
    let found = rec.find_phone(fragment);
    if found.is_empty() {
        Ok("No such numbers.".to_string())
    } else {
        Ok(format!("Phones found: {}", found.join(", ")))
    }
}

fn delete_number(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    let number = arg(args, 1)?;
    let rec = record_mut(book, name)?;
    Ok(phone_reply(rec.delete_phone(number)))
}

fn delete_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let rec = record_mut(book, arg(args, 0)?)?;
    Ok(birthday_reply(rec.delete_birthday()))
}

fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = arg(args, 0)?;
    record(book, name)?;
    Ok(match book.delete(name) {
        Outcome::Deleted => "Contact deleted.".to_string(),
        _ => "No such contact.".to_string(),
    })
}

fn list_contacts(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    let lines: Vec<String> = book.iter().map(|rec| rec.to_string()).collect();
    lines.join("\n")
}

fn birthdays_report(book: &AddressBook, clock: &dyn Clock) -> String {
    let entries = book.iter().filter_map(|rec| {
        rec.birthday()
            .map(|birthday| (rec.name().as_str(), birthday.date()))
    });
    let lines = birthdays::birthdays_per_week(entries, clock.today());
    if lines.is_empty() {
        "No birthdays to celebrate next week.".to_string()
    } else {
        lines.join("\n")
    }
}
