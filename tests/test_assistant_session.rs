//! End-to-end tests for a full assistant session.
//!
//! These tests drive the public command interface the way the interactive
//! loop does: feed lines, assert replies, and check that state survives a
//! save/load cycle.

use chrono::NaiveDate;
use contact_assistant::commands::{handle, LoopAction};
use contact_assistant::{storage, AddressBook, FixedClock};

// 2024-06-10 is a Monday.
fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
}

fn run(book: &mut AddressBook, line: &str) -> String {
    match handle(line, book, &clock()) {
        LoopAction::Reply(reply) => reply,
        LoopAction::Exit => panic!("unexpected exit for {line:?}"),
    }
}

/// Builds a book through commands, saves it, reloads it, and verifies the
/// reloaded book answers queries identically.
#[test]
fn test_session_survives_save_and_load() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add-contact Ada"), "Contact added.");
    assert_eq!(run(&mut book, "add-number Ada 0501234567"), "Number added.");
    assert_eq!(run(&mut book, "add-number Ada 0509876543"), "Number added.");
    assert_eq!(run(&mut book, "add-birthday Ada 12 6 1990"), "Birthday added.");
    assert_eq!(run(&mut book, "add-contact Grace"), "Contact added.");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    storage::save(&book, &path).unwrap();

    let mut reloaded = storage::load(&path);
    assert_eq!(
        run(&mut reloaded, "show-phones Ada"),
        "0501234567; 0509876543"
    );
    assert_eq!(run(&mut reloaded, "show-birthday Ada"), "12.06.1990");
    assert_eq!(run(&mut reloaded, "show-phones Grace"), "No numbers added.");
    assert_eq!(
        run(&mut reloaded, "all"),
        "Contact name: Ada; phones: 0501234567; 0509876543; birthday is at 12.06.1990\n\
         Contact name: Grace; no phones added; no birthday added"
    );
}

/// The birthdays report reflects commands issued in the same session and
/// groups contacts sharing a celebration day.
#[test]
fn test_birthdays_report_over_session() {
    let mut book = AddressBook::new();
    for (name, birthday) in [
        ("Ada", "12 6 1990"),   // Wednesday this week
        ("Zoe", "12 6 1985"),   // same day as Ada
        ("Mia", "15 6 1991"),   // Saturday, shifts past the window
        ("Kim", "1 3 1970"),    // long past
    ] {
        run(&mut book, &format!("add-contact {name}"));
        run(&mut book, &format!("add-birthday {name} {birthday}"));
    }
    assert_eq!(run(&mut book, "birthdays"), "Wednesday: Ada, Zoe");

    run(&mut book, "delete-birthday Zoe");
    assert_eq!(run(&mut book, "birthdays"), "Wednesday: Ada");

    run(&mut book, "delete-contact Ada");
    assert_eq!(
        run(&mut book, "birthdays"),
        "No birthdays to celebrate next week."
    );
}

/// Expected-failure replies never terminate the session.
#[test]
fn test_bad_input_keeps_session_alive() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add-number"), "Invalid index.");
    assert_eq!(run(&mut book, "add-number Ada 050"), "No such contact.");
    run(&mut book, "add-contact Ada");
    assert_eq!(run(&mut book, "add-number Ada 050"), "Wrong format.");
    assert_eq!(run(&mut book, "add-birthday Ada x y z"), "Wrong format.");
    assert_eq!(run(&mut book, "nonsense"), "Invalid command.");
    assert_eq!(run(&mut book, "add-number Ada 0501234567"), "Number added.");
}
