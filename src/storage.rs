//! JSON persistence for the address book.
//!
//! The data file is a flat array, one object per contact:
//! `[{"name": ..., "phones": [...], "birthday": "DD.MM.YYYY" | null}]`.
//! Loading is deliberately forgiving: a missing or unreadable file yields
//! an empty book so the assistant always starts. Saving overwrites the
//! file wholesale with the in-memory state.

use crate::error::StorageResult;
use crate::models::{AddressBook, Birthday, Name, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Persisted form of one contact.
#[derive(Debug, Serialize, Deserialize)]
struct StoredContact {
    name: String,
    phones: Vec<String>,
    birthday: Option<String>,
}

impl StoredContact {
    fn from_record(record: &Record) -> Self {
        Self {
            name: record.name().as_str().to_string(),
            phones: record
                .phones()
                .iter()
                .map(|phone| phone.as_str().to_string())
                .collect(),
            birthday: record.birthday().map(|birthday| birthday.to_string()),
        }
    }

    fn into_record(self) -> Option<Record> {
        let name = Name::new(self.name)?;
        let birthday = self.birthday.as_deref().and_then(Birthday::parse);
        let mut record = Record::with_birthday(name, birthday);
        for number in &self.phones {
            // Saved numbers re-enter through the validated path; anything
            // that no longer passes is dropped rather than trusted.
            record.add_phone(number);
        }
        Some(record)
    }
}

/// Loads the address book from `path`. Never fails the process: any
/// problem reading or parsing the file produces an empty book.
pub fn load(path: &Path) -> AddressBook {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return AddressBook::new();
        }
        Err(err) => {
            warn!("Could not read {}: {}; starting empty", path.display(), err);
            return AddressBook::new();
        }
    };

    let stored: Vec<StoredContact> = match serde_json::from_str(&raw) {
        Ok(stored) => stored,
        Err(err) => {
            warn!(
                "Data file {} is not valid JSON: {}; starting empty",
                path.display(),
                err
            );
            return AddressBook::new();
        }
    };

    let mut book = AddressBook::new();
    for contact in stored {
        match contact.into_record() {
            Some(record) => book.add(record),
            None => warn!("Skipping stored contact with empty name"),
        }
    }
    book
}

/// Writes the whole address book to `path`, replacing previous contents.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let stored: Vec<StoredContact> = book.iter().map(StoredContact::from_record).collect();
    let json = serde_json::to_string(&stored)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_book() -> AddressBook {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut book = AddressBook::new();

        let mut ada = Record::new(Name::new("Ada").unwrap());
        ada.add_phone("0501234567");
        ada.add_phone("0509876543");
        ada.add_birthday(1990, 2, 1, today);
        book.add(ada);

        book.add(Record::new(Name::new("Grace").unwrap()));
        book
    }

    #[test]
    fn test_round_trip_preserves_everything() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        save(&sample_book(), &path).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.len(), 2);
        let names: Vec<&str> = loaded.iter().map(|rec| rec.name().as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);

        let ada = loaded.find("Ada").unwrap();
        let phones: Vec<&str> = ada.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["0501234567", "0509876543"]);
        assert_eq!(ada.birthday().unwrap().to_string(), "01.02.1990");

        assert!(loaded.find("Grace").unwrap().birthday().is_none());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let book = load(&dir.path().join("nope.json"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn test_load_drops_invalid_stored_phone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(
            &path,
            r#"[{"name":"Ada","phones":["0501234567","bad"],"birthday":null}]"#,
        )
        .unwrap();

        let book = load(&path);
        let ada = book.find("Ada").unwrap();
        assert_eq!(ada.phones().len(), 1);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "stale data with trailing garbage").unwrap();

        save(&sample_book(), &path).unwrap();
        let loaded = load(&path);
        assert_eq!(loaded.len(), 2);
    }
}
