//! The address book: a name-keyed, insertion-ordered set of records.

use crate::models::record::{Outcome, Record};
use std::collections::HashMap;

/// Maps a contact name to its record.
///
/// Keys are the plain string value of the name, so two `Name` instances
/// holding the same text address the same entry. Iteration follows
/// insertion order. The book exclusively owns its records.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record under its name. An existing entry with the same
    /// name is overwritten silently; this upsert behavior is intentional
    /// and the command layer guards interactive adds against it.
    pub fn add(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record with the given name.
    pub fn delete(&mut self, name: &str) -> Outcome {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            Outcome::Deleted
        } else {
            Outcome::NotFound
        }
    }

    /// All records, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
