//! Data structures for contacts and the address book.

pub mod book;
pub mod field;
pub mod record;

pub use book::AddressBook;
pub use field::{Birthday, Email, Name, Phone, BIRTHDAY_FORMAT};
pub use record::{Outcome, Record};
