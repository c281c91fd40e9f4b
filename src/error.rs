//! Error types for the contact assistant.
//!
//! Expected user-facing outcomes (duplicate phone, unknown number, and so
//! on) are plain value enums on the models, not errors. The types here
//! cover the command layer's argument failures and the ambient plumbing.

use thiserror::Error;

/// Expected failures while interpreting a command line.
///
/// The `Display` strings are the exact replies the loop prints, so the
/// outcome-to-message translation lives entirely in this layer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// A phone number or date argument failed validation
    #[error("Wrong format.")]
    InvalidFormat,

    /// The named contact is not in the address book
    #[error("No such contact.")]
    ContactNotFound,

    /// Too few arguments for the command
    #[error("Invalid index.")]
    InvalidIndex,
}

/// Errors while writing the data file.
///
/// Loading never produces one of these: a missing or corrupt data file
/// degrades to an empty address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Writing the data file failed
    #[error("Failed to write data file: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the address book failed
    #[error("Failed to serialize address book: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
