use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookshelfError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Invalid book: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(String),
}

/// Failures reading or writing the persisted library.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed data in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("could not serialize data: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// A book record rejected before it reaches the library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("author cannot be empty")]
    EmptyAuthor,

    #[error("published year {0} is out of range (0-{max})", max = crate::model::MAX_YEAR)]
    YearOutOfRange(u16),
}

pub type Result<T> = std::result::Result<T, BookshelfError>;
