use crate::config::{check_library_file, BookshelfConfig};
use crate::error::{BookshelfError, Result};
use crate::model::Book;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod init;
pub mod list;
pub mod remove;
pub mod search;
pub mod stats;

pub use stats::Stats;

#[derive(Debug, Clone)]
pub struct BookshelfPaths {
    pub data_dir: PathBuf,
}

impl BookshelfPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Where the library lives. Fails when `library-file` names something that is not
    /// a plain file of its own, which can happen after a hand edit of config.json.
    pub fn library_file(&self, config: &BookshelfConfig) -> Result<PathBuf> {
        check_library_file(&config.library_file).map_err(|e| {
            BookshelfError::Config(format!(
                "{} (fix it with `bookshelf config library-file <NAME>`)",
                e
            ))
        })?;
        Ok(self.data_dir.join(&config.library_file))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<Book>,
    pub listed_books: Vec<Book>,
    pub removed: usize,
    pub stats: Option<Stats>,
    pub config: Option<BookshelfConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: BookshelfConfig) -> Self {
        self.config = Some(config);
        self
    }
}
