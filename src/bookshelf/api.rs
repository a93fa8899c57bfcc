//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for bookshelf operations, whatever front end is calling.
//!
//! The facade owns the [`LibraryStore`] for the life of the process. Front ends hold a
//! `BookshelfApi` and pass it by reference to whatever needs it; there is no global
//! "current library".
//!
//! ## Two Stages
//!
//! [`SettingsApi`] covers the data directory itself (`config`, `init`) and never reads
//! the library. That keeps a broken or misnamed library file repairable from the
//! front end. [`SettingsApi::open_library`] then loads the library and hands back a
//! [`BookshelfApi`] for everything else.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: No stdout, stderr, or formatting
//! - **Presentation concerns**: Returns data structures, not strings
//!
//! ## Generic Over DataStore
//!
//! `BookshelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BookshelfApi<FileStore>`
//! - Testing: `BookshelfApi<InMemoryStore>`

use crate::commands;
use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::library::LibraryStore;
use crate::model::{Book, SearchField};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct SettingsApi {
    paths: commands::BookshelfPaths,
    config: BookshelfConfig,
}

impl SettingsApi {
    pub fn new(paths: commands::BookshelfPaths, config: BookshelfConfig) -> Self {
        Self { paths, config }
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, &self.config)
    }

    /// The library file the current settings point at.
    pub fn library_file(&self) -> Result<PathBuf> {
        self.paths.library_file(&self.config)
    }

    /// Loads the library from `store`. Fails if the persisted data cannot be read.
    pub fn open_library<S: DataStore>(self, store: S) -> Result<BookshelfApi<S>> {
        Ok(BookshelfApi {
            library: LibraryStore::open(store)?,
            config: self.config,
        })
    }
}

#[derive(Debug)]
pub struct BookshelfApi<S: DataStore> {
    library: LibraryStore<S>,
    config: BookshelfConfig,
}

impl<S: DataStore> BookshelfApi<S> {
    /// Every book, in insertion order.
    pub fn load_library(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.library)
    }

    pub fn add_book(
        &mut self,
        author: impl Into<String>,
        title: impl Into<String>,
        published: u16,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<commands::CmdResult> {
        let book = Book::new(author, title, published, genre, read);
        commands::add::run(&mut self.library, book)
    }

    /// Removes every book titled exactly `title`; the count is in `CmdResult::removed`.
    pub fn remove_book(&mut self, title: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.library, title)
    }

    pub fn search_books(&self, term: &str, field: SearchField) -> Result<commands::CmdResult> {
        commands::search::run(&self.library, term, field)
    }

    pub fn compute_stats(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.library)
    }

    pub fn books(&self) -> &[Book] {
        self.library.all()
    }

    pub fn settings(&self) -> &BookshelfConfig {
        &self.config
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{BookshelfPaths, CmdMessage, CmdResult, MessageLevel, Stats};
