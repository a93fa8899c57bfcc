//! # Storage Layer
//!
//! This module defines the storage abstraction for bookshelf. The [`DataStore`] trait
//! lets the library work against different backends.
//!
//! The library is small, so a store deals in whole collections: `load` returns every
//! book and `save` rewrites every book. There is no per-record update.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - The whole library lives in one JSON array (`library.json` by default)
//!   - Saves go to a temporary sibling file which is then renamed over the target
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail saves, to exercise error paths
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── library.json        # JSON array of books
//! └── config.json         # Configuration
//! ```
//!
//! Each book is stored as
//! `{"author": ..., "title": ..., "published": 1965, "genre": ..., "read": true}`.

use crate::error::Result;
use crate::model::Book;

pub mod fs;
pub mod memory;

/// Abstract interface for library persistence.
pub trait DataStore {
    /// Load every book. A store that has never been written yields an empty library.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the persisted library with `books`.
    fn save(&mut self, books: &[Book]) -> Result<()>;
}
