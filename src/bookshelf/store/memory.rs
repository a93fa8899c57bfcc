use super::DataStore;
use crate::error::{Result, StorageError};
use crate::model::Book;
use std::io;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    saves: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following `save` fail with a write error.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// What a reload would see.
    pub fn persisted(&self) -> &[Book] {
        &self.books
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_saves {
            return Err(StorageError::Write {
                path: PathBuf::from("<memory>"),
                source: io::Error::other("simulated write failure"),
            }
            .into());
        }
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_book(mut self, book: Book) -> Self {
            self.store.books.push(book);
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let book = Book::new(
                    format!("Author {}", i + 1),
                    format!("Test Book {}", i + 1),
                    1990 + i as u16,
                    "Testing",
                    i % 2 == 0,
                );
                self.store.books.push(book);
            }
            self
        }

        /// The two-book shelf used across scenario tests.
        pub fn with_classics(self) -> Self {
            self.with_book(Book::new("Herbert", "Dune", 1965, "SciFi", true))
                .with_book(Book::new("Tolkien", "Hobbit", 1937, "Fantasy", false))
        }
    }
}
