//! # Library Store
//!
//! [`LibraryStore`] holds the ordered collection of books in memory and writes it
//! through its [`DataStore`] after every mutation.
//!
//! The in-memory list always matches the last successful save: when a save fails the
//! mutation is undone before the error is returned, so callers never observe a book
//! that was not persisted.

use crate::error::Result;
use crate::model::Book;
use crate::store::DataStore;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct LibraryStore<S: DataStore> {
    store: S,
    books: Vec<Book>,
}

impl<S: DataStore> LibraryStore<S> {
    /// Loads the persisted library. A store with no data yields an empty library.
    pub fn open(store: S) -> Result<Self> {
        let books = store.load()?;
        debug!(count = books.len(), "Opened library");
        Ok(Self { store, books })
    }

    /// Current snapshot, in insertion order.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Appends a book and persists. Duplicate titles are allowed.
    pub fn add(&mut self, book: Book) -> Result<()> {
        book.validate()?;
        self.books.push(book);

        if let Err(e) = self.store.save(&self.books) {
            let dropped = self.books.pop();
            warn!(
                title = dropped.as_ref().map(|b| b.title.as_str()).unwrap_or_default(),
                "Save failed, add rolled back"
            );
            return Err(e);
        }

        debug!(count = self.books.len(), "Added book");
        Ok(())
    }

    /// Removes every book whose title matches exactly (case-sensitive) and returns
    /// how many went. Zero matches is not an error and writes nothing.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        let kept: Vec<Book> = self
            .books
            .iter()
            .filter(|b| b.title != title)
            .cloned()
            .collect();
        let removed = self.books.len() - kept.len();

        if removed == 0 {
            debug!(title, "Nothing to remove");
            return Ok(0);
        }

        self.store.save(&kept).map_err(|e| {
            warn!(title, "Save failed, remove rolled back");
            e
        })?;
        self.books = kept;

        debug!(title, removed, "Removed books");
        Ok(removed)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BookshelfError, ValidationError};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn dune() -> Book {
        Book::new("Herbert", "Dune", 1965, "SciFi", true)
    }

    #[test]
    fn opens_with_persisted_books() {
        let fixture = StoreFixture::new().with_books(3);
        let library = LibraryStore::open(fixture.store).unwrap();
        assert_eq!(library.len(), 3);
        assert_eq!(library.all()[0].title, "Test Book 1");
    }

    #[test]
    fn add_appends_and_persists() {
        let mut library = LibraryStore::open(InMemoryStore::new()).unwrap();
        library.add(dune()).unwrap();
        library
            .add(Book::new("Tolkien", "Hobbit", 1937, "Fantasy", false))
            .unwrap();

        let titles: Vec<_> = library.all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Hobbit"]);
        assert_eq!(library.store().persisted(), library.all());
        assert_eq!(library.store().save_count(), 2);
    }

    #[test]
    fn add_allows_duplicate_titles() {
        let mut library = LibraryStore::open(InMemoryStore::new()).unwrap();
        library.add(dune()).unwrap();
        library.add(dune()).unwrap();
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn add_rejects_invalid_books() {
        let mut library = LibraryStore::open(InMemoryStore::new()).unwrap();
        let err = library
            .add(Book::new("Herbert", "", 1965, "", false))
            .unwrap_err();

        assert!(matches!(
            err,
            BookshelfError::Validation(ValidationError::EmptyTitle)
        ));
        assert!(library.is_empty());
        assert_eq!(library.store().save_count(), 0);
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let mut store = InMemoryStore::new();
        store.fail_saves(true);
        let mut library = LibraryStore::open(store).unwrap();

        assert!(matches!(
            library.add(dune()),
            Err(BookshelfError::Storage(_))
        ));
        assert!(library.is_empty());
    }

    #[test]
    fn remove_is_exact_and_case_sensitive() {
        let fixture = StoreFixture::new()
            .with_classics()
            .with_book(Book::new("Herbert", "Dune Messiah", 1969, "SciFi", false));
        let mut library = LibraryStore::open(fixture.store).unwrap();

        assert_eq!(library.remove("dune").unwrap(), 0);
        assert_eq!(library.remove("Dune").unwrap(), 1);

        let titles: Vec<_> = library.all().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Hobbit", "Dune Messiah"]);
    }

    #[test]
    fn remove_takes_every_match() {
        let fixture = StoreFixture::new()
            .with_book(dune())
            .with_book(Book::new("Someone", "Dune", 2021, "", false));
        let mut library = LibraryStore::open(fixture.store).unwrap();

        assert_eq!(library.remove("Dune").unwrap(), 2);
        assert!(library.is_empty());
        assert!(library.store().persisted().is_empty());
    }

    #[test]
    fn remove_twice_returns_zero_second_time() {
        let fixture = StoreFixture::new().with_classics();
        let mut library = LibraryStore::open(fixture.store).unwrap();

        assert_eq!(library.remove("Dune").unwrap(), 1);
        assert_eq!(library.remove("Dune").unwrap(), 0);
    }

    #[test]
    fn failed_save_rolls_back_remove() {
        let fixture = StoreFixture::new().with_classics();
        let mut store = fixture.store;
        store.fail_saves(true);
        let mut library = LibraryStore::open(store).unwrap();

        assert!(library.remove("Dune").is_err());
        assert_eq!(library.len(), 2);
    }
}
