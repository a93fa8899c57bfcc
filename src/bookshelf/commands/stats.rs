use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::LibraryStore;
use crate::model::{Book, Decade};
use crate::store::DataStore;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts over a library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_books: usize,
    pub read_books: usize,
    /// Books per genre; books without a genre are not counted here.
    pub genre: BTreeMap<String, usize>,
    pub author: BTreeMap<String, usize>,
    pub decades: BTreeMap<Decade, usize>,
}

impl Stats {
    pub fn compute(books: &[Book]) -> Self {
        let mut stats = Stats {
            total_books: books.len(),
            ..Stats::default()
        };

        for book in books {
            if book.read {
                stats.read_books += 1;
            }
            if !book.genre.is_empty() {
                *stats.genre.entry(book.genre.clone()).or_default() += 1;
            }
            if !book.author.is_empty() {
                *stats.author.entry(book.author.clone()).or_default() += 1;
            }
            *stats.decades.entry(book.decade()).or_default() += 1;
        }

        stats
    }

    pub fn unread_books(&self) -> usize {
        self.total_books - self.read_books
    }

    /// Share of books read, as a whole percentage.
    ///
    /// Halves round up, so 1 of 8 read is 13% where banker's rounding would give 12%.
    pub fn percent_read(&self) -> usize {
        if self.total_books == 0 {
            return 0;
        }
        (200 * self.read_books + self.total_books) / (2 * self.total_books)
    }

    /// Up to `n` authors with the most books, ties broken by name.
    pub fn top_authors(&self, n: usize) -> Vec<(&str, usize)> {
        let mut authors: Vec<(&str, usize)> = self
            .author
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        authors.sort_by(|(name_a, a), (name_b, b)| b.cmp(a).then_with(|| name_a.cmp(name_b)));
        authors.truncate(n);
        authors
    }
}

pub fn run<S: DataStore>(library: &LibraryStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(Stats::compute(library.all())))
}
