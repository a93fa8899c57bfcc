use crate::error::ValidationError;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Latest publication year a book may carry.
pub const MAX_YEAR: u16 = 2100;

/// A single record in the library, persisted as one object of the JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
    pub published: u16,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub read: bool,
}

impl Book {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        published: u16,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            published,
            genre: genre.into(),
            read,
        }
    }

    /// Checks the invariants a record must hold before it is added.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if self.published > MAX_YEAR {
            return Err(ValidationError::YearOutOfRange(self.published));
        }
        Ok(())
    }

    pub fn decade(&self) -> Decade {
        Decade::of(self.published)
    }

    /// Text of the given field, as matched by search.
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
            SearchField::Genre => &self.genre,
        }
    }
}

/// The book attribute a search is run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    #[default]
    Title,
    Author,
    Genre,
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
            SearchField::Genre => "genre",
        };
        f.write_str(name)
    }
}

/// Ten-year bucket a publication year falls into, e.g. 1965 -> 1960s.
///
/// Ordered by start year so decades sort chronologically, and serialized
/// as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decade(u16);

impl Decade {
    pub fn of(year: u16) -> Self {
        Decade((year / 10) * 10)
    }
}

impl fmt::Display for Decade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl Serialize for Decade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
