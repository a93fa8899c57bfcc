use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::LibraryStore;
use crate::model::{Book, SearchField};
use crate::store::DataStore;

/// Books whose `field` contains `term`, ignoring case, in library order.
///
/// An empty term matches every book.
pub fn search(books: &[Book], term: &str, field: SearchField) -> Vec<Book> {
    let term_lower = term.to_lowercase();
    books
        .iter()
        .filter(|book| book.field(field).to_lowercase().contains(&term_lower))
        .cloned()
        .collect()
}

pub fn run<S: DataStore>(
    library: &LibraryStore<S>,
    term: &str,
    field: SearchField,
) -> Result<CmdResult> {
    let matches = search(library.all(), term, field);
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No books with {} matching \"{}\".",
            field, term
        )));
    }
    Ok(result.with_listed_books(matches))
}
