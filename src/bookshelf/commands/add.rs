use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::LibraryStore;
use crate::model::Book;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut LibraryStore<S>, book: Book) -> Result<CmdResult> {
    library.add(book.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added: {} by {}",
        book.title, book.author
    )));
    Ok(result.with_affected_books(vec![book]))
}
