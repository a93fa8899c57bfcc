use crate::commands::CmdResult;
use crate::error::Result;
use crate::library::LibraryStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &LibraryStore<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_books(library.all().to_vec()))
}
