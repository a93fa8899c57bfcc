use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::library::LibraryStore;
use crate::store::DataStore;

pub fn run<S: DataStore>(library: &mut LibraryStore<S>, title: &str) -> Result<CmdResult> {
    let removed = library.remove(title)?;
    let mut result = CmdResult {
        removed,
        ..CmdResult::default()
    };

    match removed {
        0 => result.add_message(CmdMessage::warning(format!(
            "No book titled \"{}\" found.",
            title
        ))),
        1 => result.add_message(CmdMessage::success(format!("Book removed: {}", title))),
        n => result.add_message(CmdMessage::success(format!(
            "{} books removed: {}",
            n, title
        ))),
    }

    Ok(result)
}
