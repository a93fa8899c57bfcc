use crate::commands::{BookshelfPaths, CmdMessage, CmdResult};
use crate::config::BookshelfConfig;
use crate::error::{Result, StorageError};
use crate::store::fs::FileStore;
use crate::store::DataStore;
use std::fs;

pub fn run(paths: &BookshelfPaths, config: &BookshelfConfig) -> Result<CmdResult> {
    let dir = &paths.data_dir;
    fs::create_dir_all(dir).map_err(|source| StorageError::Write {
        path: dir.clone(),
        source,
    })?;

    let library_file = paths.library_file(config)?;
    let mut result = CmdResult::default();
    if library_file.exists() {
        result.add_message(CmdMessage::info(format!(
            "Library already exists at {}",
            library_file.display()
        )));
    } else {
        FileStore::new(&library_file).save(&[])?;
        result.add_message(CmdMessage::success(format!(
            "Initialized library at {}",
            library_file.display()
        )));
    }
    Ok(result)
}
