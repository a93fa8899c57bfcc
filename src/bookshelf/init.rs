use crate::api::{BookshelfApi, BookshelfPaths, SettingsApi};
use crate::config::BookshelfConfig;
use crate::error::{BookshelfError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that overrides the platform data directory.
pub const HOME_ENV: &str = "BOOKSHELF_HOME";

/// Picks the data directory: an explicit path, then `BOOKSHELF_HOME`, then the
/// platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookshelfError::Config("Could not determine a data directory".into()))
}

/// Loads config from `data_dir`. Does not touch the library file.
pub fn load_settings(data_dir: PathBuf) -> Result<SettingsApi> {
    let config = BookshelfConfig::load(&data_dir)?;
    Ok(SettingsApi::new(BookshelfPaths::new(data_dir), config))
}

/// Opens the library file the settings point at.
pub fn open_library(settings: SettingsApi) -> Result<BookshelfApi<FileStore>> {
    let store = FileStore::new(settings.library_file()?);
    debug!(library = %store.path().display(), "Opening library");
    settings.open_library(store)
}
