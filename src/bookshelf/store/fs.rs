use super::DataStore;
use crate::error::{Result, StorageError};
use crate::model::Book;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_LIBRARY_FILE: &str = "library.json";

/// Stores the library as a single JSON document on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store for `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self {
        Self::new(dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Serializes with four-space indentation.
fn to_json(books: &[Book]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books
        .serialize(&mut ser)
        .map_err(StorageError::Serialize)?;
    buf.push(b'\n');
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Book>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No library file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = books.len(), "Loaded library");
        Ok(books)
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content = to_json(books)?;

        // Write next to the target and rename, so a failed write keeps the old file.
        let tmp = self.tmp_path();
        if let Err(source) = fs::write(&tmp, &content) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Write { path: tmp, source }.into());
        }
        if let Err(source) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(StorageError::Write {
                path: self.path.clone(),
                source,
            }
            .into());
        }

        debug!(path = %self.path.display(), count = books.len(), "Saved library");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookshelfError;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::in_dir(dir.path(), DEFAULT_LIBRARY_FILE);
        (dir, store)
    }

    fn sample() -> Vec<Book> {
        vec![
            Book::new("Herbert", "Dune", 1965, "SciFi", true),
            Book::new("Tolkien", "Hobbit", 1937, "Fantasy", false),
            Book::new("Anonymous", "Beowulf", 1000, "", false),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let (_dir, mut store) = setup();
        let books = sample();

        store.save(&books).unwrap();
        assert_eq!(store.load().unwrap(), books);

        // Saving what was loaded changes nothing.
        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        assert_eq!(store.load().unwrap(), books);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let (_dir, mut store) = setup();
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Dune");
    }

    #[test]
    fn writes_plain_json_array() {
        let (_dir, mut store) = setup();
        store.save(&sample()[..1]).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert_eq!(first["author"], "Herbert");
        assert_eq!(first["title"], "Dune");
        assert_eq!(first["published"], 1965);
        assert_eq!(first["genre"], "SciFi");
        assert_eq!(first["read"], true);
        assert!(on_disk.contains("\n        \"author\""));
    }

    #[test]
    fn no_tmp_files_left_behind() {
        let (dir, mut store) = setup();
        store.save(&sample()).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/library.json"));
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test]
    fn malformed_file_is_a_storage_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(
            err,
            BookshelfError::Storage(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn wrong_shape_is_a_storage_error() {
        let (_dir, store) = setup();
        fs::write(store.path(), r#"[{"title": "No author"}]"#).unwrap();
        assert!(store.load().is_err());
    }

    #[test]
    fn unwritable_target_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        // The target path is an existing directory, so the rename cannot succeed.
        let target = dir.path().join("library.json");
        fs::create_dir_all(target.join("occupied")).unwrap();
        let mut store = FileStore::new(&target);

        let err = store.save(&sample()).unwrap_err();
        assert!(matches!(
            err,
            BookshelfError::Storage(StorageError::Write { .. })
        ));
    }
}
