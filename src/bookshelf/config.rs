use crate::error::{Result, StorageError};
use crate::store::fs::DEFAULT_LIBRARY_FILE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TOP_AUTHORS: usize = 5;
const DEFAULT_CHART_WIDTH: usize = 40;

/// Largest accepted `top-authors`.
pub const MAX_TOP_AUTHORS: usize = 100;
/// Largest accepted `chart-width`, in cells.
pub const MAX_CHART_WIDTH: usize = 200;

/// Configuration for bookshelf, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Name of the library file inside the data directory
    #[serde(default = "default_library_file")]
    pub library_file: String,

    /// How many authors the stats view lists
    #[serde(default = "default_top_authors")]
    pub top_authors: usize,

    /// Width, in cells, of the longest bar in stats charts
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_library_file() -> String {
    DEFAULT_LIBRARY_FILE.to_string()
}

fn default_top_authors() -> usize {
    DEFAULT_TOP_AUTHORS
}

fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            library_file: default_library_file(),
            top_authors: DEFAULT_TOP_AUTHORS,
            chart_width: DEFAULT_CHART_WIDTH,
        }
    }
}

impl BookshelfConfig {
    pub const KEYS: &'static [&'static str] = &["library-file", "top-authors", "chart-width"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::Read {
            path: config_path.clone(),
            source,
        })?;
        let config: BookshelfConfig =
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: config_path.clone(),
                source,
            })?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|source| StorageError::Write {
                path: config_dir.to_path_buf(),
                source,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StorageError::Serialize)?;
        fs::write(&config_path, content).map_err(|source| StorageError::Write {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "library-file" => Some(self.library_file.clone()),
            "top-authors" => Some(self.top_authors.to_string()),
            "chart-width" => Some(self.chart_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "library-file" => {
                let name = value.trim();
                check_library_file(name)?;
                self.library_file = name.to_string();
            }
            "top-authors" => self.top_authors = parse_bounded(key, value, MAX_TOP_AUTHORS)?,
            "chart-width" => self.chart_width = parse_bounded(key, value, MAX_CHART_WIDTH)?,
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Every key with its current value, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

/// Checks that `name` is a plain file name inside the data directory that collides
/// with neither the config file nor the library's temporary save file.
pub fn check_library_file(name: &str) -> std::result::Result<(), String> {
    let path = Path::new(name);
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name == CONFIG_FILENAME
        || path.with_extension("tmp") == path;
    if invalid {
        return Err(format!("Invalid library file name: {:?}", name));
    }
    Ok(())
}

fn parse_bounded(key: &str, value: &str, max: usize) -> std::result::Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(format!(
            "{} must be a number from 1 to {}, got {:?}",
            key, max, value
        )),
    }
}
