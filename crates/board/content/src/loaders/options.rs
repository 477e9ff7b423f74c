//! TOML-backed option store.
//!
//! Options live in a flat table keyed by option name:
//!
//! ```toml
//! boardTileSize = 40
//! showArrows = true
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use board_core::OptionStore;

use crate::loaders::{LoadResult, read_file, write_file};

/// Display options persisted as a TOML file.
///
/// Reads and writes go to an in-memory table; call [`FileOptionStore::save`]
/// to flush it to disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOptionStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileOptionStore {
    /// Load the store at `path`. A missing file yields an empty store.
    pub fn load(path: impl Into<PathBuf>) -> LoadResult<Self> {
        let path = path.into();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no options file, using defaults");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
            });
        }

        let content = read_file(&path)?;
        let table: toml::Table = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse options TOML: {}", e))?;

        let entries = table
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    toml::Value::String(text) => text,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the table back to disk, typing booleans and integers.
    pub fn save(&self) -> LoadResult<()> {
        let table: toml::Table = self
            .entries
            .iter()
            .map(|(key, raw)| (key.clone(), typed_value(raw)))
            .collect();
        let content = toml::to_string(&table)
            .map_err(|e| anyhow::anyhow!("Failed to serialize options TOML: {}", e))?;

        write_file(&self.path, &content)?;
        tracing::debug!(path = %self.path.display(), entries = self.entries.len(), "options saved");
        Ok(())
    }
}

impl OptionStore for FileOptionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

fn typed_value(raw: &str) -> toml::Value {
    if let Ok(flag) = raw.parse::<bool>() {
        toml::Value::Boolean(flag)
    } else if let Ok(number) = raw.parse::<i64>() {
        toml::Value::Integer(number)
    } else {
        toml::Value::String(raw.to_owned())
    }
}
