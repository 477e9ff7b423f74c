//! Board payload loader.
//!
//! Reads a complete board snapshot (structure plus trait lists) from RON
//! fixtures or from the JSON payloads the compiler pushes to the editor.
//! Invalid paths are rejected during deserialization.

use std::path::Path;

use board_core::{BoardPayload, BoardStructure, TraitStore};

use crate::loaders::{LoadResult, read_file};

/// Serialized form of a board payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardFormat {
    Ron,
    Json,
}

impl BoardFormat {
    /// Picks the format from a file extension. Anything but `.json` is RON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Ron,
        }
    }
}

/// Loader for board payloads.
pub struct BoardLoader;

impl BoardLoader {
    /// Load a board payload from a RON or JSON file.
    pub fn load(path: &Path) -> LoadResult<BoardPayload> {
        let content = read_file(path)?;
        let payload = Self::parse(&content, BoardFormat::from_path(path))
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;

        tracing::debug!(
            path = %path.display(),
            dimensions = %payload.board.dimensions,
            paths = payload.board.paths.len(),
            "board payload loaded"
        );
        Ok(payload)
    }

    /// Load a payload and validate it into a board structure and trait store.
    pub fn load_validated(path: &Path) -> LoadResult<(BoardStructure, TraitStore)> {
        let payload = Self::load(path)?;
        payload
            .into_parts()
            .map_err(|e| anyhow::anyhow!("Invalid board in {}: {}", path.display(), e))
    }

    pub fn parse(content: &str, format: BoardFormat) -> LoadResult<BoardPayload> {
        match format {
            BoardFormat::Ron => Self::from_ron_str(content),
            BoardFormat::Json => Self::from_json_str(content),
        }
    }

    pub fn from_ron_str(content: &str) -> LoadResult<BoardPayload> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse board RON: {}", e))
    }

    pub fn from_json_str(content: &str) -> LoadResult<BoardPayload> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse board JSON: {}", e))
    }

    pub fn to_json_string(payload: &BoardPayload) -> LoadResult<String> {
        serde_json::to_string_pretty(payload)
            .map_err(|e| anyhow::anyhow!("Failed to serialize board JSON: {}", e))
    }
}
