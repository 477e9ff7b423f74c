//! Board data files and persisted display options.
//!
//! This crate reads board payloads and option files from disk:
//! - Board payloads (RON fixtures or JSON as pushed by the compiler)
//! - Display options (flat TOML table keyed by option name)
//!
//! All loaders use board-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BoardFormat, BoardLoader, FileOptionStore, LoadResult};
