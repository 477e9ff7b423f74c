//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod hash;
mod options;
mod preview;

pub use hash::{Hash, Unhash};
pub use options::Options;
pub use preview::Preview;

use std::path::PathBuf;

use anyhow::Result;
use board_content::FileOptionStore;

use crate::dirs;

/// Open the options file, defaulting to the platform location.
pub(crate) fn open_options(path: Option<PathBuf>) -> Result<FileOptionStore> {
    FileOptionStore::load(path.unwrap_or_else(dirs::options_file))
}
