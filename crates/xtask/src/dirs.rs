//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific location of the persisted display options
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/board/options.toml`
/// - Linux: `~/.config/board/options.toml` (or `$XDG_CONFIG_HOME/board/options.toml`)
/// - Windows: `%APPDATA%\board\config\options.toml`
/// - Fallback: `./options.toml`
pub fn options_file() -> PathBuf {
    directories::ProjectDirs::from("", "", "board")
        .map(|dirs| dirs.config_dir().join("options.toml"))
        .unwrap_or_else(|| PathBuf::from("options.toml"))
}
