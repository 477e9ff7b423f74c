//! Frontend configuration structures and loaders.
//!
//! Display options normally come from the persisted option store; the
//! environment can override them for tooling and screenshots.

use std::env;

use board_core::{DisplayOptions, DisplayToggle, OptionStore};

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrontendConfig {
    pub options: DisplayOptions,
}

impl FrontendConfig {
    pub const fn new(options: DisplayOptions) -> Self {
        Self { options }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOARD_TILE_SIZE` - Tile edge in pixels, clamped to 25..=100 (default: 40)
    /// - `BOARD_SHOW_ARROWS` - Draw path arrows (default: true)
    /// - `BOARD_SHOW_IMAGES` - Draw tile images (default: true)
    /// - `BOARD_SHOW_PATH_LINES` - Draw path lines (default: true)
    /// - `BOARD_SHOW_UNUSED_TILES` - Draw tiles without traits (default: true)
    pub fn from_env() -> Self {
        Self::new(Self::env_overrides(DisplayOptions::default()))
    }

    /// Loads persisted options, then applies environment overrides on top.
    pub fn from_store<S: OptionStore + ?Sized>(store: &S) -> Self {
        Self::new(Self::env_overrides(DisplayOptions::load(store)))
    }

    fn env_overrides(mut options: DisplayOptions) -> DisplayOptions {
        if let Some(size) = read_env::<u32>("BOARD_TILE_SIZE") {
            options = options.with_tile_size(size);
        }

        for toggle in DisplayToggle::ALL {
            if let Some(value) = read_env_bool(env_key(toggle)) {
                options.set(toggle, value);
            }
        }

        options
    }
}

fn env_key(toggle: DisplayToggle) -> &'static str {
    match toggle {
        DisplayToggle::ShowArrows => "BOARD_SHOW_ARROWS",
        DisplayToggle::ShowImages => "BOARD_SHOW_IMAGES",
        DisplayToggle::ShowPathLines => "BOARD_SHOW_PATH_LINES",
        DisplayToggle::ShowUnusedTiles => "BOARD_SHOW_UNUSED_TILES",
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
