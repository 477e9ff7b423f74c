//! Board display options and their key-value persistence.
use std::collections::BTreeMap;

/// User preferences controlling how the board is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct DisplayOptions {
    /// Edge length of one tile in pixels.
    pub tile_size: u32,
    /// Draw a direction arrow on each path line. Only meaningful while
    /// `show_path_lines` is set.
    pub show_arrows: bool,
    pub show_images: bool,
    pub show_path_lines: bool,
    /// Draw tiles that carry no traits at all.
    pub show_unused_tiles: bool,
}

impl DisplayOptions {
    pub const DEFAULT_TILE_SIZE: u32 = 40;
    pub const MIN_TILE_SIZE: u32 = 25;
    pub const MAX_TILE_SIZE: u32 = 100;

    /// Persistence key for the tile size.
    pub const TILE_SIZE_KEY: &'static str = "boardTileSize";

    pub const fn new() -> Self {
        Self {
            tile_size: Self::DEFAULT_TILE_SIZE,
            show_arrows: true,
            show_images: true,
            show_path_lines: true,
            show_unused_tiles: true,
        }
    }

    /// Returns a copy with the tile size clamped into the supported range.
    #[must_use]
    pub fn with_tile_size(mut self, tile_size: u32) -> Self {
        self.tile_size = tile_size.clamp(Self::MIN_TILE_SIZE, Self::MAX_TILE_SIZE);
        self
    }

    /// Arrows are drawn only on visible path lines.
    pub const fn arrows_enabled(&self) -> bool {
        self.show_path_lines && self.show_arrows
    }

    pub const fn get(&self, toggle: DisplayToggle) -> bool {
        match toggle {
            DisplayToggle::ShowArrows => self.show_arrows,
            DisplayToggle::ShowImages => self.show_images,
            DisplayToggle::ShowPathLines => self.show_path_lines,
            DisplayToggle::ShowUnusedTiles => self.show_unused_tiles,
        }
    }

    pub fn set(&mut self, toggle: DisplayToggle, value: bool) {
        match toggle {
            DisplayToggle::ShowArrows => self.show_arrows = value,
            DisplayToggle::ShowImages => self.show_images = value,
            DisplayToggle::ShowPathLines => self.show_path_lines = value,
            DisplayToggle::ShowUnusedTiles => self.show_unused_tiles = value,
        }
    }

    #[must_use]
    pub fn toggled(mut self, toggle: DisplayToggle) -> Self {
        self.set(toggle, !self.get(toggle));
        self
    }

    /// Reads options from `store`, falling back to defaults for missing or
    /// unparseable entries.
    pub fn load<S: OptionStore + ?Sized>(store: &S) -> Self {
        let mut options = Self::new();

        if let Some(size) = store
            .get(Self::TILE_SIZE_KEY)
            .and_then(|raw| raw.trim().parse::<u32>().ok())
        {
            options = options.with_tile_size(size);
        }

        for toggle in DisplayToggle::ALL {
            if let Some(value) = store.get(toggle.as_ref()).and_then(|raw| parse_bool(&raw)) {
                options.set(toggle, value);
            }
        }

        options
    }

    /// Writes every option to `store`, keyed by option name.
    pub fn persist<S: OptionStore + ?Sized>(&self, store: &mut S) {
        store.set(Self::TILE_SIZE_KEY, self.tile_size.to_string());
        for toggle in DisplayToggle::ALL {
            store.set(toggle.as_ref(), self.get(toggle).to_string());
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A boolean display option. The string form is its persistence key.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "camelCase")]
pub enum DisplayToggle {
    ShowArrows,
    ShowImages,
    ShowPathLines,
    ShowUnusedTiles,
}

impl DisplayToggle {
    pub const ALL: [DisplayToggle; 4] = [
        DisplayToggle::ShowArrows,
        DisplayToggle::ShowImages,
        DisplayToggle::ShowPathLines,
        DisplayToggle::ShowUnusedTiles,
    ];
}

/// Minimal string key-value persistence for display options.
pub trait OptionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

/// In-memory [`OptionStore`], used by tests and as a session-only fallback.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryOptionStore {
    entries: BTreeMap<String, String>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }
}

impl OptionStore for MemoryOptionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
