//! Per-tile display traits and the store that maps coordinates to them.
//!
//! A trait is an optional attribute attached to a single board coordinate:
//! a background image, an audio cue, hover labels, a route marker, or the
//! outgoing path line. Any combination may be present on one tile, and an
//! absent field simply means the trait is unset.
mod store;
mod trie;

pub use store::{TraitStore, TraitStoreBuilder};

use std::fmt;

use crate::path::Path;

/// Reference to an uploaded asset, by name.
///
/// The name is resolved to a URL by an asset catalog at composition time, so
/// renaming an asset only has to touch the records that reference it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AssetRef(pub String);

impl AssetRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetRef {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for AssetRef {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form text shown when hovering a tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    pub title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub body: String,
}

impl Label {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A label with a title and no body text.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, String::new())
    }
}

/// Role of a tile along the route.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Marker {
    /// Where players begin.
    Start,
    /// A junction where the route turns.
    EnRoute,
    /// Where the route ends.
    Finish,
}

/// All traits assigned to one coordinate.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitRecord {
    pub image: Option<AssetRef>,
    pub audio: Option<AssetRef>,
    pub labels: Vec<Label>,
    pub marker: Option<Marker>,
    pub path_line: Option<Path>,
}

impl TraitRecord {
    /// The record every unassigned coordinate resolves to.
    pub const EMPTY: Self = Self {
        image: None,
        audio: None,
        labels: Vec::new(),
        marker: None,
        path_line: None,
    };

    /// True if no trait is set.
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
            && self.audio.is_none()
            && self.labels.is_empty()
            && self.marker.is_none()
            && self.path_line.is_none()
    }

    pub fn apply(&mut self, patch: TraitPatch) {
        match patch {
            TraitPatch::Image(image) => self.image = image,
            TraitPatch::Audio(audio) => self.audio = audio,
            TraitPatch::Labels(labels) => self.labels = labels,
            TraitPatch::Marker(marker) => self.marker = marker,
            TraitPatch::PathLine(path) => self.path_line = path,
        }
    }
}

/// Replacement value for exactly one field of a [`TraitRecord`].
///
/// `None` clears the field.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraitPatch {
    Image(Option<AssetRef>),
    Audio(Option<AssetRef>),
    Labels(Vec<Label>),
    Marker(Option<Marker>),
    PathLine(Option<Path>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    #[test]
    fn empty_record_has_no_traits() {
        assert!(TraitRecord::EMPTY.is_empty());
        assert_eq!(TraitRecord::default(), TraitRecord::EMPTY);
    }

    #[test]
    fn patch_touches_only_its_field() {
        let mut record = TraitRecord {
            image: Some(AssetRef::from("a.png")),
            labels: vec![Label::titled("L")],
            ..TraitRecord::default()
        };
        let path = Path::new(Coord::new(1, 1), Coord::new(1, 3)).unwrap();

        record.apply(TraitPatch::PathLine(Some(path)));

        assert_eq!(record.image, Some(AssetRef::from("a.png")));
        assert_eq!(record.labels, vec![Label::titled("L")]);
        assert_eq!(record.path_line, Some(path));
    }

    #[test]
    fn markers_parse_from_snake_case() {
        assert_eq!("en_route".parse::<Marker>().unwrap(), Marker::EnRoute);
        assert_eq!(Marker::Finish.to_string(), "finish");
    }
}
