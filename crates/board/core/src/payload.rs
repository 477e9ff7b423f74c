//! Board snapshots as delivered by the compiler on connect or recompile.
//!
//! The payload is the boundary where raw board data becomes validated model
//! types. Paths are checked while deserializing; the board structure and every
//! trait coordinate are checked in [`BoardPayload::into_parts`].

use crate::coord::{Coord, Dimensions};
use crate::error::BoardError;
use crate::path::Path;
use crate::structure::BoardStructure;
use crate::traits::{AssetRef, Label, TraitStore};

/// A value assigned to a single coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitAssignment<T> {
    pub coord: Coord,
    pub value: T,
}

impl<T> TraitAssignment<T> {
    pub const fn new(coord: Coord, value: T) -> Self {
        Self { coord, value }
    }
}

/// Unvalidated board description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSpec {
    pub dimensions: Dimensions,
    #[cfg_attr(feature = "serde", serde(default))]
    pub paths: Vec<Path>,
    /// Explicit route start. Older payloads omit it, in which case the first
    /// path's origin is used.
    #[cfg_attr(feature = "serde", serde(default))]
    pub start: Option<Coord>,
}

/// Complete board snapshot: structure plus every trait assignment list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct BoardPayload {
    pub board: BoardSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_traits: Vec<TraitAssignment<AssetRef>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label_traits: Vec<TraitAssignment<Label>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub audio_traits: Vec<TraitAssignment<AssetRef>>,
}

impl BoardPayload {
    pub fn new(board: BoardSpec) -> Self {
        Self {
            board,
            image_traits: Vec::new(),
            label_traits: Vec::new(),
            audio_traits: Vec::new(),
        }
    }

    /// Validates the board and builds the trait store, including the route's
    /// path lines and markers.
    pub fn into_parts(self) -> Result<(BoardStructure, TraitStore), BoardError> {
        let BoardSpec {
            dimensions,
            paths,
            start,
        } = self.board;

        let mut structure = BoardStructure::new(dimensions, paths)?;
        if let Some(start) = start {
            structure = structure.with_start(start)?;
        }

        let store = TraitStore::builder()
            .images(&self.image_traits)?
            .audio(&self.audio_traits)?
            .labels(&self.label_traits)?
            .paths(structure.paths())
            .markers(&structure.markers())
            .build();

        Ok((structure, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Marker;

    fn spec(paths: Vec<Path>) -> BoardSpec {
        BoardSpec {
            dimensions: Dimensions::new(4, 4),
            paths,
            start: None,
        }
    }

    #[test]
    fn into_parts_places_route_traits() {
        let first = Path::new(Coord::new(1, 1), Coord::new(4, 1)).unwrap();
        let second = Path::new(Coord::new(4, 1), Coord::new(4, 4)).unwrap();
        let mut payload = BoardPayload::new(spec(vec![first, second]));
        payload
            .image_traits
            .push(TraitAssignment::new(Coord::new(1, 1), AssetRef::from("start.png")));

        let (structure, store) = payload.into_parts().unwrap();

        assert_eq!(structure.start(), Some(Coord::new(1, 1)));
        let origin = store.at(Coord::new(1, 1));
        assert_eq!(origin.path_line, Some(first));
        assert_eq!(origin.marker, Some(Marker::Start));
        assert_eq!(origin.image, Some(AssetRef::from("start.png")));
        assert_eq!(store.at(Coord::new(4, 1)).marker, Some(Marker::EnRoute));
        assert_eq!(store.at(Coord::new(4, 4)).marker, Some(Marker::Finish));
    }

    #[test]
    fn out_of_bounds_path_is_rejected() {
        let path = Path::new(Coord::new(1, 1), Coord::new(6, 1)).unwrap();
        let err = BoardPayload::new(spec(vec![path])).into_parts().unwrap_err();
        assert!(matches!(err, BoardError::PathOutOfBounds { .. }));
    }
}
