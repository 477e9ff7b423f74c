use std::collections::BTreeMap;

use crate::coord::{Coord, Dimensions};
use crate::error::BoardError;
use crate::path::Path;
use crate::traits::Marker;

/// Validated board: interior dimensions, the ordered route and its start.
///
/// Every path endpoint lies inside `[1, width] x [1, height]`. The start is
/// stored explicitly when known; otherwise it falls back to the origin of the
/// first path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardStructure {
    dimensions: Dimensions,
    paths: Vec<Path>,
    start: Option<Coord>,
}

impl BoardStructure {
    pub fn new(dimensions: Dimensions, paths: Vec<Path>) -> Result<Self, BoardError> {
        let dimensions = dimensions.validate()?;

        if let Some(path) = paths.iter().find(|path| {
            !dimensions.contains_interior(path.from()) || !dimensions.contains_interior(path.to())
        }) {
            return Err(BoardError::PathOutOfBounds {
                from: path.from(),
                to: path.to(),
                dimensions,
            });
        }

        Ok(Self {
            dimensions,
            paths,
            start: None,
        })
    }

    /// An empty board with no route.
    pub fn empty(dimensions: Dimensions) -> Result<Self, BoardError> {
        Self::new(dimensions, Vec::new())
    }

    /// Pins the route start to `start`.
    pub fn with_start(mut self, start: Coord) -> Result<Self, BoardError> {
        if !self.dimensions.contains_interior(start) {
            return Err(BoardError::StartOffBoard {
                start,
                dimensions: self.dimensions,
            });
        }
        self.start = Some(start);
        Ok(self)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Where the route begins: the explicit start, else the first path's origin.
    pub fn start(&self) -> Option<Coord> {
        self.start
            .or_else(|| self.paths.first().map(|path| path.from()))
    }

    /// Where the route ends: the destination of the last path.
    pub fn finish(&self) -> Option<Coord> {
        self.paths.last().map(|path| path.to())
    }

    /// Derives route markers, ordered by coordinate.
    ///
    /// Every path origin is a junction (`EnRoute`), the last destination is the
    /// `Finish`, and the start overrides whatever else shares its tile.
    pub fn markers(&self) -> Vec<(Coord, Marker)> {
        let mut markers = BTreeMap::new();

        for path in &self.paths {
            markers.insert(path.from(), Marker::EnRoute);
        }
        if let Some(finish) = self.finish() {
            markers.insert(finish, Marker::Finish);
        }
        if let Some(start) = self.start() {
            markers.insert(start, Marker::Start);
        }

        markers.into_iter().collect()
    }

    /// True if any route segment passes over `coord`.
    pub fn on_route(&self, coord: Coord) -> bool {
        self.paths.iter().any(|path| path.covers(coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(from: (i32, i32), to: (i32, i32)) -> Path {
        Path::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1)).unwrap()
    }

    fn l_route() -> BoardStructure {
        BoardStructure::new(
            Dimensions::new(5, 5),
            vec![path((1, 1), (5, 1)), path((5, 1), (5, 5)), path((5, 5), (2, 5))],
        )
        .unwrap()
    }

    #[test]
    fn start_defaults_to_first_path_origin() {
        assert_eq!(l_route().start(), Some(Coord::new(1, 1)));
        assert_eq!(l_route().finish(), Some(Coord::new(2, 5)));
    }

    #[test]
    fn explicit_start_wins_over_path_order() {
        let structure = l_route().with_start(Coord::new(5, 1)).unwrap();
        let markers = structure.markers();

        assert!(markers.contains(&(Coord::new(5, 1), Marker::Start)));
        assert!(markers.contains(&(Coord::new(1, 1), Marker::EnRoute)));
    }

    #[test]
    fn markers_cover_start_junctions_and_finish() {
        assert_eq!(
            l_route().markers(),
            vec![
                (Coord::new(1, 1), Marker::Start),
                (Coord::new(2, 5), Marker::Finish),
                (Coord::new(5, 1), Marker::EnRoute),
                (Coord::new(5, 5), Marker::EnRoute),
            ]
        );
    }

    #[test]
    fn start_outside_the_board_is_rejected() {
        let err = l_route().with_start(Coord::new(0, 3)).unwrap_err();
        assert!(matches!(err, BoardError::StartOffBoard { .. }));
    }

    #[test]
    fn route_coverage_includes_segment_interiors() {
        let structure = l_route();
        assert!(structure.on_route(Coord::new(3, 1)));
        assert!(structure.on_route(Coord::new(5, 3)));
        assert!(!structure.on_route(Coord::new(3, 3)));
    }

    #[test]
    fn empty_board_has_no_markers() {
        let structure = BoardStructure::empty(Dimensions::new(2, 2)).unwrap();
        assert!(structure.markers().is_empty());
        assert_eq!(structure.start(), None);
    }
}
