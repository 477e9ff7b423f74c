//! Route paths and their geometry.
//!
//! A [`Path`] is one straight, axis-aligned segment of the board's travel
//! route. Paths can only be built through [`Path::new`] (or deserialized
//! through the same check), so every `Path` in circulation has exactly one
//! direction and a distance of at least one tile.

use crate::coord::Coord;
use crate::error::BoardError;

/// Travel direction of a path segment, in screen terms (y grows downwards).
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
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// Clockwise rotation applied to an upward-pointing arrow glyph.
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Direction::Up => 0,
            Direction::Down => 180,
            Direction::Left => 270,
            Direction::Right => 90,
        }
    }

    /// Unit step in grid coordinates.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Infers the direction of travel from `from` to `to`.
///
/// Fails when the endpoints coincide or differ on both axes; such a path is
/// malformed board data and is never coerced into an arbitrary direction.
pub fn resolve_direction(from: Coord, to: Coord) -> Result<Direction, BoardError> {
    let horizontal = from.y == to.y;
    let vertical = from.x == to.x;

    if horizontal == vertical {
        // Both equal: degenerate. Neither equal: diagonal.
        return Err(BoardError::DegenerateOrDiagonalPath { from, to });
    }

    let direction = if to.x > from.x {
        Direction::Right
    } else if from.x > to.x {
        Direction::Left
    } else if to.y > from.y {
        Direction::Down
    } else {
        Direction::Up
    };

    Ok(direction)
}

/// Raw pixel span of a connector line covering `distance` tiles.
pub const fn line_extent_pixels(distance: u32, tile_size: u32) -> u32 {
    distance * tile_size
}

/// One straight segment of the route, pointing towards increasing progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath", into = "RawPath"))]
pub struct Path {
    from: Coord,
    to: Coord,
    direction: Direction,
}

impl Path {
    /// Builds a validated path. Both endpoints must be non-negative grid
    /// coordinates so that the origin can always be hashed.
    pub fn new(from: Coord, to: Coord) -> Result<Self, BoardError> {
        for coord in [from, to] {
            if !coord.is_non_negative() {
                return Err(BoardError::InvalidCoordinate { coord });
            }
        }
        let direction = resolve_direction(from, to)?;
        Ok(Self {
            from,
            to,
            direction,
        })
    }

    pub const fn from(&self) -> Coord {
        self.from
    }

    pub const fn to(&self) -> Coord {
        self.to
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of tiles spanned along the path's direction; always at least 1.
    pub fn distance(&self) -> u32 {
        match self.direction.axis() {
            Axis::Horizontal => self.from.x.abs_diff(self.to.x),
            Axis::Vertical => self.from.y.abs_diff(self.to.y),
        }
    }

    /// Pixel span of the connector line at the given tile size.
    pub fn line_extent(&self, tile_size: u32) -> u32 {
        line_extent_pixels(self.distance(), tile_size)
    }

    /// Every coordinate the segment covers, from `from` to `to` inclusive.
    pub fn tiles(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dx, dy) = self.direction.delta();
        let from = self.from;
        (0..=self.distance() as i32)
            .map(move |step| Coord::new(from.x + dx * step, from.y + dy * step))
    }

    pub fn covers(&self, coord: Coord) -> bool {
        match self.direction.axis() {
            Axis::Horizontal => {
                coord.y == self.from.y
                    && coord.x >= self.from.x.min(self.to.x)
                    && coord.x <= self.from.x.max(self.to.x)
            }
            Axis::Vertical => {
                coord.x == self.from.x
                    && coord.y >= self.from.y.min(self.to.y)
                    && coord.y <= self.from.y.max(self.to.y)
            }
        }
    }
}

/// Unvalidated wire form of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawPath {
    pub from: Coord,
    pub to: Coord,
}

impl TryFrom<RawPath> for Path {
    type Error = BoardError;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        Path::new(raw.from, raw.to)
    }
}

impl From<Path> for RawPath {
    fn from(path: Path) -> Self {
        Self {
            from: path.from,
            to: path.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(from: (i32, i32), to: (i32, i32)) -> Result<Path, BoardError> {
        Path::new(Coord::new(from.0, from.1), Coord::new(to.0, to.1))
    }

    #[test]
    fn rightward_path_spans_five_tiles() {
        let path = path((0, 0), (5, 0)).unwrap();
        assert_eq!(path.direction(), Direction::Right);
        assert_eq!(path.distance(), 5);
    }

    #[test]
    fn upward_path_spans_three_tiles() {
        let path = path((3, 3), (3, 0)).unwrap();
        assert_eq!(path.direction(), Direction::Up);
        assert_eq!(path.distance(), 3);
    }

    #[test]
    fn left_and_down_are_inferred() {
        assert_eq!(path((4, 2), (1, 2)).unwrap().direction(), Direction::Left);
        assert_eq!(path((1, 1), (1, 6)).unwrap().direction(), Direction::Down);
    }

    #[test]
    fn degenerate_path_is_rejected() {
        let err = path((2, 2), (2, 2)).unwrap_err();
        assert_eq!(
            err,
            BoardError::DegenerateOrDiagonalPath {
                from: Coord::new(2, 2),
                to: Coord::new(2, 2),
            }
        );
    }

    #[test]
    fn diagonal_path_is_rejected() {
        assert!(matches!(
            path((1, 1), (3, 3)),
            Err(BoardError::DegenerateOrDiagonalPath { .. })
        ));
    }

    #[test]
    fn line_extent_scales_with_tile_size() {
        assert_eq!(line_extent_pixels(3, 40), 120);
        assert_eq!(path((1, 1), (1, 3)).unwrap().line_extent(25), 50);
    }

    #[test]
    fn tiles_walk_from_origin_to_destination() {
        let tiles: Vec<_> = path((3, 2), (1, 2)).unwrap().tiles().collect();
        assert_eq!(
            tiles,
            vec![Coord::new(3, 2), Coord::new(2, 2), Coord::new(1, 2)]
        );
    }

    #[test]
    fn covers_only_the_segment() {
        let path = path((2, 1), (2, 4)).unwrap();
        assert!(path.covers(Coord::new(2, 3)));
        assert!(!path.covers(Coord::new(2, 5)));
        assert!(!path.covers(Coord::new(1, 2)));
    }

    #[test]
    fn arrow_rotations_follow_direction() {
        let rotations: Vec<_> = Direction::ALL
            .iter()
            .map(|d| d.rotation_degrees())
            .collect();
        assert_eq!(rotations, vec![0, 180, 270, 90]);
    }
}
