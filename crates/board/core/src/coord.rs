//! Grid coordinates, board dimensions and the Cantor-paired coordinate key.
use std::fmt;

use crate::error::BoardError;

/// A single cell on the board grid.
///
/// Interior tiles are 1-based; `x == 0` is the header column and `y == 0` the
/// header row. Components are signed so that malformed input can be detected
/// and rejected by [`CoordHash::try_from_coord`] instead of wrapping silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Hashes this coordinate. See [`CoordHash::of`].
    #[inline]
    pub fn hash_key(self) -> CoordHash {
        CoordHash::of(self)
    }

    pub const fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl Default for Coord {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Size of the interior playable grid, excluding the header row and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Largest side length whose cells are all addressable as [`Coord`]s.
    pub const MAX_SIDE: u32 = i32::MAX as u32;

    /// Rejects boards with an empty interior or a side too long for [`Coord`].
    pub fn validate(self) -> Result<Self, BoardError> {
        let in_range = |side: u32| (1..=Self::MAX_SIDE).contains(&side);
        if !in_range(self.width) || !in_range(self.height) {
            return Err(BoardError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// True if `coord` lies within `[1, width] x [1, height]`.
    pub fn contains_interior(&self, coord: Coord) -> bool {
        coord.x >= 1
            && coord.y >= 1
            && i64::from(coord.x) <= i64::from(self.width)
            && i64::from(coord.y) <= i64::from(self.height)
    }

    /// Number of cells including the header row, header column and corner.
    pub const fn cell_count(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }

    /// Number of grid columns a renderer lays out (interior plus header column).
    pub const fn columns(&self) -> u32 {
        self.width + 1
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Flat lookup key for a coordinate, produced by Cantor pairing.
///
/// `hash(x, y) = (x + y)(x + y + 1) / 2 + y`, a bijection between pairs of
/// non-negative integers and non-negative integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CoordHash(pub u64);

impl CoordHash {
    /// Hashes a coordinate, panicking on negative components.
    ///
    /// Board data is validated before it reaches the hasher, so a negative
    /// component here is a bug. Use [`CoordHash::try_from_coord`] when the
    /// coordinate comes straight from a payload.
    pub fn of(coord: Coord) -> Self {
        match Self::try_from_coord(coord) {
            Ok(hash) => hash,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_from_coord(coord: Coord) -> Result<Self, BoardError> {
        if !coord.is_non_negative() {
            return Err(BoardError::InvalidCoordinate { coord });
        }

        let x = coord.x as u64;
        let y = coord.y as u64;
        let sum = x + y;
        // Halve whichever factor is even so the product stays within u64.
        let triangle = if sum % 2 == 0 {
            (sum / 2) * (sum + 1)
        } else {
            sum * ((sum + 1) / 2)
        };

        Ok(Self(triangle + y))
    }

    /// Inverts the pairing.
    pub fn unpair(self) -> Result<Coord, BoardError> {
        let z = u128::from(self.0);
        let w = ((8 * z + 1).isqrt() - 1) / 2;
        let triangle = w * (w + 1) / 2;
        let y = z - triangle;
        let x = w - y;

        match (i32::try_from(x), i32::try_from(y)) {
            (Ok(x), Ok(y)) => Ok(Coord::new(x, y)),
            _ => Err(BoardError::InvalidCoordinateHash(self.0)),
        }
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl TryFrom<Coord> for CoordHash {
    type Error = BoardError;

    fn try_from(coord: Coord) -> Result<Self, Self::Error> {
        Self::try_from_coord(coord)
    }
}

impl fmt::Display for CoordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_diagonals_match_cantor_ordering() {
        assert_eq!(CoordHash::of(Coord::new(0, 0)), CoordHash(0));
        assert_eq!(CoordHash::of(Coord::new(1, 0)), CoordHash(1));
        assert_eq!(CoordHash::of(Coord::new(0, 1)), CoordHash(2));
        assert_eq!(CoordHash::of(Coord::new(2, 0)), CoordHash(3));
        assert_eq!(CoordHash::of(Coord::new(1, 1)), CoordHash(4));
        assert_eq!(CoordHash::of(Coord::new(0, 2)), CoordHash(5));
    }

    #[test]
    fn negative_components_are_rejected() {
        let coord = Coord::new(3, -1);
        assert_eq!(
            CoordHash::try_from_coord(coord),
            Err(BoardError::InvalidCoordinate { coord })
        );
    }

    #[test]
    #[should_panic(expected = "negative component")]
    fn hashing_a_negative_coordinate_panics() {
        let _ = CoordHash::of(Coord::new(-1, 0));
    }

    #[test]
    fn dimensions_must_fit_coordinates() {
        assert!(Dimensions::new(Dimensions::MAX_SIDE, 1).validate().is_ok());
        assert!(matches!(
            Dimensions::new(Dimensions::MAX_SIDE + 1, 3).validate(),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(Dimensions::new(2, u32::MAX).validate().is_err());
        assert!(Dimensions::new(0, 5).validate().is_err());
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let coord = Coord::new(i32::MAX, i32::MAX);
        let hash = CoordHash::of(coord);
        assert_eq!(hash.unpair(), Ok(coord));
    }

    #[test]
    fn unpair_rejects_hashes_beyond_coordinate_range() {
        assert_eq!(
            CoordHash(u64::MAX).unpair(),
            Err(BoardError::InvalidCoordinateHash(u64::MAX))
        );
    }

    #[test]
    fn interior_bounds_exclude_header_cells() {
        let dims = Dimensions::new(3, 2);
        assert!(dims.contains_interior(Coord::new(1, 1)));
        assert!(dims.contains_interior(Coord::new(3, 2)));
        assert!(!dims.contains_interior(Coord::new(0, 1)));
        assert!(!dims.contains_interior(Coord::new(4, 1)));
        assert!(!dims.contains_interior(Coord::new(1, 3)));
        assert_eq!(dims.cell_count(), 12);
    }

    #[test]
    fn zero_sized_boards_are_invalid() {
        assert!(Dimensions::new(0, 4).validate().is_err());
        assert!(Dimensions::new(4, 4).validate().is_ok());
    }
}
