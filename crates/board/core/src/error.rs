//! Error types for board construction and coordinate hashing.
//!
//! Missing trait data is never an error; a coordinate with no assignments
//! simply resolves to an empty [`TraitRecord`](crate::TraitRecord). Errors
//! here describe malformed board data or misuse of the hasher.

use crate::coord::{Coord, Dimensions};

/// Severity level of an error, used to decide how loudly callers should fail.
///
/// - **Validation**: malformed upstream data, rejected at the boundary that
///   builds boards from payloads
/// - **Internal**: a programming error inside the editor itself
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates a bug rather than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Errors raised while hashing coordinates or constructing board data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    /// A coordinate with a negative component was passed to the hasher.
    #[error("coordinate {coord} has a negative component and cannot be hashed")]
    InvalidCoordinate { coord: Coord },

    /// The inverse pairing produced a component outside the coordinate range.
    #[error("hash {0} does not map back to a representable coordinate")]
    InvalidCoordinateHash(u64),

    /// A path whose endpoints are equal or differ on both axes.
    #[error("path {from} -> {to} is degenerate or diagonal")]
    DegenerateOrDiagonalPath { from: Coord, to: Coord },

    /// A board with a zero-sized playable grid or a side past `i32::MAX`.
    #[error("board dimensions {width}x{height} must both lie in 1..=2147483647")]
    InvalidDimensions { width: u32, height: u32 },

    /// A path endpoint lies outside the interior grid.
    #[error("path {from} -> {to} leaves the {dimensions} board")]
    PathOutOfBounds {
        from: Coord,
        to: Coord,
        dimensions: Dimensions,
    },

    /// The explicit route start lies outside the interior grid.
    #[error("start {start} lies outside the {dimensions} board")]
    StartOffBoard { start: Coord, dimensions: Dimensions },
}

impl BoardError {
    pub fn severity(&self) -> ErrorSeverity {
        use BoardError::*;
        match self {
            // The hasher is only ever fed validated coordinates.
            InvalidCoordinate { .. } | InvalidCoordinateHash(_) => ErrorSeverity::Internal,

            DegenerateOrDiagonalPath { .. }
            | InvalidDimensions { .. }
            | PathOutOfBounds { .. }
            | StartOffBoard { .. } => ErrorSeverity::Validation,
        }
    }

    /// Static identifier for this variant, handy in logs and assertions.
    pub const fn error_code(&self) -> &'static str {
        use BoardError::*;
        match self {
            InvalidCoordinate { .. } => "BOARD_INVALID_COORDINATE",
            InvalidCoordinateHash(_) => "BOARD_INVALID_COORDINATE_HASH",
            DegenerateOrDiagonalPath { .. } => "BOARD_DEGENERATE_OR_DIAGONAL_PATH",
            InvalidDimensions { .. } => "BOARD_INVALID_DIMENSIONS",
            PathOutOfBounds { .. } => "BOARD_PATH_OUT_OF_BOUNDS",
            StartOffBoard { .. } => "BOARD_START_OFF_BOARD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hasher_misuse_is_internal() {
        let err = BoardError::InvalidCoordinate {
            coord: Coord::new(-1, 0),
        };
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "BOARD_INVALID_COORDINATE");
    }

    #[test]
    fn malformed_paths_are_validation_errors() {
        let err = BoardError::DegenerateOrDiagonalPath {
            from: Coord::new(2, 2),
            to: Coord::new(2, 2),
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.to_string(), "path (2,2) -> (2,2) is degenerate or diagonal");
    }
}
