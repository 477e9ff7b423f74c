//! Board coordinate, trait and path-rendering model.
//!
//! `board-core` turns a rectangular board description (dimensions plus the
//! ordered route paths) and per-coordinate trait assignments into the data a
//! renderer needs: hashed trait lookups, path directions and distances, and the
//! classified layout grid with its pixel geometry. Every API here is pure and
//! synchronous; view-model composition lives in `board-frontend-core`.
pub mod config;
pub mod coord;
pub mod error;
pub mod layout;
pub mod path;
pub mod payload;
pub mod structure;
pub mod traits;

pub use config::{DisplayOptions, DisplayToggle, MemoryOptionStore, OptionStore};
pub use coord::{Coord, CoordHash, Dimensions};
pub use error::{BoardError, ErrorSeverity};
pub use layout::{
    ArrowOffset, CellKind, Cells, Corner, EdgeFlags, LineGeometry, arrow_offset, classify,
    enumerate_cells, line_geometry,
};
pub use path::{Axis, Direction, Path, line_extent_pixels, resolve_direction};
pub use payload::{BoardPayload, BoardSpec, TraitAssignment};
pub use structure::BoardStructure;
pub use traits::{AssetRef, Label, Marker, TraitPatch, TraitRecord, TraitStore, TraitStoreBuilder};
