//! View-model snapshots derived from board structure, traits and options.
//!
//! Composition is a pure function of its inputs: equal inputs always yield
//! equal view models, which lets renderers diff and skip unchanged tiles.
mod board;
mod tile;

pub use board::BoardView;
pub use tile::{PathLineView, TileViewModel, compose_tile, compose_tile_with};
