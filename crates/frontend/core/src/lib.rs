//! Presentation-side board state and view models.
//!
//! Holds the board state slice fed by compiler payloads and editor events, the
//! asset catalog that resolves image names to URLs, and the composer that turns
//! board data into one immutable view record per rendered cell.
pub mod catalog;
pub mod config;
pub mod services;
pub mod state;
pub mod view_model;

pub use catalog::{AssetCatalog, CatalogError, DirectUrls, ImageAsset, ImageCatalog};
pub use config::FrontendConfig;
pub use services::{UpdateScope, ViewUpdater};
pub use state::{BoardEvent, BoardState, StateError};
pub use view_model::{BoardView, PathLineView, TileViewModel, compose_tile, compose_tile_with};
