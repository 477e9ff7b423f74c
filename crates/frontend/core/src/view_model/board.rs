//! Whole-board view for grid rendering.

use board_core::{Coord, Dimensions, DisplayOptions, TraitStore, enumerate_cells};

use super::tile::{TileViewModel, compose_tile_with};
use crate::catalog::AssetCatalog;

/// Every render cell of a board, in row-major order including headers.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardView {
    pub dimensions: Dimensions,
    pub tile_size: u32,
    pub cells: Vec<TileViewModel>,
}

impl BoardView {
    pub fn compose<C: AssetCatalog + ?Sized>(
        dimensions: Dimensions,
        store: &TraitStore,
        options: &DisplayOptions,
        catalog: &C,
    ) -> Self {
        let cells = enumerate_cells(dimensions)
            .map(|coord| compose_tile_with(coord, dimensions, store, options, catalog))
            .collect();

        Self {
            dimensions,
            tile_size: options.tile_size,
            cells,
        }
    }

    /// Grid columns, including the header column.
    pub fn columns(&self) -> usize {
        self.dimensions.columns() as usize
    }

    /// Cells grouped into rows, header row first.
    pub fn rows(&self) -> impl Iterator<Item = &[TileViewModel]> {
        self.cells.chunks(self.columns())
    }

    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        let x = usize::try_from(coord.x).ok()?;
        let y = usize::try_from(coord.y).ok()?;
        if x >= self.columns() || y > self.dimensions.height as usize {
            return None;
        }
        Some(y * self.columns() + x)
    }

    pub fn cell(&self, coord: Coord) -> Option<&TileViewModel> {
        self.cells.get(self.index_of(coord)?)
    }

    /// Total grid width in pixels, including the header column.
    pub fn pixel_width(&self) -> u32 {
        self.dimensions.columns() * self.tile_size
    }
}
