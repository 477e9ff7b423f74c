//! Selective refresh of a composed [`BoardView`] after state changes.
//!
//! # Architecture
//!
//! - `UpdateScope`: bitflags reported by [`BoardState::apply`] naming what changed
//! - `ViewUpdater`: stateless service that refreshes only the affected cells

use bitflags::bitflags;
use board_core::TraitStore;

use crate::state::BoardState;
use crate::view_model::{BoardView, compose_tile_with};

// ============================================================================
// UpdateScope - Fine-grained change tracking
// ============================================================================

bitflags! {
    /// Tracks which parts of the board state changed.
    ///
    /// Flags combine freely; `ALL` forces a full recompose.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateScope: u8 {
        /// Dimensions or route changed.
        const STRUCTURE = 0b0001;

        /// Trait snapshot replaced or patched.
        const TRAITS    = 0b0010;

        /// Image catalog changed.
        const ASSETS    = 0b0100;

        /// Display options changed.
        const OPTIONS   = 0b1000;

        const ALL = Self::STRUCTURE.bits()
                  | Self::TRAITS.bits()
                  | Self::ASSETS.bits()
                  | Self::OPTIONS.bits();
    }
}

impl UpdateScope {
    /// Returns true if every cell must be recomposed.
    pub fn needs_full_rebuild(&self) -> bool {
        self.intersects(Self::STRUCTURE | Self::ASSETS | Self::OPTIONS)
    }
}

impl Default for UpdateScope {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// ViewUpdater - Scope-driven view refresh
// ============================================================================

/// Refreshes a [`BoardView`] from the current [`BoardState`].
///
/// Trait-only changes recompose just the cells whose record is no longer
/// shared with `previous`; everything else rebuilds the view.
pub struct ViewUpdater;

impl ViewUpdater {
    /// Brings `view` in line with `state` and returns the number of cells
    /// that were recomposed.
    ///
    /// `previous` must be the trait snapshot `view` was composed from.
    pub fn refresh(
        view: &mut BoardView,
        previous: &TraitStore,
        state: &BoardState,
        scope: UpdateScope,
    ) -> usize {
        if scope.is_empty() {
            return 0;
        }

        if scope.needs_full_rebuild() || view.dimensions != state.structure().dimensions() {
            *view = state.view();
            tracing::trace!(cells = view.cells.len(), "board view rebuilt");
            return view.cells.len();
        }

        let dimensions = view.dimensions;
        let current = state.traits();
        let mut refreshed = 0;

        for cell in view.cells.iter_mut().filter(|cell| cell.kind.is_interior()) {
            let hash = cell.coord.hash_key();
            if current.shares_record_with(previous, hash) {
                continue;
            }
            *cell =
                compose_tile_with(cell.coord, dimensions, current, state.options(), state.images());
            refreshed += 1;
        }

        tracing::trace!(refreshed, "board view patched");
        refreshed
    }
}
