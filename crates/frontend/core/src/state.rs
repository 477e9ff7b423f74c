//! Board state slice and the events that update it.
//!
//! The state is owned by the application and replaced or patched only through
//! [`BoardState::apply`]. Trait stores are immutable snapshots, so a view built
//! from an earlier state stays valid after later events.

use board_core::{
    BoardError, BoardPayload, BoardStructure, Coord, Dimensions, DisplayOptions, DisplayToggle,
    OptionStore, TraitStore,
};

use crate::catalog::{CatalogError, ImageAsset, ImageCatalog};
use crate::services::UpdateScope;
use crate::view_model::{BoardView, TileViewModel, compose_tile_with};

/// Editor and compiler events the board reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardEvent {
    /// Initial snapshot received when the editor connects.
    Connected {
        payload: BoardPayload,
        images: Vec<ImageAsset>,
    },
    /// Fresh board and traits after a successful recompile.
    Recompiled(BoardPayload),
    ImageUploaded(ImageAsset),
    ImageRenamed { id: u64, name: String },
    ImageDeleted { id: u64 },
    Toggled(DisplayToggle),
    Resized { tile_size: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("rejected board payload: {0}")]
    Board(#[from] BoardError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Board structure, trait snapshot, image catalog and display options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    structure: BoardStructure,
    traits: TraitStore,
    images: ImageCatalog,
    options: DisplayOptions,
}

impl BoardState {
    /// Board shown before the first payload arrives.
    pub const PLACEHOLDER_DIMENSIONS: Dimensions = Dimensions::new(10, 10);

    pub fn new(options: DisplayOptions) -> Self {
        Self {
            structure: BoardStructure::empty(Self::PLACEHOLDER_DIMENSIONS)
                .unwrap_or_else(|err| unreachable!("placeholder board is valid: {err}")),
            traits: TraitStore::new(),
            images: ImageCatalog::new(),
            options,
        }
    }

    pub fn structure(&self) -> &BoardStructure {
        &self.structure
    }

    pub fn traits(&self) -> &TraitStore {
        &self.traits
    }

    pub fn images(&self) -> &ImageCatalog {
        &self.images
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    /// Applies one event and reports which parts of the state changed.
    ///
    /// A rejected event leaves the state untouched.
    pub fn apply(&mut self, event: BoardEvent) -> Result<UpdateScope, StateError> {
        match event {
            BoardEvent::Connected { payload, images } => {
                self.replace_board(payload)?;
                self.images = ImageCatalog::from_assets(images);
                tracing::debug!(images = self.images.len(), "editor connected");
                Ok(UpdateScope::ALL)
            }
            BoardEvent::Recompiled(payload) => {
                self.replace_board(payload)?;
                Ok(UpdateScope::STRUCTURE | UpdateScope::TRAITS)
            }
            BoardEvent::ImageUploaded(asset) => {
                tracing::debug!(id = asset.id, name = %asset.name, "image uploaded");
                self.images.insert(asset);
                Ok(UpdateScope::ASSETS)
            }
            BoardEvent::ImageRenamed { id, name } => {
                let previous = self.images.rename(id, &name)?;
                // Records that already named the new image were unresolved and
                // now gain a URL without being patched.
                let resolves_dangling = self.traits.iter().any(|(_, record)| {
                    record.image.as_ref().is_some_and(|image| image.as_str() == name)
                });
                let renamed = self.traits.rename_image(&previous, &name);
                let touched = renamed != self.traits;
                self.traits = renamed;
                tracing::debug!(id, from = %previous, to = %name, touched, "image renamed");

                Ok(match (touched, resolves_dangling) {
                    (true, false) => UpdateScope::TRAITS,
                    (true, true) => UpdateScope::ASSETS | UpdateScope::TRAITS,
                    (false, _) => UpdateScope::ASSETS,
                })
            }
            BoardEvent::ImageDeleted { id } => match self.images.remove(id) {
                Some(asset) => {
                    tracing::debug!(id, name = %asset.name, "image deleted");
                    Ok(UpdateScope::ASSETS)
                }
                None => {
                    tracing::warn!(id, "delete for unknown image ignored");
                    Ok(UpdateScope::empty())
                }
            },
            BoardEvent::Toggled(toggle) => {
                self.options = self.options.toggled(toggle);
                tracing::debug!(%toggle, value = self.options.get(toggle), "display option toggled");
                Ok(UpdateScope::OPTIONS)
            }
            BoardEvent::Resized { tile_size } => {
                let resized = self.options.with_tile_size(tile_size);
                if resized == self.options {
                    return Ok(UpdateScope::empty());
                }
                self.options = resized;
                Ok(UpdateScope::OPTIONS)
            }
        }
    }

    /// Applies `event` and writes the display options to `store` if it changed
    /// them.
    pub fn apply_persisted<S: OptionStore + ?Sized>(
        &mut self,
        event: BoardEvent,
        store: &mut S,
    ) -> Result<UpdateScope, StateError> {
        let scope = self.apply(event)?;
        if scope.contains(UpdateScope::OPTIONS) {
            self.persist_options(store);
            tracing::trace!(tile_size = self.options.tile_size, "display options persisted");
        }
        Ok(scope)
    }

    /// Writes the current display options to `store`.
    pub fn persist_options<S: OptionStore + ?Sized>(&self, store: &mut S) {
        self.options.persist(store);
    }

    /// Composes every render cell.
    pub fn view(&self) -> BoardView {
        BoardView::compose(
            self.structure.dimensions(),
            &self.traits,
            &self.options,
            &self.images,
        )
    }

    /// Composes a single render cell.
    pub fn tile(&self, coord: Coord) -> TileViewModel {
        compose_tile_with(
            coord,
            self.structure.dimensions(),
            &self.traits,
            &self.options,
            &self.images,
        )
    }

    fn replace_board(&mut self, payload: BoardPayload) -> Result<(), StateError> {
        let (structure, traits) = payload.into_parts().inspect_err(|err| {
            tracing::warn!(code = err.error_code(), %err, "board payload rejected");
        })?;

        tracing::debug!(
            dimensions = %structure.dimensions(),
            paths = structure.paths().len(),
            traits = traits.len(),
            "board replaced"
        );
        self.structure = structure;
        self.traits = traits;
        Ok(())
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(DisplayOptions::default())
    }
}
