//! Per-cell view records.

use board_core::{
    ArrowOffset, CellKind, Coord, Dimensions, Direction, DisplayOptions, Label, LineGeometry,
    Marker, Path, TraitRecord, TraitStore, arrow_offset, classify, line_geometry,
};

use crate::catalog::{AssetCatalog, DirectUrls};

/// Everything a renderer needs to draw one cell of the board grid.
#[derive(Clone, Debug, PartialEq)]
pub struct TileViewModel {
    pub coord: Coord,
    pub kind: CellKind,
    pub tile_size: u32,
    /// Background image, when images are shown and the reference resolves.
    pub image_url: Option<String>,
    /// Hover labels, in assignment order.
    pub labels: Vec<Label>,
    pub marker: Option<Marker>,
    /// Outgoing path line, when path lines are shown.
    pub path_line: Option<PathLineView>,
    /// Set for trait-less tiles while unused tiles are hidden.
    pub hidden: bool,
    /// The tile reveals labels on hover.
    pub hoverable: bool,
}

impl TileViewModel {
    fn header(coord: Coord, kind: CellKind, tile_size: u32) -> Self {
        Self {
            coord,
            kind,
            tile_size,
            image_url: None,
            labels: Vec::new(),
            marker: None,
            path_line: None,
            hidden: false,
            hoverable: false,
        }
    }

    /// Text shown in a header cell, if this is one.
    pub fn axis_label(&self) -> Option<i32> {
        match self.kind {
            CellKind::XAxisLabel { value } | CellKind::YAxisLabel { value } => Some(value),
            _ => None,
        }
    }
}

/// Resolved connector line leaving a tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathLineView {
    pub direction: Direction,
    pub distance: u32,
    /// `distance * tile_size`, before trimming.
    pub extent: u32,
    pub line: LineGeometry,
    /// Present when arrows are enabled.
    pub arrow: Option<ArrowOffset>,
}

impl PathLineView {
    pub fn new(path: &Path, options: &DisplayOptions) -> Self {
        let direction = path.direction();
        let distance = path.distance();
        let extent = path.line_extent(options.tile_size);

        Self {
            direction,
            distance,
            extent,
            line: line_geometry(direction, distance, options.tile_size),
            arrow: options
                .arrows_enabled()
                .then(|| arrow_offset(direction, extent)),
        }
    }
}

/// Composes the view model for one cell, treating image references as URLs.
///
/// # Panics
///
/// Panics if `coord` is an interior cell with a negative component; cells
/// produced by [`board_core::enumerate_cells`] never are.
pub fn compose_tile(
    coord: Coord,
    dimensions: Dimensions,
    store: &TraitStore,
    options: &DisplayOptions,
) -> TileViewModel {
    compose_tile_with(coord, dimensions, store, options, &DirectUrls)
}

/// Composes the view model for one cell, resolving images through `catalog`.
pub fn compose_tile_with<C: AssetCatalog + ?Sized>(
    coord: Coord,
    dimensions: Dimensions,
    store: &TraitStore,
    options: &DisplayOptions,
    catalog: &C,
) -> TileViewModel {
    let kind = classify(coord, dimensions);
    if !kind.is_interior() {
        return TileViewModel::header(coord, kind, options.tile_size);
    }

    let record = store.at(coord);

    TileViewModel {
        coord,
        kind,
        tile_size: options.tile_size,
        image_url: resolve_image(record, options, catalog),
        labels: record.labels.clone(),
        marker: record.marker,
        path_line: record
            .path_line
            .filter(|_| options.show_path_lines)
            .map(|path| PathLineView::new(&path, options)),
        hidden: !options.show_unused_tiles && record.is_empty(),
        hoverable: !record.labels.is_empty(),
    }
}

fn resolve_image<C: AssetCatalog + ?Sized>(
    record: &TraitRecord,
    options: &DisplayOptions,
    catalog: &C,
) -> Option<String> {
    if !options.show_images {
        return None;
    }
    let image = record.image.as_ref()?;
    catalog.image_url(image.as_str()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::{AssetRef, DisplayToggle, TraitAssignment};

    use crate::catalog::{ImageAsset, ImageCatalog};

    fn two_by_two() -> (Dimensions, TraitStore) {
        let path = Path::new(Coord::new(1, 1), Coord::new(2, 1)).unwrap();
        let store = TraitStore::rebuild(
            &[TraitAssignment::new(Coord::new(2, 2), AssetRef::from("grass"))],
            &[TraitAssignment::new(Coord::new(2, 1), Label::new("Inn", "Rest here"))],
            &[path],
        )
        .unwrap();
        (Dimensions::new(2, 2), store)
    }

    #[test]
    fn path_origin_resolves_direction_and_distance() {
        let (dims, store) = two_by_two();
        let tile = compose_tile(Coord::new(1, 1), dims, &store, &DisplayOptions::default());

        let line = tile.path_line.expect("path line at origin");
        assert_eq!(line.direction, Direction::Right);
        assert_eq!(line.distance, 1);
        assert_eq!(line.extent, 40);
        assert!(line.arrow.is_some());
    }

    #[test]
    fn tiles_without_outgoing_path_have_no_line() {
        let (dims, store) = two_by_two();
        let tile = compose_tile(Coord::new(2, 2), dims, &store, &DisplayOptions::default());
        assert!(tile.path_line.is_none());
        assert_eq!(tile.image_url.as_deref(), Some("grass"));
    }

    #[test]
    fn hidden_path_lines_drop_the_line_but_keep_labels() {
        let (dims, store) = two_by_two();
        let options = DisplayOptions::default().toggled(DisplayToggle::ShowPathLines);

        assert!(compose_tile(Coord::new(1, 1), dims, &store, &options).path_line.is_none());
        let labelled = compose_tile(Coord::new(2, 1), dims, &store, &options);
        assert_eq!(labelled.labels, vec![Label::new("Inn", "Rest here")]);
        assert!(labelled.hoverable);
    }

    #[test]
    fn arrows_follow_the_arrow_toggle() {
        let (dims, store) = two_by_two();
        let options = DisplayOptions::default().toggled(DisplayToggle::ShowArrows);
        let tile = compose_tile(Coord::new(1, 1), dims, &store, &options);
        assert!(tile.path_line.unwrap().arrow.is_none());
    }

    #[test]
    fn images_resolve_through_the_catalog() {
        let (dims, store) = two_by_two();
        let catalog =
            ImageCatalog::from_assets([ImageAsset::new(7, "grass", "https://cdn.example/g.png")]);

        let shown = compose_tile_with(
            Coord::new(2, 2),
            dims,
            &store,
            &DisplayOptions::default(),
            &catalog,
        );
        assert_eq!(shown.image_url.as_deref(), Some("https://cdn.example/g.png"));

        let options = DisplayOptions::default().toggled(DisplayToggle::ShowImages);
        let hidden = compose_tile_with(Coord::new(2, 2), dims, &store, &options, &catalog);
        assert!(hidden.image_url.is_none());
    }

    #[test]
    fn unused_tiles_hide_only_when_requested() {
        let (dims, store) = two_by_two();
        let empty = Coord::new(1, 2);

        assert!(!compose_tile(empty, dims, &store, &DisplayOptions::default()).hidden);
        let options = DisplayOptions::default().toggled(DisplayToggle::ShowUnusedTiles);
        assert!(compose_tile(empty, dims, &store, &options).hidden);
        assert!(!compose_tile(Coord::new(2, 2), dims, &store, &options).hidden);
    }

    #[test]
    fn header_cells_carry_no_traits() {
        let (dims, store) = two_by_two();
        let tile = compose_tile(Coord::new(2, 0), dims, &store, &DisplayOptions::default());
        assert_eq!(tile.kind, CellKind::XAxisLabel { value: 1 });
        assert_eq!(tile.axis_label(), Some(1));
        assert!(tile.labels.is_empty() && tile.path_line.is_none());
    }

    #[test]
    fn composition_is_deterministic() {
        let (dims, store) = two_by_two();
        let options = DisplayOptions::default();
        for x in 0..=2 {
            for y in 0..=2 {
                let coord = Coord::new(x, y);
                assert_eq!(
                    compose_tile(coord, dims, &store, &options),
                    compose_tile(coord, dims, &store.clone(), &options)
                );
            }
        }
    }
}
