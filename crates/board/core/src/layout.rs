//! Render-grid enumeration, cell classification and connector geometry.
//!
//! The rendered grid is one cell larger than the board in each direction: row
//! `y = 0` holds the x-axis coordinate labels, column `x = 0` the y-axis labels,
//! and `(0, 0)` is an empty filler. Interior tiles carry edge flags so a
//! renderer can style borders and corners.

use bitflags::bitflags;

use crate::coord::{Coord, Dimensions};
use crate::path::{Axis, Direction, line_extent_pixels};

/// Lazily yields every render cell in row-major order (y outer, x inner),
/// including the header row and column.
///
/// The iterator is a pure function of the dimensions; clone it or call
/// [`enumerate_cells`] again to restart.
#[derive(Clone, Debug)]
pub struct Cells {
    columns: usize,
    index: usize,
    total: usize,
}

pub fn enumerate_cells(dimensions: Dimensions) -> Cells {
    Cells {
        columns: dimensions.columns() as usize,
        index: 0,
        total: dimensions.cell_count(),
    }
}

impl Iterator for Cells {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        if self.index >= self.total {
            return None;
        }
        let x = self.index % self.columns;
        let y = self.index / self.columns;
        self.index += 1;
        Some(Coord::new(x as i32, y as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

bitflags! {
    /// Board edges an interior tile touches.
    ///
    /// A tile on a one-tile-wide board touches both opposite edges at once.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EdgeFlags: u8 {
        const TOP    = 1 << 0;
        const BOTTOM = 1 << 1;
        const LEFT   = 1 << 2;
        const RIGHT  = 1 << 3;
    }
}

impl EdgeFlags {
    pub fn for_tile(coord: Coord, dimensions: Dimensions) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::TOP, coord.y == 1);
        flags.set(Self::BOTTOM, i64::from(coord.y) == i64::from(dimensions.height));
        flags.set(Self::LEFT, coord.x == 1);
        flags.set(Self::RIGHT, i64::from(coord.x) == i64::from(dimensions.width));
        flags
    }

    pub fn is_corner(self, corner: Corner) -> bool {
        self.contains(corner.edges())
    }

    /// Corners this tile sits on, in `Corner::ALL` order.
    pub fn corners(self) -> impl Iterator<Item = Corner> {
        Corner::ALL
            .into_iter()
            .filter(move |corner| self.is_corner(*corner))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub const fn edges(self) -> EdgeFlags {
        match self {
            Corner::TopLeft => EdgeFlags::TOP.union(EdgeFlags::LEFT),
            Corner::TopRight => EdgeFlags::TOP.union(EdgeFlags::RIGHT),
            Corner::BottomLeft => EdgeFlags::BOTTOM.union(EdgeFlags::LEFT),
            Corner::BottomRight => EdgeFlags::BOTTOM.union(EdgeFlags::RIGHT),
        }
    }
}

/// What a render cell displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The empty top-left cell.
    CornerFiller,
    /// Header row cell labelled with the column coordinate `x - 1`.
    XAxisLabel { value: i32 },
    /// Header column cell labelled with the row coordinate `y - 1`.
    YAxisLabel { value: i32 },
    /// A playable tile.
    InteriorTile { edges: EdgeFlags },
}

impl CellKind {
    pub const fn is_interior(&self) -> bool {
        matches!(self, CellKind::InteriorTile { .. })
    }

    pub fn edges(&self) -> EdgeFlags {
        match self {
            CellKind::InteriorTile { edges } => *edges,
            _ => EdgeFlags::empty(),
        }
    }
}

/// Classifies a render cell. Exactly one kind applies to every enumerated cell.
pub fn classify(coord: Coord, dimensions: Dimensions) -> CellKind {
    match (coord.x, coord.y) {
        (0, 0) => CellKind::CornerFiller,
        (x, 0) => CellKind::XAxisLabel { value: x - 1 },
        (0, y) => CellKind::YAxisLabel { value: y - 1 },
        _ => CellKind::InteriorTile {
            edges: EdgeFlags::for_tile(coord, dimensions),
        },
    }
}

/// Offset that places the arrow glyph at the midpoint of its connector line.
///
/// Margins are relative to the line's box; the glyph is drawn pointing up and
/// rotated clockwise by `rotation_degrees`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowOffset {
    pub margin_top: f32,
    pub margin_left: f32,
    pub rotation_degrees: u16,
}

pub fn arrow_offset(direction: Direction, line_extent: u32) -> ArrowOffset {
    let half = line_extent as f32 / 2.0;
    let (margin_top, margin_left) = match direction {
        Direction::Up => (half - 17.0, -7.0),
        Direction::Down => (half - 12.0, -3.0),
        Direction::Left => (-8.0, half - 4.0),
        Direction::Right => (-14.0, half - 12.0),
    };

    ArrowOffset {
        margin_top,
        margin_left,
        rotation_degrees: direction.rotation_degrees(),
    }
}

/// Pixel box of a path's connector line, relative to its origin tile.
///
/// Lines start near the centre of the origin tile and stop just short of the
/// centre of the destination so the markers at either end stay visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_left: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl LineGeometry {
    pub const THICKNESS: f32 = 2.0;
    const VERTICAL_TRIM: f32 = 8.0;
    const HORIZONTAL_TRIM: f32 = 7.0;

    /// Length of the drawn line along its axis.
    pub fn length(&self) -> f32 {
        self.width.max(self.height)
    }
}

pub fn line_geometry(direction: Direction, distance: u32, tile_size: u32) -> LineGeometry {
    let extent = line_extent_pixels(distance, tile_size) as f32;
    let half_tile = tile_size as f32 / 2.0;

    let (width, height) = match direction.axis() {
        Axis::Vertical => (
            LineGeometry::THICKNESS,
            extent - LineGeometry::VERTICAL_TRIM,
        ),
        Axis::Horizontal => (
            extent - LineGeometry::HORIZONTAL_TRIM,
            LineGeometry::THICKNESS,
        ),
    };

    let (margin_top, margin_left, translate_x, translate_y) = match direction {
        Direction::Up => (0.0, half_tile - 2.0, 0.0, -(extent - half_tile - 2.0)),
        Direction::Down => (half_tile + 2.0, half_tile - 3.0, 0.0, 0.0),
        Direction::Left => (half_tile - 2.0, half_tile + 2.0, -extent, 0.0),
        Direction::Right => (half_tile - 2.0, half_tile + 2.0, 0.0, 0.0),
    };

    LineGeometry {
        width,
        height,
        margin_top,
        margin_left,
        translate_x,
        translate_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_row_major_with_headers() {
        let cells: Vec<_> = enumerate_cells(Dimensions::new(2, 1)).collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
            ]
        );
    }

    #[test]
    fn cells_restart_from_a_clone() {
        let mut cells = enumerate_cells(Dimensions::new(3, 3));
        let fresh = cells.clone();
        cells.by_ref().take(5).for_each(drop);
        assert_eq!(cells.len(), 11);
        assert_eq!(fresh.count(), 16);
    }

    #[test]
    fn header_cells_show_zero_based_coordinates() {
        let dims = Dimensions::new(3, 3);
        assert_eq!(classify(Coord::new(0, 0), dims), CellKind::CornerFiller);
        assert_eq!(
            classify(Coord::new(1, 0), dims),
            CellKind::XAxisLabel { value: 0 }
        );
        assert_eq!(
            classify(Coord::new(0, 3), dims),
            CellKind::YAxisLabel { value: 2 }
        );
    }

    #[test]
    fn top_left_tile_touches_top_and_left_edges() {
        let kind = classify(Coord::new(1, 1), Dimensions::new(3, 3));
        let edges = kind.edges();
        assert!(edges.contains(EdgeFlags::TOP | EdgeFlags::LEFT));
        assert!(edges.is_corner(Corner::TopLeft));
        assert_eq!(edges.corners().collect::<Vec<_>>(), vec![Corner::TopLeft]);
    }

    #[test]
    fn centre_tile_has_no_edges() {
        let kind = classify(Coord::new(2, 2), Dimensions::new(3, 3));
        assert_eq!(kind.edges(), EdgeFlags::empty());
    }

    #[test]
    fn single_tile_board_sits_on_every_corner() {
        let edges = classify(Coord::new(1, 1), Dimensions::new(1, 1)).edges();
        assert_eq!(edges, EdgeFlags::all());
        assert_eq!(edges.corners().count(), 4);
    }

    #[test]
    fn arrow_tracks_line_midpoint() {
        for direction in Direction::ALL {
            let short = arrow_offset(direction, 40);
            let long = arrow_offset(direction, 120);
            let shift = match direction.axis() {
                Axis::Vertical => long.margin_top - short.margin_top,
                Axis::Horizontal => long.margin_left - short.margin_left,
            };
            assert_eq!(shift, 40.0, "{direction} arrow should move by half the added length");
            assert_eq!(short.rotation_degrees, direction.rotation_degrees());
        }
    }

    #[test]
    fn arrow_offsets_match_editor_constants() {
        assert_eq!(
            arrow_offset(Direction::Up, 80),
            ArrowOffset {
                margin_top: 23.0,
                margin_left: -7.0,
                rotation_degrees: 0,
            }
        );
        assert_eq!(
            arrow_offset(Direction::Right, 80),
            ArrowOffset {
                margin_top: -14.0,
                margin_left: 28.0,
                rotation_degrees: 90,
            }
        );
    }

    #[test]
    fn line_geometry_trims_to_leave_room_for_markers() {
        let down = line_geometry(Direction::Down, 2, 40);
        assert_eq!(down.width, LineGeometry::THICKNESS);
        assert_eq!(down.height, 72.0);
        assert_eq!(down.margin_top, 22.0);

        let left = line_geometry(Direction::Left, 3, 40);
        assert_eq!(left.length(), 113.0);
        assert_eq!(left.translate_x, -120.0);

        let up = line_geometry(Direction::Up, 1, 40);
        assert_eq!(up.translate_y, -18.0);
    }
}
