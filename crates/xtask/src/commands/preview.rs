//! Render a board file as text
//!
//! Loads a board payload, composes its view the way the editor does and
//! prints the grid with one glyph per tile.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use board_content::BoardLoader;
use board_core::{Axis, BoardStructure, CellKind, Direction, Marker};
use board_frontend_core::{BoardEvent, BoardState, FrontendConfig, ImageAsset, TileViewModel};
use clap::Parser;
use console::{StyledObject, style};

use super::open_options;

/// Render a board file as text
#[derive(Parser, Debug)]
pub struct Preview {
    /// Board payload (.ron or .json)
    #[arg(value_name = "BOARD")]
    board: PathBuf,

    /// Options file (defaults to platform-specific location)
    #[arg(short, long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// List hover labels below the grid
    #[arg(short, long)]
    labels: bool,
}

impl Preview {
    pub fn execute(self) -> Result<()> {
        let payload = BoardLoader::load(&self.board)?;
        let config = FrontendConfig::from_store(&open_options(self.options)?);

        // Every image the board references counts as uploaded under its own name.
        let names: BTreeSet<String> = payload
            .image_traits
            .iter()
            .map(|assignment| assignment.value.as_str().to_owned())
            .collect();
        let images = names
            .into_iter()
            .zip(1u64..)
            .map(|(name, id)| ImageAsset::new(id, name.clone(), name))
            .collect();

        let mut state = BoardState::new(config.options);
        state
            .apply(BoardEvent::Connected { payload, images })
            .with_context(|| format!("Failed to load board: {}", self.board.display()))?;

        print_grid(&state);
        println!();
        print_summary(&state);
        if self.labels {
            println!();
            print_labels(&state);
        }

        Ok(())
    }
}

fn print_grid(state: &BoardState) {
    let view = state.view();
    for row in view.rows() {
        let line: String = row
            .iter()
            .map(|cell| glyph(cell, state).to_string())
            .collect();
        println!("{line}");
    }
}

fn glyph(cell: &TileViewModel, state: &BoardState) -> StyledObject<String> {
    match cell.kind {
        CellKind::CornerFiller => style("   ".to_owned()),
        CellKind::XAxisLabel { value } | CellKind::YAxisLabel { value } => {
            style(format!("{value:>3}")).dim()
        }
        CellKind::InteriorTile { .. } => interior_glyph(cell, state),
    }
}

fn interior_glyph(cell: &TileViewModel, state: &BoardState) -> StyledObject<String> {
    let centered = |symbol: char| format!(" {symbol} ");

    if cell.hidden {
        return style("   ".to_owned());
    }

    match cell.marker {
        Some(Marker::Start) => return style(centered('S')).green().bold(),
        Some(Marker::Finish) => return style(centered('F')).red().bold(),
        Some(Marker::EnRoute) | None => {}
    }

    if let Some(line) = &cell.path_line {
        let symbol = match (line.arrow, line.direction) {
            (None, _) => '+',
            (Some(_), Direction::Up) => '^',
            (Some(_), Direction::Down) => 'v',
            (Some(_), Direction::Left) => '<',
            (Some(_), Direction::Right) => '>',
        };
        return style(centered(symbol)).cyan().bold();
    }

    if state.options().show_path_lines
        && let Some(axis) = route_axis(state.structure(), cell)
    {
        let symbol = match axis {
            Axis::Horizontal => '-',
            Axis::Vertical => '|',
        };
        return style(centered(symbol)).cyan();
    }

    if cell.hoverable {
        style(centered('*')).yellow()
    } else if cell.image_url.is_some() {
        style(centered('#'))
    } else {
        style(centered('.')).dim()
    }
}

fn route_axis(structure: &BoardStructure, cell: &TileViewModel) -> Option<Axis> {
    structure
        .paths()
        .iter()
        .find(|path| path.covers(cell.coord))
        .map(|path| path.direction().axis())
}

fn print_summary(state: &BoardState) {
    let structure = state.structure();
    let coord_or_dash = |coord: Option<board_core::Coord>| {
        coord.map_or_else(|| "-".to_owned(), |coord| coord.to_string())
    };

    println!(
        "{} {}  {} {}  {} {}",
        style("board").dim(),
        style(structure.dimensions()).bold(),
        style("paths").dim(),
        style(structure.paths().len()).bold(),
        style("traits").dim(),
        style(state.traits().len()).bold(),
    );
    println!(
        "{} {}  {} {}  {} {}px",
        style("start").dim(),
        style(coord_or_dash(structure.start())).green(),
        style("finish").dim(),
        style(coord_or_dash(structure.finish())).red(),
        style("tile").dim(),
        state.options().tile_size,
    );
    println!(
        "{}",
        style("S start  F finish  ^v<> path origin  -| route  * labels  # image").dim()
    );
}

fn print_labels(state: &BoardState) {
    let view = state.view();
    let labelled: Vec<&TileViewModel> = view.cells.iter().filter(|cell| cell.hoverable).collect();

    if labelled.is_empty() {
        println!("{}", style("No labels").dim());
        return;
    }

    for cell in labelled {
        for label in &cell.labels {
            if label.body.is_empty() {
                println!("  {} {}", style(cell.coord).cyan(), style(&label.title).bold());
            } else {
                println!(
                    "  {} {}: {}",
                    style(cell.coord).cyan(),
                    style(&label.title).bold(),
                    label.body
                );
            }
        }
    }
}
