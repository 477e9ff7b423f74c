//! Show or change persisted display options
//!
//! Changes go through the same board state events the editor emits, so the
//! slider clamping applies here too.

use std::path::PathBuf;

use anyhow::Result;
use board_core::{DisplayOptions, DisplayToggle};
use board_frontend_core::{BoardEvent, BoardState};
use clap::Parser;
use console::style;

use super::open_options;

/// Show or change persisted display options
#[derive(Parser, Debug)]
pub struct Options {
    /// Options file (defaults to platform-specific location)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// New tile size in pixels (clamped to the slider range)
    #[arg(long, value_name = "PIXELS")]
    tile_size: Option<u32>,

    /// Flip a display toggle (showArrows, showImages, showPathLines, showUnusedTiles)
    #[arg(long, value_name = "TOGGLE")]
    toggle: Vec<DisplayToggle>,

    /// Restore defaults before applying other changes
    #[arg(long)]
    reset: bool,
}

impl Options {
    pub fn execute(self) -> Result<()> {
        let mut store = open_options(self.file)?;
        let stored = DisplayOptions::load(&store);

        let mut state = if self.reset {
            let state = BoardState::default();
            state.persist_options(&mut store);
            state
        } else {
            BoardState::new(stored)
        };
        let mut events: Vec<BoardEvent> = self.toggle.into_iter().map(BoardEvent::Toggled).collect();
        if let Some(tile_size) = self.tile_size {
            events.push(BoardEvent::Resized { tile_size });
        }
        for event in events {
            state.apply_persisted(event, &mut store)?;
        }

        let changed = self.reset || stored != *state.options();
        if changed {
            store.save()?;
        }

        print_options(state.options());
        println!();
        let status = if changed { "saved to" } else { "stored at" };
        println!("{} {}", style(status).dim(), style(store.path().display()).dim());

        Ok(())
    }
}

fn print_options(options: &DisplayOptions) {
    println!("{}", style("Display options").bold());
    println!(
        "  {:<18} {}",
        DisplayOptions::TILE_SIZE_KEY,
        style(options.tile_size).cyan()
    );
    for toggle in DisplayToggle::ALL {
        let value = if options.get(toggle) {
            style("on").green()
        } else {
            style("off").red()
        };
        println!("  {:<18} {}", toggle.as_ref(), value);
    }
}
