//! Coordinate hashing helpers
//!
//! Trait records are keyed by the Cantor pairing of their coordinate; these
//! commands translate between the two when reading logs or payload dumps.

use anyhow::Result;
use board_core::{Coord, CoordHash};
use clap::Parser;
use console::style;

/// Hash a coordinate into its trait-store key
#[derive(Parser, Debug)]
pub struct Hash {
    /// Column, zero or greater
    #[arg(allow_negative_numbers = true)]
    x: i32,

    /// Row, zero or greater
    #[arg(allow_negative_numbers = true)]
    y: i32,
}

impl Hash {
    pub fn execute(self) -> Result<()> {
        let coord = Coord::new(self.x, self.y);
        let hash = CoordHash::try_from_coord(coord)?;

        println!("{} {} {}", style(coord).cyan(), style("→").dim(), style(hash.value()).bold());
        Ok(())
    }
}

/// Recover the coordinate behind a trait-store key
#[derive(Parser, Debug)]
pub struct Unhash {
    /// Hash value as printed by `xtask hash`
    #[arg(value_name = "HASH")]
    value: u64,
}

impl Unhash {
    pub fn execute(self) -> Result<()> {
        let coord = CoordHash(self.value).unpair()?;

        println!("{} {} {}", style(self.value).bold(), style("→").dim(), style(coord).cyan());
        Ok(())
    }
}
