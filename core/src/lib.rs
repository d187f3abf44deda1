#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use placement::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod grid;
mod placement;
mod types;

/// Fraction of cells that hold a bomb, in percent.
pub const BOMB_DENSITY_PERCENT: CellCount = 15;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub seed: u64,
}

impl GameConfig {
    pub const fn new(rows: Coord, cols: Coord, seed: u64) -> Self {
        Self { rows, cols, seed }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Bombs for this board size, `floor(0.15 * cells)` computed exactly.
    pub const fn bomb_count(&self) -> CellCount {
        (self.total_cells() as u64 * BOMB_DENSITY_PERCENT as u64 / 100) as CellCount
    }
}
