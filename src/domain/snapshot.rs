//! Persisted simulation state.
//!
//! A snapshot stores the grid dimensions, one bit per cell (row-major,
//! top-to-bottom, left-to-right, most significant bit first within each
//! byte) and the generation counter. It is written as JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Cell, EngineError, Grid};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to access snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Format(#[from] serde_json::Error),

    #[error("snapshot dimensions {width}x{height} are too large")]
    TooLarge { width: usize, height: usize },

    #[error("snapshot holds {actual} bytes of cells, expected {expected}")]
    CellCount { expected: usize, actual: usize },

    #[error("snapshot is {found_width}x{found_height}, session grid is {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    /// Packed cell bits
    pub cells: Vec<u8>,
}

impl Snapshot {
    /// Capture `grid` and the generation it was reached at
    pub fn capture(grid: &Grid, generation: u64) -> Self {
        let (width, height) = grid.dimensions();
        // A live grid already holds width * height cells, so the product fits
        let mut cells = vec![0u8; (width * height).div_ceil(8)];
        for (idx, (_, _, cell)) in grid.iter_cells().enumerate() {
            if cell.is_alive() {
                cells[idx / 8] |= 0x80 >> (idx % 8);
            }
        }
        Self { width, height, generation, cells }
    }

    /// Rebuild the grid, validating the packed length
    pub fn to_grid(&self) -> Result<Grid, SnapshotError> {
        let total = self.width.checked_mul(self.height).ok_or(SnapshotError::TooLarge {
            width: self.width,
            height: self.height,
        })?;
        let expected = total.div_ceil(8);
        if self.cells.len() != expected {
            return Err(SnapshotError::CellCount {
                expected,
                actual: self.cells.len(),
            });
        }

        let cells = (0..total)
            .map(|idx| Cell::from(self.cells[idx / 8] & (0x80 >> (idx % 8)) != 0))
            .collect();
        Ok(Grid::from_cells(self.width, self.height, cells))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SnapshotError> {
        let json = serde_json::to_string(self)?;
        std::fs::write(&path, json)?;
        log::info!("saved snapshot to {}", path.as_ref().display());
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(&path)?;
        let snapshot = serde_json::from_str(&json)?;
        log::info!("loaded snapshot from {}", path.as_ref().display());
        Ok(snapshot)
    }
}
