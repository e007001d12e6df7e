//! Strategy enum for selecting how a generation is computed.
//!
//! Both strategies produce identical grids; they only differ in how the
//! per-cell pass is scheduled.

use super::{Grid, rules};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One pass over all cells on the calling thread
    #[default]
    Serial,
    /// Rows of the frozen snapshot split across rayon workers
    ParallelRows,
}

impl Strategy {
    /// Get all available strategies
    pub fn all() -> Vec<Strategy> {
        vec![Strategy::Serial, Strategy::ParallelRows]
    }

    /// Display name for UI and benchmark output
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Serial => "Serial",
            Strategy::ParallelRows => "Rows+Par",
        }
    }

    /// Compute the next generation of `grid`
    pub fn next_generation(&self, grid: &Grid) -> Grid {
        match self {
            Strategy::Serial => rules::next_generation(grid),
            Strategy::ParallelRows => rules::next_generation_parallel(grid),
        }
    }
}
