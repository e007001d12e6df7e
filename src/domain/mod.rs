mod cell;
mod error;
mod grid;
pub mod neighbors;
mod patterns;
pub mod rules;
mod snapshot;
mod strategy;

pub use cell::Cell;
pub use error::{EngineError, Result};
pub use grid::Grid;
pub use patterns::{Category, Pattern, PatternLibrary, presets};
pub use snapshot::{Snapshot, SnapshotError};
pub use strategy::Strategy;

/// Grid width in cells
pub const WIDTH: usize = 120;
/// Grid height in cells
pub const HEIGHT: usize = 80;
