// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod config;
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::{Command, RunState, SimulationController, SimulationStats, Ticker};
pub use domain::{Cell, EngineError, Grid, HEIGHT, Pattern, PatternLibrary, Snapshot, Strategy, WIDTH};
