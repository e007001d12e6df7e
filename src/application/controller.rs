use crate::domain::{
    EngineError, Grid, HEIGHT, Pattern, PatternLibrary, Result, Snapshot, SnapshotError, Strategy,
    WIDTH, neighbors,
};

use super::Command;

/// Whether generations are advancing on their own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Paused => "paused",
            RunState::Running => "running",
        }
    }
}

/// Counters derived from the current grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct SimulationStats {
    pub generation: u64,
    pub active_cells: usize,
}

/// SimulationController orchestrates the simulation.
/// It exclusively owns the current grid; editing is only allowed while paused.
pub struct SimulationController {
    grid: Grid,
    library: PatternLibrary,
    strategy: Strategy,
    state: RunState,
    stats: SimulationStats,
}

impl SimulationController {
    /// Paused controller over an empty 120x80 grid
    pub fn new() -> Self {
        Self::with_dimensions(WIDTH, HEIGHT)
    }

    /// Paused controller over an empty grid of the given size
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height),
            library: PatternLibrary::new(),
            strategy: Strategy::default(),
            state: RunState::Paused,
            stats: SimulationStats::default(),
        }
    }

    /// Select how generations are computed (builder pattern)
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn stats(&self) -> SimulationStats {
        self.stats
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn list_patterns(&self) -> &[Pattern] {
        self.library.list()
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<bool> {
        self.grid.get(x, y)
    }

    /// Live neighbors of an in-bounds cell
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<u8> {
        self.grid.get(x, y)?;
        Ok(neighbors::count(&self.grid, x, y))
    }

    fn require_paused(&self, operation: &'static str) -> Result<()> {
        match self.state {
            RunState::Paused => Ok(()),
            RunState::Running => Err(EngineError::InvalidStateTransition {
                operation,
                state: self.state.label(),
            }),
        }
    }

    fn refresh_active_cells(&mut self) {
        self.stats.active_cells = self.grid.count_alive();
    }

    fn advance(&mut self) {
        self.grid = self.strategy.next_generation(&self.grid);
        self.stats.generation += 1;
        self.refresh_active_cells();
    }

    pub fn start(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
            log::info!("simulation started at generation {}", self.stats.generation);
        }
    }

    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            log::info!("simulation paused at generation {}", self.stats.generation);
        }
    }

    /// Advance exactly one generation by hand
    pub fn step(&mut self) -> Result<()> {
        self.require_paused("step")?;
        self.advance();
        log::debug!("stepped to generation {}", self.stats.generation);
        Ok(())
    }

    /// Called by the driving loop once per tick; steps only while running
    pub fn tick(&mut self) -> bool {
        if self.is_running() {
            self.advance();
        }
        self.is_running()
    }

    /// Replace the grid with an empty one and reset the counters.
    /// The run state is left as it is.
    pub fn clear(&mut self) {
        let (width, height) = self.grid.dimensions();
        self.grid = Grid::new(width, height);
        self.stats = SimulationStats::default();
        log::info!("grid cleared");
    }

    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<()> {
        self.require_paused("toggle cell")?;
        self.grid.toggle(x, y)?;
        self.refresh_active_cells();
        Ok(())
    }

    pub fn kill_cell(&mut self, x: usize, y: usize) -> Result<()> {
        self.require_paused("kill cell")?;
        self.grid.set(x, y, false)?;
        self.refresh_active_cells();
        Ok(())
    }

    /// Stamp a preset with its anchor at `(x, y)`; the generation is kept
    pub fn load_pattern(&mut self, id: &str, x: usize, y: usize) -> Result<()> {
        self.require_paused("load pattern")?;
        self.library.get(id)?;
        self.grid.get(x, y)?;
        self.library.stamp(&mut self.grid, id, x, y)?;
        self.refresh_active_cells();
        Ok(())
    }

    /// Dispatch a command from the presentation layer
    pub fn apply(&mut self, command: &Command) -> Result<()> {
        log::debug!("command {:?}", command);
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Step => self.step()?,
            Command::Clear => self.clear(),
            Command::ToggleCell { x, y } => self.toggle_cell(*x, *y)?,
            Command::KillCell { x, y } => self.kill_cell(*x, *y)?,
            Command::LoadPattern { id, x, y } => self.load_pattern(id, *x, *y)?,
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.grid, self.stats.generation)
    }

    /// Replace grid and generation from a snapshot of the same dimensions
    pub fn restore(&mut self, snapshot: &Snapshot) -> std::result::Result<(), SnapshotError> {
        self.require_paused("restore snapshot")?;
        let (width, height) = self.grid.dimensions();
        if (snapshot.width, snapshot.height) != (width, height) {
            return Err(SnapshotError::DimensionMismatch {
                width,
                height,
                found_width: snapshot.width,
                found_height: snapshot.height,
            });
        }
        self.grid = snapshot.to_grid()?;
        self.stats.generation = snapshot.generation;
        self.refresh_active_cells();
        Ok(())
    }
}

impl Default for SimulationController {
    fn default() -> Self {
        Self::new()
    }
}
