use super::{Cell, EngineError, HEIGHT, WIDTH, error::Result};

/// Grid owns the 2D cell matrix of one generation.
/// Stepping never mutates a grid; the rule engine builds a fresh one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Empty grid with the engine's fixed dimensions
    pub fn standard() -> Self {
        Self::new(WIDTH, HEIGHT)
    }

    /// Build a grid from row-major cells. Caller guarantees the length.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize> {
        if self.contains(x, y) {
            Ok(self.get_index(x, y))
        } else {
            Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Cell at position, `None` outside the grid
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        self.contains(x, y).then(|| self.cells[self.get_index(x, y)])
    }

    /// Whether the cell at position is alive
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        let idx = self.check_bounds(x, y)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Set the cell at position alive or dead
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Flip the cell at position, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        let idx = self.check_bounds(x, y)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(self.cells[idx].is_alive())
    }

    /// Count of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Row-major slice of one row
    pub(crate) fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Positions of all live cells, row-major
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
