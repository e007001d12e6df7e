//! Rule application: builds the next generation from a frozen snapshot.
//!
//! Every cell of the output is computed from the same input grid, so no
//! cell's new state can leak into a neighbor's computation.

use rayon::prelude::*;

use super::{Cell, Grid, neighbors};

fn next_row(grid: &Grid, y: usize) -> impl Iterator<Item = Cell> + '_ {
    grid.row(y)
        .iter()
        .enumerate()
        .map(move |(x, &current)| current.evolve(neighbors::count(grid, x, y)))
}

/// Pure functional evolution - returns new grid (serial)
pub fn next_generation(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let cells = (0..height).flat_map(|y| next_row(grid, y)).collect();
    Grid::from_cells(width, height, cells)
}

/// Same result as [`next_generation`], with rows split across rayon workers.
/// Workers read only the input snapshot and each writes only its own row.
pub fn next_generation_parallel(grid: &Grid) -> Grid {
    let (width, height) = grid.dimensions();
    let mut cells = vec![Cell::Dead; width * height];
    if width > 0 {
        cells
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                row.iter_mut()
                    .zip(next_row(grid, y))
                    .for_each(|(slot, next)| *slot = next);
            });
    }
    Grid::from_cells(width, height, cells)
}
