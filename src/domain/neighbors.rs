//! Live-neighbor counting over a fixed, non-wrapping Moore neighborhood.
//!
//! Positions outside the grid count as permanently dead. The grid is never
//! treated as a torus.

use super::Grid;

/// The 8 offsets around a cell, row by row
#[rustfmt::skip]
pub const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Number of live neighbors of `(x, y)`, in `0..=8`
pub fn count(grid: &Grid, x: usize, y: usize) -> u8 {
    MOORE_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            grid.cell(nx, ny)
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: usize, height: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, true).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_interior_cell_sees_eight() {
        let grid = filled(5, 5);
        assert_eq!(count(&grid, 2, 2), 8);
    }

    #[test]
    fn test_corner_sees_three() {
        let grid = filled(5, 5);
        assert_eq!(count(&grid, 0, 0), 3);
        assert_eq!(count(&grid, 4, 4), 3);
        assert_eq!(count(&grid, 4, 0), 3);
    }

    #[test]
    fn test_edge_sees_five() {
        let grid = filled(5, 5);
        assert_eq!(count(&grid, 2, 0), 5);
        assert_eq!(count(&grid, 0, 2), 5);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Grid::new(10, 10);
        // Cells on the opposite edges of (0, 0) would be neighbors on a torus
        grid.set(9, 0, true).unwrap();
        grid.set(0, 9, true).unwrap();
        grid.set(9, 9, true).unwrap();
        assert_eq!(count(&grid, 0, 0), 0);
    }

    #[test]
    fn test_self_not_counted() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true).unwrap();
        assert_eq!(count(&grid, 1, 1), 0);
        assert_eq!(count(&grid, 0, 0), 1);
    }
}
