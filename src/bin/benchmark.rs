//! Performance benchmark comparing the serial and row-parallel rule passes

use std::time::Instant;

use life_heatmap::{EngineError, Grid, PatternLibrary, Strategy};

/// Grid of the given size seeded with a lattice of acorns and R-pentominoes
fn seeded_grid(size: usize, library: &PatternLibrary) -> Result<Grid, EngineError> {
    let mut grid = Grid::new(size, size);
    for y in (0..size).step_by(16) {
        for x in (0..size).step_by(16) {
            let id = if (x / 16 + y / 16) % 2 == 0 { "acorn" } else { "r_pentomino" };
            library.stamp(&mut grid, id, x, y)?;
        }
    }
    Ok(grid)
}

fn benchmark(
    strategy: Strategy,
    size: usize,
    iterations: u32,
    library: &PatternLibrary,
) -> Result<f64, EngineError> {
    let mut grid = seeded_grid(size, library)?;

    let start = Instant::now();
    for _ in 0..iterations {
        grid = strategy.next_generation(&grid);
    }
    Ok(start.elapsed().as_secs_f64() * 1000.0 / iterations as f64)
}

fn main() -> Result<(), EngineError> {
    println!("=== Game of Life Performance Benchmark ===\n");

    let library = PatternLibrary::new();
    let sizes = [120, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Rows+Par", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(Strategy::Serial, size, iterations, &library)?;
        let parallel_ms = benchmark(Strategy::ParallelRows, size, iterations, &library)?;
        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
    Ok(())
}
