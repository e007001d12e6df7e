use std::collections::BTreeSet;

use life_heatmap::domain::{Category, rules};
use life_heatmap::{Grid, PatternLibrary};

/// Grid holding one pattern placed well away from the edges
fn isolated(library: &PatternLibrary, id: &str) -> Grid {
    let mut grid = Grid::standard();
    library.stamp(&mut grid, id, 50, 30).unwrap();
    grid
}

fn run(grid: &Grid, generations: usize) -> Grid {
    (0..generations).fold(grid.clone(), |g, _| rules::next_generation(&g))
}

/// Live cells shifted so the bounding box starts at (0, 0), plus that shift
fn normalized(grid: &Grid) -> (BTreeSet<(usize, usize)>, (usize, usize)) {
    let cells: Vec<_> = grid.live_cells().collect();
    let min_x = cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
    let shape = cells.iter().map(|&(x, y)| (x - min_x, y - min_y)).collect();
    (shape, (min_x, min_y))
}

#[test]
fn still_lifes_are_fixed_points() {
    let library = PatternLibrary::new();
    for pattern in library.in_category(Category::StillLife) {
        let grid = isolated(&library, pattern.id);
        assert_eq!(rules::next_generation(&grid), grid, "{} changed", pattern.id);
    }
}

#[test]
fn oscillators_return_after_their_period() {
    let library = PatternLibrary::new();
    let periods = [
        ("blinker", 2),
        ("toad", 2),
        ("beacon", 2),
        ("clock", 2),
        ("pulsar", 3),
        ("pentadecathlon", 15),
    ];
    for (id, period) in periods {
        let grid = isolated(&library, id);
        for generation in 1..period {
            assert_ne!(run(&grid, generation), grid, "{} repeated early", id);
        }
        assert_eq!(run(&grid, period), grid, "{} period", id);
    }
    assert_eq!(library.in_category(Category::Oscillator).count(), periods.len());
}

#[test]
fn glider_moves_diagonally() {
    let library = PatternLibrary::new();
    let grid = isolated(&library, "glider");
    let (shape, (x, y)) = normalized(&grid);

    let later = run(&grid, 4);
    let (moved_shape, (mx, my)) = normalized(&later);
    assert_eq!(moved_shape, shape);
    assert_eq!((mx, my), (x + 1, y + 1));
    assert_eq!(later.dimensions(), grid.dimensions());
}

#[test]
fn spaceships_translate_every_four_generations() {
    let library = PatternLibrary::new();
    for id in ["lwss", "mwss", "hwss"] {
        let grid = isolated(&library, id);
        let (shape, (x, y)) = normalized(&grid);
        let (moved_shape, offset) = normalized(&run(&grid, 4));
        assert_eq!(moved_shape, shape, "{} shape", id);
        assert_eq!(offset, (x - 2, y), "{} displacement", id);
    }
}

#[test]
fn glider_gun_emits_a_glider() {
    let library = PatternLibrary::new();
    let mut grid = Grid::standard();
    library.stamp(&mut grid, "gosper_glider_gun", 10, 10).unwrap();
    assert_eq!(grid.count_alive(), 36);
    assert_eq!(run(&grid, 30).count_alive(), 41);
}

#[test]
fn die_hard_vanishes() {
    let library = PatternLibrary::new();
    let grid = isolated(&library, "die_hard");
    assert!(run(&grid, 129).count_alive() > 0);
    assert_eq!(run(&grid, 130).count_alive(), 0);
}

#[test]
fn stamp_near_corner_clips() {
    let library = PatternLibrary::new();
    let mut grid = Grid::standard();
    library.stamp(&mut grid, "pulsar", 110, 70).unwrap();
    let pulsar = library.get("pulsar").unwrap();
    let expected = pulsar
        .cells
        .iter()
        .filter(|&&(dx, dy)| 110 + (dx as usize) < 120 && 70 + (dy as usize) < 80)
        .count();
    assert_eq!(grid.count_alive(), expected);
    assert!(expected < pulsar.population());
}
