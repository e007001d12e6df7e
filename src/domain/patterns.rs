use super::{EngineError, Grid, error::Result};

/// Grouping used to order the library for presentation
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Oscillator,
    Spaceship,
    StillLife,
    GunOrPuffer,
    Chaotic,
}

impl Category {
    pub fn all() -> [Category; 5] {
        [
            Category::Oscillator,
            Category::Spaceship,
            Category::StillLife,
            Category::GunOrPuffer,
            Category::Chaotic,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Oscillator => "Oscillators",
            Category::Spaceship => "Spaceships",
            Category::StillLife => "Still lifes",
            Category::GunOrPuffer => "Guns & puffers",
            Category::Chaotic => "Chaotic",
        }
    }
}

/// A named set of live-cell offsets relative to an anchor origin
#[derive(Clone, Debug)]
pub struct Pattern {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(i32, i32)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(
        id: &'static str,
        name: &'static str,
        category: Category,
        description: &'static str,
        cells: Vec<(i32, i32)>,
    ) -> Self {
        let width = cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0).max(0) as usize;
        let height = cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0).max(0) as usize;
        Self { id, name, category, description, width, height, cells }
    }

    /// Create a pattern from a plaintext picture: `O` is alive, anything else dead.
    /// Rows are separated by newlines; leading blank lines are ignored.
    pub fn from_picture(
        id: &'static str,
        name: &'static str,
        category: Category,
        description: &'static str,
        picture: &str,
    ) -> Self {
        let cells = picture
            .trim_matches('\n')
            .lines()
            .enumerate()
            .flat_map(|(y, line)| {
                line.trim()
                    .chars()
                    .enumerate()
                    .filter(|&(_, ch)| ch == 'O')
                    .map(move |(x, _)| (x as i32, y as i32))
            })
            .collect();
        Self::new(id, name, category, description, cells)
    }

    /// Number of live cells in the pattern
    pub fn population(&self) -> usize {
        self.cells.len()
    }

    /// Write the pattern's live cells at `(x, y)`, returning how many offsets
    /// landed outside the grid and were skipped. Nothing is cleared first.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) -> usize {
        let mut clipped = 0;
        for &(dx, dy) in &self.cells {
            let target = x
                .checked_add_signed(dx as isize)
                .zip(y.checked_add_signed(dy as isize));
            let placed = match target {
                Some((cx, cy)) => grid.set(cx, cy, true).is_ok(),
                None => false,
            };
            if !placed {
                clipped += 1;
            }
        }
        clipped
    }
}

/// The fixed set of preset patterns, grouped by category
#[derive(Clone, Debug)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self { patterns: presets::all_patterns() }
    }

    /// All patterns in presentation order
    pub fn list(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by id
    pub fn get(&self, id: &str) -> Result<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| EngineError::UnknownPattern(id.to_owned()))
    }

    /// Patterns of one category, in library order
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(move |p| p.category == category)
    }

    /// Stamp pattern `id` onto `grid` with its anchor at `(x, y)`
    pub fn stamp(&self, grid: &mut Grid, id: &str, x: usize, y: usize) -> Result<()> {
        let pattern = self.get(id)?;
        let clipped = pattern.place_on(grid, x, y);
        log::debug!("stamped '{}' at ({}, {}), {} cells clipped", pattern.id, x, y, clipped);
        Ok(())
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    const GOSPER_GLIDER_GUN: &str = "
........................O...........
......................O.O...........
............OO......OO............OO
...........O...O....OO............OO
OO........O.....O...OO..............
OO........O...O.OO....O.O...........
..........O.....O.......O...........
...........O...O....................
............OO......................
";

    const PULSAR: &str = "
..OOO...OOO..
.............
O....O.O....O
O....O.O....O
O....O.O....O
..OOO...OOO..
.............
..OOO...OOO..
O....O.O....O
O....O.O....O
O....O.O....O
.............
..OOO...OOO..
";

    fn oscillators() -> Vec<Pattern> {
        use super::Category::Oscillator as C;
        vec![
            Pattern::from_picture("blinker", "Blinker", C, "Period 2", "OOO"),
            Pattern::from_picture("toad", "Toad", C, "Period 2", ".OOO\nOOO."),
            Pattern::from_picture("beacon", "Beacon", C, "Period 2", "OO..\nOO..\n..OO\n..OO"),
            Pattern::from_picture("pulsar", "Pulsar", C, "Period 3", PULSAR),
            Pattern::from_picture(
                "pentadecathlon",
                "Pentadecathlon",
                C,
                "Period 15",
                "..O....O..\nOO.OOOO.OO\n..O....O..",
            ),
            Pattern::from_picture("clock", "Clock", C, "Period 2", "..O.\nO.O.\n.O.O\n.O.."),
        ]
    }

    fn spaceships() -> Vec<Pattern> {
        use super::Category::Spaceship as C;
        vec![
            Pattern::from_picture("glider", "Glider", C, "Moves (+1, +1) every 4 generations", ".O.\n..O\nOOO"),
            Pattern::from_picture(
                "lwss",
                "Lightweight spaceship",
                C,
                "Moves 2 cells left every 4 generations",
                ".O..O\nO....\nO...O\nOOOO.",
            ),
            Pattern::from_picture(
                "mwss",
                "Middleweight spaceship",
                C,
                "Moves 2 cells left every 4 generations",
                "...O..\n.O...O\nO.....\nO....O\nOOOOO.",
            ),
            Pattern::from_picture(
                "hwss",
                "Heavyweight spaceship",
                C,
                "Moves 2 cells left every 4 generations",
                "...OO..\n.O....O\nO......\nO.....O\nOOOOOO.",
            ),
        ]
    }

    fn still_lifes() -> Vec<Pattern> {
        use super::Category::StillLife as C;
        vec![
            Pattern::from_picture("block", "Block", C, "Still life", "OO\nOO"),
            Pattern::from_picture("tub", "Tub", C, "Still life", ".O.\nO.O\n.O."),
            Pattern::from_picture("beehive", "Beehive", C, "Still life", ".OO.\nO..O\n.OO."),
            Pattern::from_picture("loaf", "Loaf", C, "Still life", ".OO.\nO..O\n.O.O\n..O."),
            Pattern::from_picture("boat", "Boat", C, "Still life", "OO.\nO.O\n.O."),
            Pattern::from_picture("pond", "Pond", C, "Still life", ".OO.\nO..O\nO..O\n.OO."),
            Pattern::from_picture("ship", "Ship", C, "Still life", "OO.\nO.O\n.OO"),
            Pattern::from_picture(
                "aircraft_carrier",
                "Aircraft carrier",
                C,
                "Still life",
                "OO..\nO..O\n..OO",
            ),
        ]
    }

    fn guns_and_puffers() -> Vec<Pattern> {
        use super::Category::GunOrPuffer as C;
        vec![
            Pattern::from_picture(
                "gosper_glider_gun",
                "Gosper glider gun",
                C,
                "Emits a glider every 30 generations",
                GOSPER_GLIDER_GUN,
            ),
            Pattern::from_picture(
                "switch_engine",
                "Switch engine",
                C,
                "Unstable puffer",
                ".O.O..\nO.....\n.O..O.\n...OOO",
            ),
            Pattern::from_picture(
                "infinite_growth",
                "Infinite growth",
                C,
                "Ten cells that grow without bound",
                "......O.\n....O.OO\n....O.O.\n....O...\n..O.....\nO.O.....",
            ),
        ]
    }

    fn chaotic() -> Vec<Pattern> {
        use super::Category::Chaotic as C;
        vec![
            Pattern::from_picture("r_pentomino", "R-pentomino", C, "Methuselah, 1103 generations", ".OO\nOO.\n.O."),
            Pattern::from_picture("pi_heptomino", "Pi-heptomino", C, "Methuselah", "OOO\nO.O\nO.O"),
            Pattern::from_picture("b_heptomino", "B-heptomino", C, "Methuselah", "O.OO\nOOO.\n.O.."),
            Pattern::from_picture(
                "acorn",
                "Acorn",
                C,
                "Methuselah, 5206 generations",
                ".O.....\n...O...\nOO..OOO",
            ),
            Pattern::from_picture(
                "die_hard",
                "Die hard",
                C,
                "Vanishes after 130 generations",
                "......O.\nOO......\n.O...OOO",
            ),
            Pattern::from_picture("thunderbird", "Thunderbird", C, "Methuselah", "OOO\n...\n.O.\n.O.\n.O."),
            Pattern::from_picture("rabbits", "Rabbits", C, "Methuselah", "O...OOO\nOOO..O.\n.O....."),
        ]
    }

    /// Get all available patterns, grouped by category
    pub fn all_patterns() -> Vec<Pattern> {
        [oscillators(), spaceships(), still_lifes(), guns_and_puffers(), chaotic()]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_library_has_28_patterns() {
        assert_eq!(PatternLibrary::new().len(), 28);
    }

    #[test]
    fn test_ids_are_unique() {
        let library = PatternLibrary::new();
        let ids: HashSet<_> = library.list().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), library.len());
    }

    #[test]
    fn test_grouped_by_category() {
        let library = PatternLibrary::new();
        let categories: Vec<_> = library.list().iter().map(|p| p.category).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        for category in Category::all() {
            assert!(library.in_category(category).count() > 0);
        }
    }

    #[test]
    fn test_from_picture_offsets() {
        let glider = Pattern::from_picture("g", "G", Category::Spaceship, "", "\n.O.\n..O\nOOO\n");
        assert_eq!(glider.cells, vec![(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        assert_eq!((glider.width, glider.height), (3, 3));
    }

    #[test]
    fn test_gosper_gun_dimensions() {
        let library = PatternLibrary::new();
        let gun = library.get("gosper_glider_gun").unwrap();
        assert_eq!(gun.population(), 36);
        assert_eq!((gun.width, gun.height), (36, 9));
    }

    #[test]
    fn test_pulsar_population() {
        let library = PatternLibrary::new();
        let pulsar = library.get("pulsar").unwrap();
        assert_eq!(pulsar.population(), 48);
        assert_eq!((pulsar.width, pulsar.height), (13, 13));
    }

    #[test]
    fn test_stamp_is_additive() {
        let library = PatternLibrary::new();
        let mut grid = Grid::standard();
        grid.set(0, 0, true).unwrap();
        library.stamp(&mut grid, "block", 10, 10).unwrap();
        assert_eq!(grid.count_alive(), 5);
        assert!(grid.get(0, 0).unwrap());
        assert!(grid.get(11, 11).unwrap());
    }

    #[test]
    fn test_stamp_clips_out_of_bounds() {
        let library = PatternLibrary::new();
        let mut grid = Grid::new(10, 10);
        // Block anchored on the last cell: only its top-left cell fits
        library.stamp(&mut grid, "block", 9, 9).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(9, 9)]);
    }

    #[test]
    fn test_place_on_reports_clipped_cells() {
        let library = PatternLibrary::new();
        let glider = library.get("glider").unwrap();

        let mut grid = Grid::new(10, 10);
        assert_eq!(glider.place_on(&mut grid, 2, 2), 0);
        assert_eq!(grid.count_alive(), 5);

        // Only the glider's top row cell at offset (1, 0) fits
        let mut grid = Grid::new(10, 10);
        assert_eq!(glider.place_on(&mut grid, 8, 9), 4);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(9, 9)]);

        let mut grid = Grid::new(10, 10);
        assert_eq!(glider.place_on(&mut grid, 20, 20), glider.population());
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_stamp_unknown_pattern() {
        let library = PatternLibrary::new();
        let mut grid = Grid::standard();
        grid.set(5, 5, true).unwrap();
        let before = grid.clone();
        assert_eq!(
            library.stamp(&mut grid, "nonexistent-id", 0, 0),
            Err(EngineError::UnknownPattern("nonexistent-id".to_owned()))
        );
        assert_eq!(grid, before);
    }
}
