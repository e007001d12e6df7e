use macroquad::prelude::*;

use crate::application::{SimulationController, Ticker};
use crate::domain::neighbors;
use crate::ui::{Button, CELL_SIZE, PatternMenu, cell_origin, grid_area_height, window_height, window_width};

const BACKGROUND: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const DEAD_CELL: Color = Color::new(0.0, 0.0, 139.0 / 255.0, 1.0);
const PANEL_TEXT: Color = WHITE;

/// How crowded a live cell is, from its neighbor count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crowding {
    /// 0-1 neighbors: dies next generation
    Lonely,
    /// 2-3 neighbors: survives
    Stable,
    /// 4+ neighbors: dies next generation
    Crowded,
}

impl Crowding {
    pub const fn from_neighbors(neighbors: u8) -> Self {
        match neighbors {
            0 | 1 => Crowding::Lonely,
            2 | 3 => Crowding::Stable,
            _ => Crowding::Crowded,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Crowding::Lonely => Color::from_rgba(0, 255, 255, 255),
            Crowding::Stable => Color::from_rgba(0, 255, 0, 255),
            Crowding::Crowded => Color::from_rgba(255, 69, 0, 255),
        }
    }
}

/// Draw every cell: dead cells dark blue, live cells colored by crowding
pub fn draw_grid(controller: &SimulationController) {
    clear_background(BACKGROUND);
    let grid = controller.grid();

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = cell_origin(x, y);
        let color = if cell.is_alive() {
            Crowding::from_neighbors(neighbors::count(grid, x, y)).color()
        } else {
            DEAD_CELL
        };
        draw_rectangle(sx, sy, CELL_SIZE, CELL_SIZE, color);
    }
}

/// Draw the bottom panel: stats, speed, buttons and the last status message
pub fn draw_controls(
    controller: &SimulationController,
    ticker: &Ticker,
    buttons: &[Button],
    status: Option<&str>,
    mouse_pos: (f32, f32),
) {
    let panel_top = grid_area_height();
    let stats = controller.stats();

    draw_text(
        &format!("Gen: {}  Cells: {}", stats.generation, stats.active_cells),
        10.0,
        panel_top + 22.0,
        20.0,
        PANEL_TEXT,
    );
    draw_text(
        &format!("{:.0} gen/s  {}", ticker.steps_per_second, controller.strategy().name()),
        10.0,
        panel_top + 40.0,
        16.0,
        Color::from_rgba(200, 200, 200, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    if let Some(message) = status {
        let size = measure_text(message, None, 16, 1.0);
        draw_text(
            message,
            window_width() - size.width - 10.0,
            panel_top + 30.0,
            16.0,
            Color::from_rgba(255, 200, 0, 255),
        );
    }

    // White border marks edit mode
    if !controller.is_running() {
        draw_rectangle_lines(0.0, 0.0, window_width(), window_height(), 2.0, WHITE);
    }
}

/// Draw the pattern picker on top of everything else
pub fn draw_pattern_menu(menu: &PatternMenu, mouse_pos: (f32, f32)) {
    menu.draw(mouse_pos);
}
