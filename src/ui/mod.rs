mod button;
mod pattern_menu;
mod status;

pub use button::{Button, ButtonAction};
pub use pattern_menu::PatternMenu;
pub use status::StatusLine;

use crate::domain::{HEIGHT, Pattern, WIDTH};

// Fixed layout: the window is sized to the grid plus a button panel
pub const CELL_SIZE: f32 = 8.0;
pub const MARGIN: f32 = 1.0;
pub const CELL_PITCH: f32 = CELL_SIZE + MARGIN;
pub const BUTTON_PANEL_HEIGHT: f32 = 50.0;
pub const BUTTON_WIDTH: f32 = 100.0;
pub const BUTTON_HEIGHT: f32 = 30.0;
pub const BUTTON_MARGIN: f32 = 10.0;

/// Width of the grid area in pixels
pub const fn grid_area_width() -> f32 {
    WIDTH as f32 * CELL_PITCH + MARGIN
}

/// Height of the grid area in pixels
pub const fn grid_area_height() -> f32 {
    HEIGHT as f32 * CELL_PITCH + MARGIN
}

pub const fn window_width() -> f32 {
    grid_area_width()
}

pub const fn window_height() -> f32 {
    grid_area_height() + BUTTON_PANEL_HEIGHT
}

/// Top-left pixel of a cell
pub fn cell_origin(x: usize, y: usize) -> (f32, f32) {
    (x as f32 * CELL_PITCH + MARGIN, y as f32 * CELL_PITCH + MARGIN)
}

/// Grid cell under a screen position, if any
pub fn cell_at(mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let (mx, my) = mouse_pos;
    if mx < 0.0 || my < 0.0 || my >= grid_area_height() {
        return None;
    }
    let x = (mx / CELL_PITCH) as usize;
    let y = (my / CELL_PITCH) as usize;
    (x < WIDTH && y < HEIGHT).then_some((x, y))
}

/// Anchor that centers `pattern` on the grid
pub fn centered_origin(pattern: &Pattern) -> (usize, usize) {
    (
        WIDTH.saturating_sub(pattern.width) / 2,
        HEIGHT.saturating_sub(pattern.height) / 2,
    )
}

/// Buttons for the current run state, centered in the bottom panel.
/// Start is shown while paused, Stop while running.
pub fn create_buttons(running: bool) -> Vec<Button> {
    let actions = [
        if running { ButtonAction::Stop } else { ButtonAction::Start },
        ButtonAction::Step,
        ButtonAction::Clear,
        ButtonAction::Patterns,
        ButtonAction::Quit,
    ];
    let count = actions.len() as f32;
    let total_width = count * BUTTON_WIDTH + (count - 1.0) * BUTTON_MARGIN;
    let start_x = (window_width() - total_width) / 2.0;
    let y = grid_area_height() + (BUTTON_PANEL_HEIGHT - BUTTON_HEIGHT) / 2.0;

    actions
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            let x = start_x + i as f32 * (BUTTON_WIDTH + BUTTON_MARGIN);
            Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, action)
        })
        .collect()
}
