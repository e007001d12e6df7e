use macroquad::prelude::*;

use super::{grid_area_height, window_width};
use crate::domain::{Category, PatternLibrary};

const MENU_INSET: f32 = 40.0;
const HEADER_HEIGHT: f32 = 60.0;
const ITEM_HEIGHT: f32 = 26.0;

#[derive(Clone)]
struct MenuEntry {
    id: &'static str,
    name: &'static str,
    rect: Rect,
}

/// Modal pattern picker: one column per category
#[derive(Clone)]
pub struct PatternMenu {
    rect: Rect,
    headers: Vec<(Category, Rect)>,
    entries: Vec<MenuEntry>,
    is_open: bool,
}

impl PatternMenu {
    pub fn new(library: &PatternLibrary) -> Self {
        let rect = Rect::new(
            MENU_INSET,
            MENU_INSET,
            window_width() - 2.0 * MENU_INSET,
            grid_area_height() - 2.0 * MENU_INSET,
        );
        let categories = Category::all();
        let column_width = rect.w / categories.len() as f32;

        let mut headers = Vec::with_capacity(categories.len());
        let mut entries = Vec::with_capacity(library.len());
        for (column, category) in categories.into_iter().enumerate() {
            let x = rect.x + column as f32 * column_width;
            headers.push((category, Rect::new(x, rect.y + 20.0, column_width, ITEM_HEIGHT)));
            for (row, pattern) in library.in_category(category).enumerate() {
                entries.push(MenuEntry {
                    id: pattern.id,
                    name: pattern.name,
                    rect: Rect::new(
                        x + 8.0,
                        rect.y + HEADER_HEIGHT + row as f32 * ITEM_HEIGHT,
                        column_width - 16.0,
                        ITEM_HEIGHT,
                    ),
                });
            }
        }

        Self { rect, headers, entries, is_open: false }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Pattern id of the entry under the cursor
    pub fn hit_test(&self, mouse_pos: (f32, f32)) -> Option<&'static str> {
        let point = vec2(mouse_pos.0, mouse_pos.1);
        self.entries
            .iter()
            .find(|entry| entry.rect.contains(point))
            .map(|entry| entry.id)
    }

    /// Handle a click while open. Returns the chosen pattern id; clicking
    /// outside the menu closes it.
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> Option<&'static str> {
        if !self.is_open || !is_mouse_button_pressed(MouseButton::Left) {
            return None;
        }
        let chosen = self.hit_test(mouse_pos);
        if chosen.is_some() || !self.rect.contains(vec2(mouse_pos.0, mouse_pos.1)) {
            self.is_open = false;
        }
        chosen
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        if !self.is_open {
            return;
        }
        let Rect { x, y, w, h } = self.rect;
        draw_rectangle(x, y, w, h, Color::from_rgba(100, 100, 100, 240));
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        for (category, header) in &self.headers {
            draw_text(category.label(), header.x + 8.0, header.y + 18.0, 22.0, YELLOW);
        }

        let hovered = self.hit_test(mouse_pos);
        for entry in &self.entries {
            if hovered == Some(entry.id) {
                let r = entry.rect;
                draw_rectangle(r.x, r.y, r.w, r.h, Color::from_rgba(70, 130, 180, 255));
            }
            draw_text(entry.name, entry.rect.x + 4.0, entry.rect.y + 18.0, 18.0, WHITE);
        }
    }
}
