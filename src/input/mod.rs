use macroquad::prelude::*;

use crate::application::{Command, SimulationController};
use crate::ui::{Button, ButtonAction, cell_at};

/// Something the user asked for this frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Engine(Command),
    TogglePatternMenu,
    CloseMenu,
    Faster,
    Slower,
    SaveSnapshot,
    Quit,
}

impl From<ButtonAction> for Action {
    fn from(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Start => Action::Engine(Command::Start),
            ButtonAction::Stop => Action::Engine(Command::Stop),
            ButtonAction::Step => Action::Engine(Command::Step),
            ButtonAction::Clear => Action::Engine(Command::Clear),
            ButtonAction::Patterns => Action::TogglePatternMenu,
            ButtonAction::Quit => Action::Quit,
        }
    }
}

/// Keyboard shortcut table; Space depends on the run state
pub fn key_action(key: KeyCode, running: bool) -> Option<Action> {
    let action = match key {
        KeyCode::Space if running => Action::Engine(Command::Stop),
        KeyCode::Space => Action::Engine(Command::Start),
        KeyCode::N => Action::Engine(Command::Step),
        KeyCode::C => Action::Engine(Command::Clear),
        KeyCode::P => Action::TogglePatternMenu,
        KeyCode::Escape => Action::CloseMenu,
        KeyCode::Up => Action::Faster,
        KeyCode::Down => Action::Slower,
        KeyCode::S => Action::SaveSnapshot,
        KeyCode::Q => Action::Quit,
        _ => return None,
    };
    Some(action)
}

const SHORTCUT_KEYS: [KeyCode; 9] = [
    KeyCode::Space,
    KeyCode::N,
    KeyCode::C,
    KeyCode::P,
    KeyCode::Escape,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Q,
];

/// Keys still honored while the pattern menu is open
const MENU_KEYS: [KeyCode; 2] = [KeyCode::P, KeyCode::Escape];

/// Shortcut for `key`, given whether the modal pattern menu is open
pub fn shortcut_action(key: KeyCode, running: bool, menu_open: bool) -> Option<Action> {
    if menu_open && !MENU_KEYS.contains(&key) {
        return None;
    }
    key_action(key, running)
}

/// Actions for keys pressed this frame
pub fn process_keyboard_input(running: bool, menu_open: bool) -> Vec<Action> {
    SHORTCUT_KEYS
        .iter()
        .filter(|&&key| is_key_pressed(key))
        .filter_map(|&key| shortcut_action(key, running, menu_open))
        .collect()
}

/// Actions for panel buttons clicked this frame
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Action> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(|btn| Action::from(btn.action))
        .collect()
}

/// Left click toggles a cell, holding the right button kills cells.
/// Edits are only issued while paused.
pub fn handle_mouse_edit(controller: &SimulationController, mouse_pos: (f32, f32)) -> Option<Action> {
    if controller.is_running() {
        return None;
    }
    let (x, y) = cell_at(mouse_pos)?;

    if is_mouse_button_pressed(MouseButton::Left) {
        Some(Action::Engine(Command::ToggleCell { x, y }))
    } else if is_mouse_button_down(MouseButton::Right) && controller.cell(x, y).unwrap_or(false) {
        Some(Action::Engine(Command::KillCell { x, y }))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_follows_run_state() {
        assert_eq!(key_action(KeyCode::Space, false), Some(Action::Engine(Command::Start)));
        assert_eq!(key_action(KeyCode::Space, true), Some(Action::Engine(Command::Stop)));
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(key_action(KeyCode::Z, false), None);
    }

    #[test]
    fn test_open_menu_captures_engine_keys() {
        for key in [KeyCode::Space, KeyCode::N, KeyCode::C, KeyCode::Up, KeyCode::S, KeyCode::Q] {
            assert_eq!(shortcut_action(key, false, true), None, "{:?}", key);
            assert_eq!(shortcut_action(key, true, true), None, "{:?}", key);
        }
        assert_eq!(shortcut_action(KeyCode::P, false, true), Some(Action::TogglePatternMenu));
        assert_eq!(shortcut_action(KeyCode::Escape, true, true), Some(Action::CloseMenu));
    }

    #[test]
    fn test_closed_menu_passes_all_shortcuts() {
        for key in SHORTCUT_KEYS {
            assert_eq!(shortcut_action(key, false, false), key_action(key, false));
        }
    }

    #[test]
    fn test_button_actions() {
        assert_eq!(Action::from(ButtonAction::Step), Action::Engine(Command::Step));
        assert_eq!(Action::from(ButtonAction::Patterns), Action::TogglePatternMenu);
        assert_eq!(Action::from(ButtonAction::Quit), Action::Quit);
    }
}
