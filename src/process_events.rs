use raylib::prelude::*;
use crate::core::game::FrameInput;

/// Samples keyboard and mouse for this frame.
pub fn process_events(window: &RaylibHandle) -> FrameInput {
    FrameInput {
        quit: window.window_should_close(),
        jump_pressed: window.is_key_pressed(KeyboardKey::KEY_UP),
        click_pressed: window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        escape_pressed: window.is_key_pressed(KeyboardKey::KEY_ESCAPE),
        left: window.is_key_down(KeyboardKey::KEY_LEFT),
        right: window.is_key_down(KeyboardKey::KEY_RIGHT),
        up: window.is_key_down(KeyboardKey::KEY_UP),
        down: window.is_key_down(KeyboardKey::KEY_DOWN),
    }
}
