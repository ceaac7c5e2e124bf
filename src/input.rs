//! One tick's worth of polled input.
//!
//! The collaborator only reports held-state; press edges for the one-shot
//! actions are derived in `player` from held-state plus the owning flag.

use macroquad::prelude::{is_key_down, is_mouse_button_down, KeyCode, MouseButton};

#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub run: bool,
    pub jump: bool,
    pub shoot: bool,
    pub attack: bool,
}

impl InputFrame {
    /// Capture the current keyboard/mouse state.
    pub fn poll() -> Self {
        InputFrame {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            run: is_key_down(KeyCode::LeftShift),
            jump: is_key_down(KeyCode::Space),
            shoot: is_mouse_button_down(MouseButton::Left),
            attack: is_mouse_button_down(MouseButton::Right),
        }
    }
}
