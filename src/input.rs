//! Keyboard state to paddle intent
//!
//! Key state comes from `winit_input_helper`, which tracks held keys between
//! frames. Each frame the held keys collapse into a [`TickInput`].

use winit::keyboard::KeyCode;
use winit_input_helper::WinitInputHelper;

use crate::sim::TickInput;

/// Keys that move the paddle left while held
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::ArrowLeft, KeyCode::KeyA];
/// Keys that move the paddle right while held
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::ArrowRight, KeyCode::KeyD];
/// Keys that close the game
pub const QUIT_KEYS: [KeyCode; 1] = [KeyCode::Escape];

/// Build the tick input from a "is this key held" query
pub fn map_keys(held: impl Fn(KeyCode) -> bool) -> TickInput {
    TickInput {
        move_left: LEFT_KEYS.iter().any(|&key| held(key)),
        move_right: RIGHT_KEYS.iter().any(|&key| held(key)),
        quit: QUIT_KEYS.iter().any(|&key| held(key)),
    }
}

/// Read this frame's input from the winit input helper
pub fn read(input: &WinitInputHelper) -> TickInput {
    map_keys(|key| input.key_held(key))
}
