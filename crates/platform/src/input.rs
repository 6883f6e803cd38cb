//! Input handling for keyboard and mouse.
//!
//! Window events are folded into an [`InputState`] as they arrive; the frame
//! loop reads it once per frame and then calls
//! [`begin_frame`](InputState::begin_frame) to clear the per-frame parts.

use std::collections::HashSet;

pub use winit::keyboard::KeyCode;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => MouseButton::Left,
            winit::event::MouseButton::Right => MouseButton::Right,
            winit::event::MouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

/// Tracks the current state of keyboard and mouse input.
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    pressed_keys: HashSet<KeyCode>,
    /// Keys that were just pressed this frame
    just_pressed_keys: HashSet<KeyCode>,

    /// Currently pressed mouse buttons
    pressed_buttons: HashSet<MouseButton>,

    /// Last known cursor position in window pixels
    mouse_position: Option<(f32, f32)>,
    /// Cursor movement accumulated this frame while the left button was held
    look_delta: (f32, f32),
    /// Next cursor event only re-anchors the position
    reanchor: bool,
    /// Scroll accumulated this frame
    scroll_delta: (f32, f32),

    close_requested: bool,
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the beginning of each frame to clear per-frame state.
    pub fn begin_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.look_delta = (0.0, 0.0);
        self.scroll_delta = (0.0, 0.0);
    }

    /// Handle a key press event. Auto-repeat presses are not new presses.
    pub fn on_key_pressed(&mut self, key: KeyCode) {
        if self.pressed_keys.insert(key) {
            self.just_pressed_keys.insert(key);
        }
    }

    /// Handle a key release event.
    pub fn on_key_released(&mut self, key: KeyCode) {
        self.pressed_keys.remove(&key);
    }

    /// Handle a mouse button press event.
    ///
    /// Pressing the left button re-anchors the cursor so the first motion
    /// after the press yields no look delta.
    pub fn on_mouse_pressed(&mut self, button: MouseButton) {
        if self.pressed_buttons.insert(button) {
            if button == MouseButton::Left {
                self.reanchor = true;
            }
        }
    }

    /// Handle a mouse button release event.
    pub fn on_mouse_released(&mut self, button: MouseButton) {
        self.pressed_buttons.remove(&button);
    }

    /// Handle mouse movement to absolute window coordinates.
    pub fn on_mouse_moved(&mut self, x: f32, y: f32) {
        let previous = self.mouse_position.replace((x, y));
        let Some(old) = previous else {
            return;
        };
        if self.reanchor {
            self.reanchor = false;
            return;
        }

        let delta = (x - old.0, y - old.1);
        if self.is_mouse_pressed(MouseButton::Left) {
            self.look_delta.0 += delta.0;
            self.look_delta.1 += delta.1;
        }
    }

    /// Handle mouse scroll, in lines.
    pub fn on_scroll(&mut self, delta_x: f32, delta_y: f32) {
        self.scroll_delta.0 += delta_x;
        self.scroll_delta.1 += delta_y;
    }

    /// Record a request to close the window (Escape or the close button).
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Check if a key is currently pressed.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Check if a key was just pressed this frame.
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Check if a mouse button is currently pressed.
    fn is_mouse_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Mouse-look offset for this frame: cursor movement while the left
    /// button is held, with y flipped so moving up is positive.
    pub fn look_delta(&self) -> (f32, f32) {
        (self.look_delta.0, -self.look_delta.1)
    }

    /// Get the scroll delta since last frame.
    pub fn scroll_delta(&self) -> (f32, f32) {
        self.scroll_delta
    }
}
