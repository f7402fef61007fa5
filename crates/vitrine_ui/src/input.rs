//! Pointer input consumed by click dispatch.
//!
//! The backend feeds raw pointer events into an [`InputState`] once per
//! frame; the compositor reads it through the [`PointerSource`] seam.

use crate::geometry::Point;

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Read-only view of pointer input for the current frame.
pub trait PointerSource {
    /// Current pointer position in screen coordinates.
    fn pointer_position(&self) -> Point;

    /// Returns true only on the frame the button transitioned to released.
    fn just_released(&self, button: MouseButton) -> bool;
}

/// Pointer state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position.
    position: Point,
    /// Mouse buttons released this frame.
    buttons_released: u8,
    /// Mouse buttons currently held.
    buttons_down: u8,
}

impl InputState {
    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame edges.
    pub fn begin_frame(&mut self) {
        self.buttons_released = 0;
    }

    /// Updates pointer position.
    pub fn set_mouse_pos(&mut self, x: f32, y: f32) {
        self.position = Point::new(x, y);
    }

    /// Records a mouse button press.
    pub fn mouse_button_down(&mut self, button: MouseButton) {
        self.buttons_down |= Self::button_mask(button);
    }

    /// Records a mouse button release.
    ///
    /// Only a held button produces a release edge; a stray "up" is ignored.
    pub fn mouse_button_up(&mut self, button: MouseButton) {
        let mask = Self::button_mask(button);
        if (self.buttons_down & mask) != 0 {
            self.buttons_released |= mask;
            self.buttons_down &= !mask;
        }
    }

    /// Returns true if the mouse button was released this frame.
    #[must_use]
    pub fn mouse_released(&self, button: MouseButton) -> bool {
        (self.buttons_released & Self::button_mask(button)) != 0
    }

    /// Returns the bit mask for a button.
    const fn button_mask(button: MouseButton) -> u8 {
        match button {
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Middle => 4,
        }
    }
}

impl PointerSource for InputState {
    fn pointer_position(&self) -> Point {
        self.position
    }

    fn just_released(&self, button: MouseButton) -> bool {
        self.mouse_released(button)
    }
}
