//! Undecorated window: a filled rectangle with no children.

use crate::geometry::Rect;
use crate::render::{RenderCommand, RenderTarget};
use crate::style::Color;

use super::Drawable;

/// A decoration-free drawable (backgrounds, splash panels).
///
/// Paints but never receives clicks: it does not expose the rich-window
/// capability.
#[derive(Debug, Clone)]
pub struct PlainWindow {
    /// Area covered by the window.
    pub bounds: Rect,
    /// Fill color.
    pub color: Color,
    /// Z-index for layering.
    pub z_index: i32,
}

impl PlainWindow {
    /// Creates a new plain window.
    #[must_use]
    pub const fn new(bounds: Rect, color: Color, z_index: i32) -> Self {
        Self { bounds, color, z_index }
    }
}

impl Drawable for PlainWindow {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        target.submit(RenderCommand::Rect {
            bounds: self.bounds,
            color: self.color,
        });
    }
}
