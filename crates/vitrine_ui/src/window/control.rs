//! Stock controls.

use std::fmt;
use std::sync::Arc;

use crate::geometry::{Point, Rect};
use crate::render::{RenderCommand, RenderTarget};
use crate::style::Style;

use super::Control;

/// Click callback shared between the control and dispatcher threads.
pub type ClickCallback = Arc<dyn Fn(Point) + Send + Sync>;

/// A labelled push button.
pub struct Button {
    /// Label text.
    label: String,
    /// Bounds relative to the owning window.
    bounds: Rect,
    /// Invoked with the global pointer position.
    on_click: ClickCallback,
}

impl Button {
    /// Creates a button at window-local `bounds`.
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        bounds: Rect,
        on_click: impl Fn(Point) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            bounds,
            on_click: Arc::new(on_click),
        }
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label)
            .field("bounds", &self.bounds)
            .finish_non_exhaustive()
    }
}

impl Control for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn click(&self, at: Point) {
        (self.on_click)(at);
    }

    fn draw(&self, target: &mut dyn RenderTarget, origin: Point, style: &Style) {
        let bounds = self.bounds.translate(origin);
        target.submit(RenderCommand::Rect {
            bounds,
            color: style.control,
        });
        target.submit(RenderCommand::RectOutline {
            bounds,
            color: style.border,
            width: style.border_width,
        });
        // Rough vertical centering; no text metrics at this layer.
        target.submit(RenderCommand::Text {
            text: self.label.clone(),
            x: bounds.x + 4.0,
            y: bounds.y + (bounds.height - style.font_size) * 0.5,
            color: style.text,
            font_size: style.font_size,
        });
    }
}
