//! Decorated window with a title bar and clickable children.

use std::fmt;
use std::sync::Arc;

use crate::geometry::{Point, Rect};
use crate::render::{RenderCommand, RenderTarget};
use crate::style::Style;

use super::{Control, Drawable};

/// A window with bounds, a title bar and an ordered list of controls.
///
/// Children are positioned in window-local coordinates and stored in
/// dispatch order: the first child containing a click receives it.
pub struct RichWindow {
    /// Window title.
    title: String,
    /// Global bounds; the title bar is part of this area.
    bounds: Rect,
    /// Height of the title strip at the top of the window.
    title_bar_height: f32,
    /// Z-index for layering.
    z_index: i32,
    /// Paint style.
    style: Style,
    /// Child controls in dispatch order.
    children: Vec<Arc<dyn Control>>,
}

impl RichWindow {
    /// Default title bar height.
    pub const DEFAULT_TITLE_BAR_HEIGHT: f32 = 24.0;

    /// Creates an empty window.
    #[must_use]
    pub fn new(title: impl Into<String>, bounds: Rect, z_index: i32) -> Self {
        Self {
            title: title.into(),
            bounds,
            title_bar_height: Self::DEFAULT_TITLE_BAR_HEIGHT,
            z_index,
            style: Style::default(),
            children: Vec::new(),
        }
    }

    /// Sets the title bar height.
    #[must_use]
    pub fn with_title_bar_height(mut self, height: f32) -> Self {
        self.title_bar_height = height;
        self
    }

    /// Sets the paint style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Appends a child control.
    #[must_use]
    pub fn with_child(mut self, child: impl Control + 'static) -> Self {
        self.add_child(child);
        self
    }

    /// Appends a child control.
    pub fn add_child(&mut self, child: impl Control + 'static) {
        self.children.push(Arc::new(child));
    }

    /// Appends an already shared child control.
    pub fn add_shared_child(&mut self, child: Arc<dyn Control>) {
        self.children.push(child);
    }

    /// Returns the window title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the global bounding rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the window's top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds.origin()
    }

    /// Returns the title bar in global coordinates.
    #[must_use]
    pub fn title_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.title_bar_height.min(self.bounds.height),
        )
    }

    /// Returns the children in dispatch order.
    #[must_use]
    pub fn children(&self) -> &[Arc<dyn Control>] {
        &self.children
    }

    /// Finds the first child under a global point.
    ///
    /// The point is translated into window-local coordinates before testing
    /// child bounds. Returns the child's index and a shared handle.
    #[must_use]
    pub fn control_at(&self, point: Point) -> Option<(usize, &Arc<dyn Control>)> {
        let local = point.to_local(self.origin());
        self.children
            .iter()
            .enumerate()
            .find(|(_, child)| child.bounds().contains(local))
    }
}

impl fmt::Debug for RichWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RichWindow")
            .field("title", &self.title)
            .field("bounds", &self.bounds)
            .field("z_index", &self.z_index)
            .field("children", &self.children.len())
            .finish_non_exhaustive()
    }
}

impl Drawable for RichWindow {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn draw(&self, target: &mut dyn RenderTarget) {
        let title_rect = self.title_rect();

        target.submit(RenderCommand::Rect {
            bounds: self.bounds,
            color: self.style.background,
        });
        target.submit(RenderCommand::Rect {
            bounds: title_rect,
            color: self.style.title_bar,
        });
        target.submit(RenderCommand::Text {
            text: self.title.clone(),
            x: title_rect.x + 6.0,
            y: title_rect.y + (title_rect.height - self.style.font_size) * 0.5,
            color: self.style.title_text,
            font_size: self.style.font_size,
        });

        target.submit(RenderCommand::PushClip { bounds: self.bounds });
        let origin = self.origin();
        for child in &self.children {
            child.draw(target, origin, &self.style);
        }
        target.submit(RenderCommand::PopClip);

        target.submit(RenderCommand::RectOutline {
            bounds: self.bounds,
            color: self.style.border,
            width: self.style.border_width,
        });
    }

    fn as_rich(&self) -> Option<&RichWindow> {
        Some(self)
    }
}
