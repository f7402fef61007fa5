//! Core window types and traits.

use std::fmt;

use crate::geometry::{Point, Rect};
use crate::render::RenderTarget;
use crate::style::Style;

use super::RichWindow;

/// Unique identifier for a registered window.
///
/// Issued by the compositor in strictly increasing order and never reused,
/// not even after [`destroy_all_windows`](crate::Compositor::destroy_all_windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u64);

impl WindowId {
    /// Creates a new window ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window#{}", self.0)
    }
}

/// Base trait for everything the compositor can paint.
pub trait Drawable {
    /// Returns the z-index. Higher values paint later, on top.
    ///
    /// Read once, at registration.
    fn z_index(&self) -> i32;

    /// Paints the window into the target.
    fn draw(&self, target: &mut dyn RenderTarget);

    /// Capability check for hit-testable windows.
    ///
    /// Plain drawables keep the default and are invisible to hit-testing.
    fn as_rich(&self) -> Option<&RichWindow> {
        None
    }
}

/// A clickable child of a rich window.
///
/// Handlers run on a dispatcher thread, hence `Send + Sync`.
pub trait Control: Send + Sync {
    /// Bounds in window-local coordinates.
    fn bounds(&self) -> Rect;

    /// Handles a left-click release.
    ///
    /// `at` is the pointer position in global screen coordinates.
    ///
    /// Must not panic. Builds use `panic = "abort"`, so a panicking handler
    /// takes the whole process down, dispatcher worker included.
    fn click(&self, at: Point);

    /// Paints the control. `origin` is the owning window's top-left corner.
    fn draw(&self, _target: &mut dyn RenderTarget, _origin: Point, _style: &Style) {}
}
