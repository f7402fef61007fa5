//! The compositor: window registry, z-order, render pass, hit-testing and
//! click dispatch.
//!
//! ```text
//!   add_window ──> WindowRegistry ──┬──> draw_all_windows   (ascending z)
//!                  + ZOrderIndex    └──> window_at / window_title_at (topmost z)
//!                                              │
//!   PointerSource ──> check_buttons ───────────┘──> first child ──> ClickDispatcher
//!                          ▲
//!                     ButtonLock
//! ```
//!
//! Painting and hit-testing use the same precedence: a higher z-index paints
//! later and therefore wins a hit-test. At equal z the later-registered
//! window is on top for both.

mod dispatch;
mod lock;
mod registry;
mod zorder;

pub use dispatch::{ClickDispatcher, DispatchMode, DispatchStats};
pub use lock::ButtonLock;
pub use zorder::ZOrderIndex;

use tracing::{debug, trace};

use crate::config::{CompositorConfig, OverlayConfig};
use crate::geometry::{Point, Rect};
use crate::input::{MouseButton, PointerSource};
use crate::render::{RenderCommand, RenderTarget};
use crate::window::{Drawable, RichWindow, WindowId};

use registry::WindowRegistry;

/// What a call to [`Compositor::check_buttons`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Buttons are locked; input was not examined.
    Locked,
    /// The primary button was not released this frame.
    NoRelease,
    /// No rich window under the pointer.
    NoWindow,
    /// A window was hit but none of its controls.
    NoControl {
        /// The window under the pointer.
        window: WindowId,
    },
    /// A control's click handler was scheduled.
    Dispatched {
        /// The window under the pointer.
        window: WindowId,
        /// Index of the control among the window's children.
        control: usize,
    },
}

/// Owns every window and routes frames and clicks to them.
///
/// Mutation (`add_window`, `destroy_all_windows`) needs `&mut self`, so it
/// can only come from the thread driving the frame loop. Click handlers run
/// elsewhere and only ever see their own control plus any [`ButtonLock`]
/// handle they were given.
pub struct Compositor {
    registry: WindowRegistry,
    lock: ButtonLock,
    dispatcher: ClickDispatcher,
    overlay: OverlayConfig,
}

impl Compositor {
    /// Creates an empty compositor with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&CompositorConfig::default())
    }

    /// Creates an empty compositor.
    #[must_use]
    pub fn with_config(config: &CompositorConfig) -> Self {
        Self {
            registry: WindowRegistry::new(),
            lock: ButtonLock::new(),
            dispatcher: ClickDispatcher::new(&config.dispatch),
            overlay: config.overlay.clone(),
        }
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Registers a window and returns its new ID.
    ///
    /// The z-index is read once, here. Duplicate and negative z-indices are
    /// fine; windows sharing a z-index stack in registration order.
    pub fn add_window(&mut self, window: impl Drawable + 'static) -> WindowId {
        self.add_boxed_window(Box::new(window))
    }

    /// Registers an already boxed window.
    pub fn add_boxed_window(&mut self, window: Box<dyn Drawable>) -> WindowId {
        let (id, z_index) = self.registry.insert(window);
        debug!(%id, z_index, "window added");
        id
    }

    /// Removes every window (scene change).
    ///
    /// IDs keep counting from where they were; the button lock and the
    /// dispatcher are untouched.
    pub fn destroy_all_windows(&mut self) {
        let count = self.registry.len();
        self.registry.clear();
        debug!(count, "all windows destroyed");
    }

    /// Returns a registered window.
    #[must_use]
    pub fn window(&self, id: WindowId) -> Option<&dyn Drawable> {
        self.registry.get(id).map(|entry| entry.drawable.as_ref())
    }

    /// Number of live windows.
    #[must_use]
    pub fn window_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no window is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.len() == 0
    }

    /// The z-order index.
    #[must_use]
    pub fn z_order(&self) -> &ZOrderIndex {
        self.registry.z_order()
    }

    /// Window IDs in paint order, back to front.
    #[must_use]
    pub fn draw_order(&self) -> Vec<WindowId> {
        self.registry.z_order().iter().collect()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Paints every window back-to-front, then the lock overlay if locked.
    ///
    /// Call once per frame after window content is ready.
    pub fn draw_all_windows(&self, target: &mut dyn RenderTarget) {
        let mut painted = 0usize;
        for (_, entry) in self.registry.paint_order() {
            entry.drawable.draw(target);
            painted += 1;
        }

        let overlay = self.overlay.enabled && self.lock.is_locked();
        if overlay {
            let bounds = target.bounds();
            target.submit(RenderCommand::RectOutline {
                bounds,
                color: self.overlay.color,
                width: self.overlay.stroke_width,
            });
        }

        trace!(painted, overlay, "frame composited");
    }

    // =========================================================================
    // Hit-testing
    // =========================================================================

    /// Returns the topmost rich window whose bounds contain `point`.
    #[must_use]
    pub fn window_at(&self, point: Point) -> Option<&RichWindow> {
        self.topmost(point, RichWindow::bounds).map(|(_, window)| window)
    }

    /// Returns the topmost rich window whose title bar contains `point`.
    #[must_use]
    pub fn window_title_at(&self, point: Point) -> Option<&RichWindow> {
        self.topmost(point, RichWindow::title_rect).map(|(_, window)| window)
    }

    /// Returns the ID of the window [`Compositor::window_at`] would return.
    #[must_use]
    pub fn window_id_at(&self, point: Point) -> Option<WindowId> {
        self.topmost(point, RichWindow::bounds).map(|(id, _)| id)
    }

    /// Scans all rich windows and keeps the highest z-index whose `area`
    /// contains the point.
    ///
    /// The scan runs in registration order and replaces the current best on
    /// an equal z-index, so the latest-registered window wins ties.
    fn topmost(
        &self,
        point: Point,
        area: impl Fn(&RichWindow) -> Rect,
    ) -> Option<(WindowId, &RichWindow)> {
        let mut best: Option<(i32, WindowId, &RichWindow)> = None;

        for (id, entry) in self.registry.iter() {
            let Some(window) = entry.drawable.as_rich() else {
                continue;
            };
            if !area(window).contains(point) {
                continue;
            }
            if best.map_or(true, |(z, _, _)| entry.z_index >= z) {
                best = Some((entry.z_index, id, window));
            }
        }

        best.map(|(_, id, window)| (id, window))
    }

    // =========================================================================
    // Buttons
    // =========================================================================

    /// Suspends click dispatch. Rendering continues, with the overlay.
    pub fn lock_all_buttons(&self) {
        self.lock.lock();
    }

    /// Resumes click dispatch.
    pub fn unlock_all_buttons(&self) {
        self.lock.unlock();
    }

    /// Returns true while click dispatch is suspended.
    #[must_use]
    pub fn buttons_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// Returns a handle to the button lock, shareable with click handlers.
    #[must_use]
    pub fn button_lock(&self) -> ButtonLock {
        self.lock.clone()
    }

    /// Dispatcher counters.
    #[must_use]
    pub fn dispatch_stats(&self) -> DispatchStats {
        self.dispatcher.stats()
    }

    /// Routes a left-button release to the control under the pointer.
    ///
    /// Call once per frame after input polling. On a release edge the
    /// topmost window under the pointer is found, the pointer is translated
    /// into window-local coordinates, and the first child containing it gets
    /// its handler scheduled with the global position. Never blocks on the
    /// handler.
    pub fn check_buttons(&self, input: &dyn PointerSource) -> Dispatch {
        if self.lock.is_locked() {
            return Dispatch::Locked;
        }

        if !input.just_released(MouseButton::Left) {
            return Dispatch::NoRelease;
        }

        let position = input.pointer_position();
        let Some((window_id, window)) = self.topmost(position, RichWindow::bounds) else {
            return Dispatch::NoWindow;
        };

        let Some((index, control)) = window.control_at(position) else {
            return Dispatch::NoControl { window: window_id };
        };

        debug!(window = %window_id, control = index, x = position.x, y = position.y, "click dispatched");
        self.dispatcher.dispatch(std::sync::Arc::clone(control), position);

        Dispatch::Dispatched {
            window: window_id,
            control: index,
        }
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("windows", &self.registry.len())
            .field("z_levels", &self.registry.z_order().levels())
            .field("locked", &self.lock.is_locked())
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use crate::render::UIRenderer;
    use crate::style::Color;
    use crate::window::{Button, PlainWindow};
    use crossbeam_channel::{unbounded, Receiver};
    use std::time::Duration;

    /// Drawable that records its z-index into the frame as a text command.
    struct Marker {
        name: &'static str,
        z: i32,
    }

    impl Drawable for Marker {
        fn z_index(&self) -> i32 {
            self.z
        }

        fn draw(&self, target: &mut dyn RenderTarget) {
            target.submit(RenderCommand::Text {
                text: self.name.to_owned(),
                x: 0.0,
                y: 0.0,
                color: Color::BLACK,
                font_size: 12.0,
            });
        }
    }

    fn painted_names(commands: &[RenderCommand]) -> Vec<String> {
        commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn release_at(x: f32, y: f32) -> InputState {
        let mut input = InputState::new();
        input.set_mouse_pos(x, y);
        input.mouse_button_down(MouseButton::Left);
        input.begin_frame();
        input.mouse_button_up(MouseButton::Left);
        input
    }

    fn recording_window(title: &str, bounds: Rect, z: i32) -> (RichWindow, Receiver<Point>) {
        let (tx, rx) = unbounded();
        let window = RichWindow::new(title, bounds, z).with_child(Button::new(
            "record",
            Rect::new(0.0, 0.0, 20.0, 20.0),
            move |at| {
                let _ = tx.send(at);
            },
        ));
        (window, rx)
    }

    #[test]
    fn test_draw_order_by_z_then_registration() {
        let mut compositor = Compositor::new();
        compositor.add_window(Marker { name: "a", z: 3 });
        compositor.add_window(Marker { name: "b", z: -1 });
        compositor.add_window(Marker { name: "c", z: 3 });
        compositor.add_window(Marker { name: "d", z: 0 });

        let mut renderer = UIRenderer::new(100.0, 100.0);
        compositor.draw_all_windows(&mut renderer);

        assert_eq!(painted_names(renderer.commands()), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_ids_are_monotonic_across_teardown() {
        let mut compositor = Compositor::new();
        let first = compositor.add_window(Marker { name: "a", z: 0 });
        let second = compositor.add_window(Marker { name: "b", z: 0 });
        assert!(second > first);

        compositor.destroy_all_windows();
        assert!(compositor.is_empty());
        assert!(compositor.z_order().is_empty());

        let third = compositor.add_window(Marker { name: "c", z: 0 });
        assert!(third > second);
    }

    #[test]
    fn test_empty_compositor_draws_nothing() {
        let compositor = Compositor::new();
        let mut renderer = UIRenderer::new(100.0, 100.0);

        compositor.draw_all_windows(&mut renderer);

        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_overlay_only_while_locked() {
        let compositor = Compositor::new();
        let mut renderer = UIRenderer::new(320.0, 240.0);

        compositor.lock_all_buttons();
        compositor.draw_all_windows(&mut renderer);
        assert_eq!(
            renderer.commands(),
            &[RenderCommand::RectOutline {
                bounds: Rect::new(0.0, 0.0, 320.0, 240.0),
                color: Color::ALERT,
                width: 2.0,
            }]
        );

        renderer.begin_frame();
        compositor.unlock_all_buttons();
        compositor.draw_all_windows(&mut renderer);
        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_overlay_can_be_disabled() {
        let mut config = CompositorConfig::default();
        config.overlay.enabled = false;
        let compositor = Compositor::with_config(&config);
        let mut renderer = UIRenderer::new(320.0, 240.0);

        compositor.lock_all_buttons();
        compositor.draw_all_windows(&mut renderer);

        assert_eq!(renderer.command_count(), 0);
    }

    #[test]
    fn test_plain_windows_are_not_hit() {
        let mut compositor = Compositor::new();
        compositor.add_window(PlainWindow::new(
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Color::BLACK,
            10,
        ));

        assert!(compositor.window_at(Point::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_window_id_at_matches_window_at() {
        let mut compositor = Compositor::new();
        compositor.add_window(RichWindow::new("low", Rect::new(0.0, 0.0, 100.0, 100.0), 1));
        let high = compositor.add_window(RichWindow::new("high", Rect::new(0.0, 0.0, 100.0, 100.0), 2));

        assert_eq!(compositor.window_id_at(Point::new(5.0, 5.0)), Some(high));
        assert_eq!(compositor.window_at(Point::new(5.0, 5.0)).map(RichWindow::title), Some("high"));
    }

    #[test]
    fn test_check_buttons_outcomes() {
        let mut compositor = Compositor::new();
        let (window, rx) = recording_window("w", Rect::new(100.0, 100.0, 200.0, 200.0), 0);
        let id = compositor.add_window(window);

        assert_eq!(compositor.check_buttons(&InputState::new()), Dispatch::NoRelease);
        assert_eq!(compositor.check_buttons(&release_at(5.0, 5.0)), Dispatch::NoWindow);
        assert_eq!(
            compositor.check_buttons(&release_at(250.0, 250.0)),
            Dispatch::NoControl { window: id }
        );
        assert_eq!(
            compositor.check_buttons(&release_at(110.0, 105.0)),
            Dispatch::Dispatched { window: id, control: 0 }
        );

        let at = rx.recv_timeout(Duration::from_secs(5)).expect("handler ran");
        assert_eq!(at, Point::new(110.0, 105.0));
    }

    #[test]
    fn test_locked_compositor_ignores_release() {
        let mut compositor = Compositor::new();
        let (window, rx) = recording_window("w", Rect::new(0.0, 0.0, 200.0, 200.0), 0);
        compositor.add_window(window);

        compositor.lock_all_buttons();
        assert_eq!(compositor.check_buttons(&release_at(5.0, 5.0)), Dispatch::Locked);
        assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
        assert_eq!(compositor.dispatch_stats().submitted, 0);
    }

    #[test]
    fn test_teardown_keeps_lock() {
        let mut compositor = Compositor::new();
        compositor.lock_all_buttons();
        compositor.destroy_all_windows();
        assert!(compositor.buttons_locked());
    }
}
