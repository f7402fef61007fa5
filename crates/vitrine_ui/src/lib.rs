//! # VITRINE UI
//!
//! Window compositor core for a desktop GUI toolkit:
//! - Z-index bucketing with deterministic back-to-front painting
//! - Topmost-wins hit-testing that mirrors paint order
//! - Left-click release dispatch to child controls, off the frame loop
//! - A button lock that suspends dispatch while rendering continues
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      FRAME LOOP                          │
//! ├──────────────────────────────────────────────────────────┤
//! │  InputState ─→ check_buttons ─→ hit-test ─→ dispatcher   │
//! │                                    ↑                     │
//! │  add_window ─→ registry + z-order ─┘                     │
//! │                       ↓                                  │
//! │               draw_all_windows ─→ RenderTarget           │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use vitrine_ui::{Button, Compositor, InputState, MouseButton, Point, Rect, RichWindow, UIRenderer};
//!
//! let mut compositor = Compositor::new();
//! let dialog = RichWindow::new("Dialog", Rect::new(10.0, 20.0, 200.0, 120.0), 1)
//!     .with_child(Button::new("OK", Rect::new(10.0, 80.0, 60.0, 24.0), |_at| {}));
//! compositor.add_window(dialog);
//!
//! let mut renderer = UIRenderer::new(800.0, 600.0);
//! compositor.draw_all_windows(&mut renderer);
//!
//! let mut input = InputState::new();
//! input.set_mouse_pos(30.0, 110.0);
//! input.mouse_button_down(MouseButton::Left);
//! input.begin_frame();
//! input.mouse_button_up(MouseButton::Left);
//! compositor.check_buttons(&input);
//!
//! assert!(compositor.window_at(Point::new(30.0, 110.0)).is_some());
//! ```
//!
//! The graphics backend, window content and the event loop live outside
//! this crate; they meet it at [`RenderTarget`] and [`PointerSource`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod compositor;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod style;
pub mod window;

pub use compositor::{
    ButtonLock, ClickDispatcher, Compositor, Dispatch, DispatchMode, DispatchStats, ZOrderIndex,
};
pub use config::{CompositorConfig, DispatchConfig, OverlayConfig};
pub use error::{UiError, UiResult};
pub use geometry::{Point, Rect};
pub use input::{InputState, MouseButton, PointerSource};
pub use render::{RenderCommand, RenderTarget, UIRenderer};
pub use style::{Color, Style};
pub use window::{Button, ClickCallback, Control, Drawable, PlainWindow, RichWindow, WindowId};
