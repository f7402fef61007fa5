//! Window-like entities managed by the compositor.
//!
//! Every window implements [`Drawable`]. Only [`RichWindow`] takes part in
//! hit-testing and click dispatch; the compositor discovers it through
//! [`Drawable::as_rich`].

mod control;
mod core;
mod plain;
mod rich;

pub use self::core::{Control, Drawable, WindowId};
pub use control::{Button, ClickCallback};
pub use plain::PlainWindow;
pub use rich::RichWindow;
