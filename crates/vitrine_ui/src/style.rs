//! Colors and per-window paint style.

use serde::{Deserialize, Serialize};

/// RGBA color.
///
/// Serialized as a `[r, g, b, a]` array so config files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Pure red, used for the button-lock overlay.
    pub const ALERT: Self = Self::rgba(1.0, 0.0, 0.0, 1.0);
    /// Neutral window body gray.
    pub const PANEL: Self = Self::rgba(0.85, 0.85, 0.85, 1.0);
    /// Title bar blue.
    pub const TITLE_BAR: Self = Self::rgba(0.15, 0.3, 0.6, 1.0);
    /// Dark gray for borders and text.
    pub const SLATE: Self = Self::rgba(0.2, 0.2, 0.22, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self::rgba(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(color: Color) -> Self {
        color.to_array()
    }
}

/// Paint style for a rich window and its controls.
#[derive(Debug, Clone)]
pub struct Style {
    /// Window body color.
    pub background: Color,
    /// Title bar fill.
    pub title_bar: Color,
    /// Title text color.
    pub title_text: Color,
    /// Border color.
    pub border: Color,
    /// Body text color (control labels).
    pub text: Color,
    /// Control fill.
    pub control: Color,
    /// Border width.
    pub border_width: f32,
    /// Font size.
    pub font_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            background: Color::PANEL,
            title_bar: Color::TITLE_BAR,
            title_text: Color::WHITE,
            border: Color::SLATE,
            text: Color::SLATE,
            control: Color::rgb(0.75, 0.75, 0.78),
            border_width: 1.0,
            font_size: 14.0,
        }
    }
}
