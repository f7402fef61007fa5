//! Compositor configuration, loadable from TOML.
//!
//! Every field has a default, so an empty document is a valid config:
//!
//! ```toml
//! [overlay]
//! enabled = true
//! stroke_width = 2.0
//! color = [1.0, 0.0, 0.0, 1.0]
//!
//! [dispatch]
//! mode = "spawn"            # or "queue"
//! thread_name = "vitrine-click"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compositor::DispatchMode;
use crate::error::{UiError, UiResult};
use crate::style::Color;

/// Complete compositor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositorConfig {
    /// Button-lock overlay.
    pub overlay: OverlayConfig,
    /// Click handler execution.
    pub dispatch: DispatchConfig,
}

/// Outline painted around the render target while buttons are locked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Paint the outline at all.
    pub enabled: bool,
    /// Stroke width in pixels.
    pub stroke_width: f32,
    /// Stroke color.
    pub color: Color,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stroke_width: 2.0,
            color: Color::ALERT,
        }
    }
}

/// Click dispatcher settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Execution mode.
    pub mode: DispatchMode,
    /// Name given to handler threads.
    pub thread_name: String,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            mode: DispatchMode::Spawn,
            thread_name: "vitrine-click".to_owned(),
        }
    }
}

impl CompositorConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Parse`] for malformed TOML and
    /// [`UiError::InvalidConfig`] for out-of-range values.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read, otherwise the
    /// errors of [`CompositorConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| UiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> UiResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> UiResult<()> {
        let width = self.overlay.stroke_width;
        if !width.is_finite() || width <= 0.0 {
            return Err(UiError::InvalidConfig(format!(
                "overlay.stroke_width must be a positive number, got {width}"
            )));
        }
        if self.dispatch.thread_name.trim().is_empty() {
            return Err(UiError::InvalidConfig(
                "dispatch.thread_name must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
