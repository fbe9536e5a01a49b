//! Styles: an optional background over a required foreground.
//!
//! This module provides:
//!
//! - [`Style`]: the background/foreground pair used by themes and avatars
//! - [`StyleError`]: errors from parsing colors or loading styles
//!
//! Styles are plain data. They can be built in code or loaded from YAML:
//!
//! ```yaml
//! background_color: mauve   # optional
//! foreground_color: wenge
//! ```

mod error;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::optional::OptionalValue;

pub use error::StyleError;

/// A background/foreground color pair.
///
/// The background is optional; a style without one defers to whatever is
/// behind it.
///
/// # Example
///
/// ```rust
/// use coalesce::{Color, OptionalValue, Style};
///
/// let theme = Style::new(Color::Smaragdine).background(Color::Fuchsia);
/// assert_eq!(theme.background_color, OptionalValue::Present(Color::Fuchsia));
/// assert_eq!(theme.foreground_color, Color::Smaragdine);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    #[serde(default)]
    pub background_color: OptionalValue<Color>,
    pub foreground_color: Color,
}

impl Style {
    /// Creates a style with the given foreground and no background.
    pub fn new(foreground_color: Color) -> Self {
        Self {
            background_color: OptionalValue::Absent,
            foreground_color,
        }
    }

    /// Sets the background color, returning an updated style for chaining.
    pub fn background(mut self, color: Color) -> Self {
        self.background_color = OptionalValue::Present(color);
        self
    }

    /// Removes the background color.
    pub fn without_background(mut self) -> Self {
        self.background_color = OptionalValue::Absent;
        self
    }

    /// Parses a style from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Yaml`] if the document is malformed, names an
    /// unknown color, or lacks a `foreground_color`.
    pub fn from_yaml(source: &str) -> Result<Self, StyleError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads and parses a YAML style file.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Io`] if the file cannot be read, or any error
    /// from [`Style::from_yaml`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StyleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}
