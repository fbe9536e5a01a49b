//! Style loading errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::color::Color;

/// Error returned when a color or style cannot be read.
#[derive(Debug, Error)]
pub enum StyleError {
    /// A color name that is not in the palette
    #[error("unknown color '{}' (expected one of: {})", .name, Color::palette())]
    UnknownColor { name: String },

    /// The style document is not valid YAML or has the wrong shape
    #[error("invalid style definition: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The style file could not be read
    #[error("failed to read style file '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
