//! Profile data read by the background color resolver.

use serde::{Deserialize, Serialize};

use crate::optional::OptionalValue;
use crate::style::Style;

/// Opaque image content.
///
/// The resolver never looks inside an image; it only carries one alongside
/// its style.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub source: String,
}

impl Image {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// An image with its own style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyledImage {
    #[serde(default)]
    pub image: Image,
    pub style: Style,
}

impl StyledImage {
    /// Creates a styled image with empty image content.
    pub fn new(style: Style) -> Self {
        Self {
            image: Image::default(),
            style,
        }
    }

    /// Replaces the image content, keeping the style.
    pub fn with_image(mut self, image: Image) -> Self {
        self.image = image;
        self
    }
}

/// A user profile, optionally with an avatar.
///
/// # Example
///
/// ```rust
/// use coalesce::{Color, Style, StyledImage, User};
///
/// let user = User::new("Sally Nguyen")
///     .with_avatar(StyledImage::new(Style::new(Color::Wenge)));
/// assert!(user.avatar.is_present());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub avatar: OptionalValue<StyledImage>,
}

impl User {
    /// Creates a user without an avatar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: OptionalValue::Absent,
        }
    }

    /// Sets the avatar, returning an updated user for chaining.
    pub fn with_avatar(mut self, avatar: StyledImage) -> Self {
        self.avatar = OptionalValue::Present(avatar);
        self
    }
}
