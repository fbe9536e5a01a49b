//! # Coalesce - Optional values with lazy fallbacks
//!
//! `coalesce` models "a value that may be missing" as an explicit two-variant
//! type, [`OptionalValue`], and uses it to answer one question about a styled
//! profile screen: which background color should it use?
//!
//! The answer is the user's avatar's background color when there is one, and
//! the app theme's background color otherwise. The theme may not define one
//! either, so the result is itself optional.
//!
//! ## Quick Start
//!
//! ```rust
//! use coalesce::{resolve_background_color, Color, OptionalValue, Style, StyledImage, User};
//!
//! let app_theme = Style::new(Color::Smaragdine).background(Color::Fuchsia);
//!
//! let plain = User::new("Sally Nguyen");
//! assert_eq!(
//!     resolve_background_color(&plain, &app_theme),
//!     OptionalValue::Present(Color::Fuchsia),
//! );
//!
//! let styled = User::new("Sally Nguyen")
//!     .with_avatar(StyledImage::new(Style::new(Color::Wenge).background(Color::Mauve)));
//! assert_eq!(
//!     resolve_background_color(&styled, &app_theme),
//!     OptionalValue::Present(Color::Mauve),
//! );
//! ```
//!
//! ## Core Concepts
//!
//! - [`OptionalValue`]: `Present(T)` or `Absent`, with total combinators
//!   ([`map`](OptionalValue::map), [`flat_map`](OptionalValue::flat_map),
//!   [`or_else`](OptionalValue::or_else), [`unwrap_or`](OptionalValue::unwrap_or))
//! - [`Color`]: a named palette color
//! - [`Style`]: an optional background over a required foreground
//! - [`User`] and [`StyledImage`]: the profile data the resolver reads
//!
//! ## Loading Styles
//!
//! Styles can be read from YAML:
//!
//! ```rust
//! use coalesce::{Color, OptionalValue, Style};
//!
//! let style = Style::from_yaml("foreground_color: fulvous").unwrap();
//! assert_eq!(style.foreground_color, Color::Fulvous);
//! assert_eq!(style.background_color, OptionalValue::Absent);
//! ```

mod color;
mod model;
pub mod optional;
mod resolve;
pub mod style;

pub use color::Color;
pub use model::{Image, StyledImage, User};
pub use optional::{IntoOptionalValue, OptionalValue};
pub use resolve::resolve_background_color;
pub use style::{Style, StyleError};
