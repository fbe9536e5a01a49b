//! Named palette colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::style::StyleError;

/// A named color from the app palette.
///
/// Colors compare by name. They display and serialize as their lowercase
/// name. Parsing, whether through [`FromStr`] or serde, ignores case and
/// surrounding whitespace.
///
/// # Example
///
/// ```rust
/// use coalesce::Color;
///
/// let color: Color = "Mauve".parse().unwrap();
/// assert_eq!(color, Color::Mauve);
/// assert_eq!(color.to_string(), "mauve");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Color {
    Mauve,
    Fuchsia,
    Smaragdine,
    Wenge,
    Fulvous,
}

impl Color {
    /// Every palette color, in declaration order.
    pub const ALL: [Color; 5] = [
        Color::Mauve,
        Color::Fuchsia,
        Color::Smaragdine,
        Color::Wenge,
        Color::Fulvous,
    ];

    /// Returns the lowercase name of this color.
    pub fn name(self) -> &'static str {
        match self {
            Color::Mauve => "mauve",
            Color::Fuchsia => "fuchsia",
            Color::Smaragdine => "smaragdine",
            Color::Wenge => "wenge",
            Color::Fulvous => "fulvous",
        }
    }

    /// Returns every palette name, comma separated.
    pub(crate) fn palette() -> String {
        Color::ALL.map(Color::name).join(", ")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Color {
    type Error = StyleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::UnknownColor {
                name: wanted.to_string(),
            })
    }
}
