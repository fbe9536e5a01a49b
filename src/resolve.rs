//! Background color resolution for a user's profile screen.

use tracing::trace;

use crate::color::Color;
use crate::model::User;
use crate::optional::OptionalValue;
use crate::style::Style;

/// Resolves the background color for `user`'s profile screen.
///
/// Returns the avatar's style's background color when the user has an avatar
/// and that style sets one. Otherwise returns `app_theme`'s background color,
/// which may itself be absent. There is no default color: when neither side
/// sets a background the result is [`OptionalValue::Absent`].
///
/// The avatar lookup stops as soon as the avatar is missing, and the theme
/// is only consulted when the avatar lookup came up empty. A single trace
/// event records the outcome, with `source` set to `avatar`, `app_theme` or
/// `none`.
///
/// # Example
///
/// ```rust
/// use coalesce::{resolve_background_color, Color, OptionalValue, Style, User};
///
/// let unthemed = Style::new(Color::Fulvous);
/// assert_eq!(
///     resolve_background_color(&User::new("Sally Nguyen"), &unthemed),
///     OptionalValue::Absent,
/// );
/// ```
pub fn resolve_background_color(user: &User, app_theme: &Style) -> OptionalValue<Color> {
    let avatar_background = user
        .avatar
        .as_ref()
        .flat_map(|avatar| avatar.style.background_color);

    let mut source = "avatar";
    let effective = avatar_background.or_else(|| {
        source = "app_theme";
        app_theme.background_color
    });
    if effective.is_absent() {
        source = "none";
    }

    trace!(
        user = %user.name,
        source,
        background = ?effective,
        "resolved profile background"
    );
    effective
}
