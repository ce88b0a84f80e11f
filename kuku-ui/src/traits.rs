//! Widget traits shared across the shell
//!
//! The one interface every KukuVerse widget implements is [`Themeable`]:
//! the root app drives theme transitions by fanning the animation value out
//! to each widget ref.

use makepad_widgets::Cx;

/// Widgets that respond to dark mode changes.
///
/// The `dark_mode` value ranges from 0.0 (light) to 1.0 (dark); intermediate
/// values occur during animated transitions. Implementations push the value
/// into shader `instance dark_mode` variables with `apply_over`.
pub trait Themeable {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64);
}
