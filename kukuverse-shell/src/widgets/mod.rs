//! Custom widgets for the KukuVerse shell

pub mod duration_slider;
pub mod header;
pub mod mood_picker;
pub mod player_bar;
pub mod type_picker;

pub use duration_slider::{DurationSliderRef, DurationSliderWidgetRefExt};
pub use header::{KukuHeaderRef, KukuHeaderWidgetRefExt};
pub use mood_picker::{MoodPickerRef, MoodPickerWidgetRefExt};
pub use player_bar::{PlayerBarRef, PlayerBarWidgetRefExt};
pub use type_picker::{TypePickerRef, TypePickerWidgetRefExt};

use makepad_widgets::Cx;

/// Register all widget DSL blocks. Order matters: base widgets before
/// anything that references them.
pub fn live_design(cx: &mut Cx) {
    header::live_design(cx);
    type_picker::live_design(cx);
    mood_picker::live_design(cx);
    duration_slider::live_design(cx);
    player_bar::live_design(cx);
}
