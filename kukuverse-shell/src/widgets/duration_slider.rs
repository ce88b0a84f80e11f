//! Duration slider: drag to pick a duration between 1 and 30 minutes
//!
//! The track, fill and knob are drawn in a single pixel shader driven by a
//! normalized position, with the committed value kept on the Rust side.

use kuku_ui::{Themeable, DURATION_MAX, DURATION_MIN};
use makepad_widgets::*;

// Horizontal inset so the knob never clips at the track ends
const TRACK_PAD: f64 = 8.0;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    GRAY_300 = vec4(0.820, 0.835, 0.859, 1.0)
    GRAY_700 = vec4(0.216, 0.255, 0.318, 1.0)
    PURPLE_500 = vec4(0.659, 0.333, 0.969, 1.0)
    PINK_500 = vec4(0.925, 0.282, 0.600, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Duration slider with live value readout
    pub DurationSlider = {{DurationSlider}} {
        width: Fill, height: Fit
        flow: Down
        spacing: 10

        track = <View> {
            width: Fill, height: 24
            cursor: Hand
            show_bg: true
            draw_bg: {
                // (5 - 1) / 29, the default duration normalized
                instance norm: 0.1379
                instance dark_mode: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let pad = 8.0;
                    let cy = self.rect_size.y * 0.5;
                    let span = self.rect_size.x - pad * 2.0;
                    let knob_x = pad + span * self.norm;
                    // Track
                    sdf.box(pad, cy - 3.0, span, 6.0, 3.0);
                    sdf.fill(mix((GRAY_300), (GRAY_700), self.dark_mode));
                    // Fill up to the knob
                    sdf.box(pad, cy - 3.0, span * self.norm, 6.0, 3.0);
                    sdf.fill(mix((PURPLE_500), (PINK_500), self.norm));
                    // Knob
                    sdf.circle(knob_x, cy, 9.0);
                    sdf.fill((WHITE));
                    sdf.circle(knob_x, cy, 9.0);
                    sdf.stroke(mix((PURPLE_500), (PINK_500), self.norm), 1.5);
                    return sdf.result;
                }
            }
        }

        value_label = <Label> {
            text: "5 minutes"
            draw_text: {
                instance dark_mode: 0.0
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                }
            }
        }
    }
}

/// Actions emitted by DurationSlider
#[derive(Clone, Debug, DefaultNone)]
pub enum DurationSliderAction {
    None,
    /// Duration changed to the given number of minutes
    Changed(u32),
}

#[derive(Live, Widget)]
pub struct DurationSlider {
    #[deref]
    view: View,

    /// Current duration in minutes
    #[rust]
    value: u32,

    #[rust]
    dark_mode: f64,
}

impl LiveHook for DurationSlider {
    fn after_new_from_doc(&mut self, _cx: &mut Cx) {
        self.value = 5;
    }
}

impl Widget for DurationSlider {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let track = self.view.view(id!(track));
        match event.hits(cx, track.area()) {
            Hit::FingerDown(fe) => {
                let value = Self::value_at(fe.abs.x, fe.rect.pos.x, fe.rect.size.x);
                self.update_value(cx, scope, value);
            }
            Hit::FingerMove(fe) => {
                let value = Self::value_at(fe.abs.x, fe.rect.pos.x, fe.rect.size.x);
                self.update_value(cx, scope, value);
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl DurationSlider {
    /// Map a pointer x position on the track to a duration in minutes
    fn value_at(abs_x: f64, track_x: f64, track_w: f64) -> u32 {
        let span = (track_w - TRACK_PAD * 2.0).max(1.0);
        let t = ((abs_x - track_x - TRACK_PAD) / span).clamp(0.0, 1.0);
        let raw = DURATION_MIN as f64 + t * (DURATION_MAX - DURATION_MIN) as f64;
        (raw.round() as u32).clamp(DURATION_MIN, DURATION_MAX)
    }

    fn update_value(&mut self, cx: &mut Cx, scope: &mut Scope, value: u32) {
        if value == self.value {
            return;
        }
        self.set_value(cx, value);
        cx.widget_action(
            self.widget_uid(),
            &scope.path,
            DurationSliderAction::Changed(value),
        );
    }

    /// Set the duration and refresh the track and readout
    pub fn set_value(&mut self, cx: &mut Cx, value: u32) {
        self.value = value.clamp(DURATION_MIN, DURATION_MAX);

        let norm = (self.value - DURATION_MIN) as f64
            / (DURATION_MAX - DURATION_MIN) as f64;
        self.view.view(id!(track)).apply_over(cx, live!{
            draw_bg: { norm: (norm) }
        });

        let text = if self.value == 1 {
            "1 minute".to_string()
        } else {
            format!("{} minutes", self.value)
        };
        self.view.label(id!(value_label)).set_text(cx, &text);

        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.view(id!(track)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(value_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });

        self.view.redraw(cx);
    }
}

impl DurationSliderRef {
    /// Set the duration in minutes
    pub fn set_value(&self, cx: &mut Cx, value: u32) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_value(cx, value);
        }
    }

    /// The duration picked in this event cycle, if any
    pub fn changed(&self, actions: &Actions) -> Option<u32> {
        if let DurationSliderAction::Changed(value) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(value)
        } else {
            None
        }
    }
}

impl Themeable for DurationSliderRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at_endpoints() {
        // 200px track, 8px pad each side
        assert_eq!(DurationSlider::value_at(0.0, 0.0, 200.0), DURATION_MIN);
        assert_eq!(DurationSlider::value_at(8.0, 0.0, 200.0), DURATION_MIN);
        assert_eq!(DurationSlider::value_at(192.0, 0.0, 200.0), DURATION_MAX);
        assert_eq!(DurationSlider::value_at(500.0, 0.0, 200.0), DURATION_MAX);
    }

    #[test]
    fn test_value_at_midpoint() {
        // Halfway along the usable span maps near the middle of the range
        let mid = DurationSlider::value_at(100.0, 0.0, 200.0);
        assert!((15..=16).contains(&mid), "got {mid}");
    }

    #[test]
    fn test_value_at_offset_track() {
        // Track that does not start at x = 0
        assert_eq!(DurationSlider::value_at(58.0, 50.0, 200.0), DURATION_MIN);
        assert_eq!(DurationSlider::value_at(242.0, 50.0, 200.0), DURATION_MAX);
    }
}
