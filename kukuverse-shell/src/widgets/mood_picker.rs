//! Mood picker: four accent-colored chips
//!
//! Each chip carries its accent as instance color components so the shared
//! pixel shader can render the dot and the selected fill per chip.

use kuku_ui::{Mood, Themeable};
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    CHIP_BG = vec4(1.0, 1.0, 1.0, 0.55)
    CHIP_BG_DARK = vec4(0.216, 0.180, 0.341, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// One mood chip: accent dot on the left, label on the right
    MoodChip = <View> {
        width: Fill, height: 44
        flow: Right
        spacing: 8
        align: {x: 0.5, y: 0.5}
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance selected: 0.0
            instance hover: 0.0
            instance dark_mode: 0.0
            instance accent_r: 0.5
            instance accent_g: 0.5
            instance accent_b: 0.5
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let accent = vec4(self.accent_r, self.accent_g, self.accent_b, 1.0);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 10.0);
                let base = mix((CHIP_BG), (CHIP_BG_DARK), self.dark_mode);
                let hovered = mix(base, mix(base, (WHITE), 0.25), self.hover);
                sdf.fill(mix(hovered, accent, self.selected));
                // Accent dot
                sdf.circle(16.0, self.rect_size.y * 0.5, 4.0);
                sdf.fill(mix(accent, (WHITE), self.selected));
                return sdf.result;
            }
        }

        lbl = <Label> {
            draw_text: {
                instance selected: 0.0
                instance dark_mode: 0.0
                text_style: { font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    let base = mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    return mix(base, (WHITE), self.selected);
                }
            }
        }
    }

    /// Mood picker row
    pub MoodPicker = {{MoodPicker}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 14

        btn_happy = <MoodChip> {
            draw_bg: {
                selected: 1.0
                accent_r: 0.918, accent_g: 0.702, accent_b: 0.031
            }
            lbl = <Label> { text: "Happy", draw_text: { selected: 1.0 } }
        }

        btn_relaxed = <MoodChip> {
            draw_bg: { accent_r: 0.231, accent_g: 0.510, accent_b: 0.965 }
            lbl = <Label> { text: "Relaxed" }
        }

        btn_energetic = <MoodChip> {
            draw_bg: { accent_r: 0.937, accent_g: 0.267, accent_b: 0.267 }
            lbl = <Label> { text: "Energetic" }
        }

        btn_focused = <MoodChip> {
            draw_bg: { accent_r: 0.659, accent_g: 0.333, accent_b: 0.969 }
            lbl = <Label> { text: "Focused" }
        }
    }
}

/// Actions emitted by MoodPicker
#[derive(Clone, Debug, DefaultNone)]
pub enum MoodPickerAction {
    None,
    /// A mood was selected
    Selected(Mood),
}

#[derive(Live, LiveHook, Widget)]
pub struct MoodPicker {
    #[deref]
    view: View,

    /// Currently selected mood
    #[rust]
    selected: Mood,

    #[rust]
    dark_mode: f64,
}

impl Widget for MoodPicker {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        for mood in Mood::ALL {
            let chip = self.chip_view(mood);
            match event.hits(cx, chip.area()) {
                Hit::FingerHoverIn(_) => {
                    if mood != self.selected {
                        chip.apply_over(cx, live!{ draw_bg: { hover: 1.0 } });
                        self.view.redraw(cx);
                    }
                }
                Hit::FingerHoverOut(_) => {
                    chip.apply_over(cx, live!{ draw_bg: { hover: 0.0 } });
                    self.view.redraw(cx);
                }
                Hit::FingerUp(_) => {
                    if mood != self.selected {
                        self.set_selected(cx, mood);
                        cx.widget_action(
                            self.widget_uid(),
                            &scope.path,
                            MoodPickerAction::Selected(mood),
                        );
                    }
                }
                _ => {}
            }
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl MoodPicker {
    fn chip_view(&self, mood: Mood) -> ViewRef {
        match mood {
            Mood::Happy => self.view.view(id!(btn_happy)),
            Mood::Relaxed => self.view.view(id!(btn_relaxed)),
            Mood::Energetic => self.view.view(id!(btn_energetic)),
            Mood::Focused => self.view.view(id!(btn_focused)),
        }
    }

    fn label(&self, mood: Mood) -> LabelRef {
        match mood {
            Mood::Happy => self.view.label(id!(btn_happy.lbl)),
            Mood::Relaxed => self.view.label(id!(btn_relaxed.lbl)),
            Mood::Energetic => self.view.label(id!(btn_energetic.lbl)),
            Mood::Focused => self.view.label(id!(btn_focused.lbl)),
        }
    }

    /// Mark the given mood selected and clear the others
    pub fn set_selected(&mut self, cx: &mut Cx, selected: Mood) {
        self.selected = selected;

        for mood in Mood::ALL {
            let value = if mood == selected { 1.0 } else { 0.0 };
            self.chip_view(mood).apply_over(cx, live!{
                draw_bg: { selected: (value), hover: 0.0 }
            });
            self.label(mood).apply_over(cx, live!{
                draw_text: { selected: (value) }
            });
        }

        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        for mood in Mood::ALL {
            self.chip_view(mood).apply_over(cx, live!{
                draw_bg: { dark_mode: (dark_mode) }
            });
            self.label(mood).apply_over(cx, live!{
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.view.redraw(cx);
    }
}

impl MoodPickerRef {
    /// Mark the given mood selected
    pub fn set_selected(&self, cx: &mut Cx, selected: Mood) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_selected(cx, selected);
        }
    }

    /// The mood selected in this event cycle, if any
    pub fn selected(&self, actions: &Actions) -> Option<Mood> {
        if let MoodPickerAction::Selected(mood) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(mood)
        } else {
            None
        }
    }
}

impl Themeable for MoodPickerRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
