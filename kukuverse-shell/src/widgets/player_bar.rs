//! Player bar: play/pause control with track title and subtitle
//!
//! Playback is a UI-level toggle. The bar shows whatever track the last
//! generation produced, falling back to placeholder text before that.

use kuku_ui::Themeable;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.702, 0.690, 0.788, 1.0)
    PANEL_BG = vec4(1.0, 1.0, 1.0, 0.55)
    PANEL_BG_DARK = vec4(0.216, 0.180, 0.341, 1.0)
    PURPLE_500 = vec4(0.659, 0.333, 0.969, 1.0)
    PINK_500 = vec4(0.925, 0.282, 0.600, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Player bar panel
    pub PlayerBar = {{PlayerBar}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 16
        align: {y: 0.5}
        padding: 16
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 14.0);
                sdf.fill(mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode));
                return sdf.result;
            }
        }

        play_button = <View> {
            width: 48, height: 48
            align: {x: 0.5, y: 0.5}
            cursor: Hand
            show_bg: true
            draw_bg: {
                instance hover: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    sdf.circle(c.x, c.y, 23.0);
                    let base = mix((PURPLE_500), (PINK_500), 0.3);
                    sdf.fill(mix(base, (PINK_500), self.hover));
                    return sdf.result;
                }
            }

            play_icon = <View> {
                width: 18, height: 18
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let s = self.rect_size;
                        // Right-pointing triangle, nudged toward center
                        sdf.move_to(s.x * 0.30, s.y * 0.15);
                        sdf.line_to(s.x * 0.90, s.y * 0.5);
                        sdf.line_to(s.x * 0.30, s.y * 0.85);
                        sdf.close_path();
                        sdf.fill((WHITE));
                        return sdf.result;
                    }
                }
            }

            pause_icon = <View> {
                width: 18, height: 18
                visible: false
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let s = self.rect_size;
                        sdf.box(s.x * 0.20, s.y * 0.12, s.x * 0.22, s.y * 0.76, 1.0);
                        sdf.fill((WHITE));
                        sdf.box(s.x * 0.58, s.y * 0.12, s.x * 0.22, s.y * 0.76, 1.0);
                        sdf.fill((WHITE));
                        return sdf.result;
                    }
                }
            }
        }

        track_info = <View> {
            width: Fill, height: Fit
            flow: Down
            spacing: 4

            title_label = <Label> {
                text: "Your Generated Content"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 13.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }

            subtitle_label = <Label> {
                text: "AI-Generated • 5 minutes"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        volume_icon = <View> {
            width: 24, height: 24
            show_bg: true
            draw_bg: {
                instance dark_mode: 0.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let color = mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    // Speaker body
                    sdf.box(c.x - 9.0, c.y - 3.5, 5.0, 7.0, 1.0);
                    sdf.fill(color);
                    sdf.move_to(c.x - 4.0, c.y - 3.5);
                    sdf.line_to(c.x + 1.0, c.y - 7.5);
                    sdf.line_to(c.x + 1.0, c.y + 7.5);
                    sdf.line_to(c.x - 4.0, c.y + 3.5);
                    sdf.close_path();
                    sdf.fill(color);
                    // Sound arc
                    sdf.circle(c.x + 2.0, c.y, 7.0);
                    sdf.stroke(color, 1.2);
                    return sdf.result;
                }
            }
        }
    }
}

/// Actions emitted by PlayerBar
#[derive(Clone, Debug, DefaultNone)]
pub enum PlayerBarAction {
    None,
    /// Play/pause button clicked
    PlayPauseClicked,
}

#[derive(Live, LiveHook, Widget)]
pub struct PlayerBar {
    #[deref]
    view: View,

    #[rust]
    dark_mode: f64,
}

impl Widget for PlayerBar {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let play_button = self.view.view(id!(play_button));
        match event.hits(cx, play_button.area()) {
            Hit::FingerHoverIn(_) => {
                play_button.apply_over(cx, live!{ draw_bg: { hover: 1.0 } });
                self.view.redraw(cx);
            }
            Hit::FingerHoverOut(_) => {
                play_button.apply_over(cx, live!{ draw_bg: { hover: 0.0 } });
                self.view.redraw(cx);
            }
            Hit::FingerUp(_) => {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    PlayerBarAction::PlayPauseClicked,
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PlayerBar {
    /// Show the pause icon while playing, the play icon while paused
    pub fn set_playing(&mut self, cx: &mut Cx, playing: bool) {
        self.view.view(id!(play_button.play_icon)).set_visible(cx, !playing);
        self.view.view(id!(play_button.pause_icon)).set_visible(cx, playing);
        self.view.redraw(cx);
    }

    /// Show a generated track in the bar
    pub fn set_track(&mut self, cx: &mut Cx, title: &str, duration_minutes: u32) {
        self.view.label(id!(track_info.title_label)).set_text(cx, title);
        self.set_minutes(cx, duration_minutes);
    }

    /// Refresh the subtitle for the given duration
    pub fn set_minutes(&mut self, cx: &mut Cx, duration_minutes: u32) {
        let unit = if duration_minutes == 1 { "minute" } else { "minutes" };
        let subtitle = format!("AI-Generated \u{2022} {} {}", duration_minutes, unit);
        self.view.label(id!(track_info.subtitle_label)).set_text(cx, &subtitle);
        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(track_info.title_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.label(id!(track_info.subtitle_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });
        self.view.view(id!(volume_icon)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        self.view.redraw(cx);
    }
}

impl PlayerBarRef {
    /// Show the icon matching the playback state
    pub fn set_playing(&self, cx: &mut Cx, playing: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_playing(cx, playing);
        }
    }

    /// Show a generated track in the bar
    pub fn set_track(&self, cx: &mut Cx, title: &str, duration_minutes: u32) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_track(cx, title, duration_minutes);
        }
    }

    /// Refresh the subtitle for the given duration
    pub fn set_minutes(&self, cx: &mut Cx, duration_minutes: u32) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_minutes(cx, duration_minutes);
        }
    }

    /// Check if the play/pause button was clicked
    pub fn play_pause_clicked(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            PlayerBarAction::PlayPauseClicked
        )
    }
}

impl Themeable for PlayerBarRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
