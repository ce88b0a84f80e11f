//! Application header with title, tagline, and theme toggle

use kuku_ui::Themeable;
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Color constants (vec4 to avoid hex parsing issues)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.702, 0.690, 0.788, 1.0)
    PURPLE_400 = vec4(0.753, 0.518, 0.988, 1.0)
    HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
    TRANSPARENT = vec4(0.0, 0.0, 0.0, 0.0)
    AMBER_500 = vec4(0.961, 0.624, 0.043, 1.0)
    INDIGO_500 = vec4(0.388, 0.400, 0.945, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// Theme toggle button with sun/moon icons
    ThemeToggle = <View> {
        width: 36, height: 36
        align: {x: 0.5, y: 0.5}
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                let cx = self.rect_size.x * 0.5;
                let cy = self.rect_size.y * 0.5;
                sdf.circle(cx, cy, 16.0);
                sdf.fill(mix((TRANSPARENT), (HOVER_BG), self.hover));
                return sdf.result;
            }
        }

        sun_icon = <View> {
            width: 20, height: 20
            visible: false
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let amber = (AMBER_500);
                    // Sun circle
                    sdf.circle(c.x, c.y, 4.0);
                    sdf.fill(amber);
                    // Sun rays
                    let ray_len = 2.5;
                    let ray_dist = 6.5;
                    sdf.move_to(c.x, c.y - ray_dist);
                    sdf.line_to(c.x, c.y - ray_dist - ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x, c.y + ray_dist);
                    sdf.line_to(c.x, c.y + ray_dist + ray_len);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x - ray_dist, c.y);
                    sdf.line_to(c.x - ray_dist - ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    sdf.move_to(c.x + ray_dist, c.y);
                    sdf.line_to(c.x + ray_dist + ray_len, c.y);
                    sdf.stroke(amber, 1.5);
                    return sdf.result;
                }
            }
        }

        moon_icon = <View> {
            width: 20, height: 20
            show_bg: true
            draw_bg: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    let c = self.rect_size * 0.5;
                    let indigo = (INDIGO_500);
                    sdf.circle(c.x, c.y, 6.0);
                    sdf.fill(indigo);
                    sdf.circle(c.x + 3.5, c.y - 2.5, 4.5);
                    sdf.fill((WHITE));
                    return sdf.result;
                }
            }
        }
    }

    /// KukuVerse header: title block on the left, theme toggle on the right
    pub KukuHeader = {{KukuHeader}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 12
        align: {y: 0.5}
        padding: {left: 24, right: 24, top: 18, bottom: 18}

        title_block = <View> {
            width: Fit, height: Fit
            flow: Down
            spacing: 4

            title_label = <Label> {
                text: "KukuVerse"
                draw_text: {
                    text_style: { font_size: 26.0 }
                    fn get_color(self) -> vec4 {
                        return (PURPLE_400);
                    }
                }
            }

            tagline_label = <Label> {
                text: "Your AI-Powered Audio Content Universe"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 12.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        // Spacer
        <View> { width: Fill, height: 1 }

        theme_toggle = <ThemeToggle> {}
    }
}

/// Actions emitted by KukuHeader
#[derive(Clone, Debug, DefaultNone)]
pub enum KukuHeaderAction {
    None,
    /// Theme toggle clicked
    ThemeToggled,
}

#[derive(Live, LiveHook, Widget)]
pub struct KukuHeader {
    #[deref]
    view: View,

    /// Current dark mode value
    #[rust]
    dark_mode: f64,
}

impl Widget for KukuHeader {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        let theme_toggle = self.view.view(id!(theme_toggle));
        match event.hits(cx, theme_toggle.area()) {
            Hit::FingerHoverIn(_) => {
                self.view.view(id!(theme_toggle)).apply_over(cx, live!{
                    draw_bg: { hover: 1.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerHoverOut(_) => {
                self.view.view(id!(theme_toggle)).apply_over(cx, live!{
                    draw_bg: { hover: 0.0 }
                });
                self.view.redraw(cx);
            }
            Hit::FingerUp(_) => {
                cx.widget_action(
                    self.widget_uid(),
                    &scope.path,
                    KukuHeaderAction::ThemeToggled,
                );
            }
            _ => {}
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl KukuHeader {
    /// Swap the toggle icon: sun while dark (click to lighten), moon while light
    pub fn set_dark_mode(&mut self, cx: &mut Cx, is_dark: bool) {
        self.view.view(id!(theme_toggle.sun_icon)).set_visible(cx, is_dark);
        self.view.view(id!(theme_toggle.moon_icon)).set_visible(cx, !is_dark);
        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        self.view.label(id!(title_block.tagline_label)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });

        self.view.redraw(cx);
    }
}

impl KukuHeaderRef {
    /// Swap the toggle icon for the given theme state
    pub fn set_dark_mode(&self, cx: &mut Cx, is_dark: bool) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_dark_mode(cx, is_dark);
        }
    }

    /// Check if the theme toggle was clicked
    pub fn theme_toggled(&self, actions: &Actions) -> bool {
        matches!(
            actions.find_widget_action(self.widget_uid()).cast(),
            KukuHeaderAction::ThemeToggled
        )
    }
}

impl Themeable for KukuHeaderRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
