//! Content type picker: four buttons with icon and label
//!
//! Rendered from `ContentType::ALL`; exactly one button carries the selected
//! state at a time.

use kuku_ui::{ContentType, Themeable};
use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.702, 0.690, 0.788, 1.0)
    TILE_BG = vec4(1.0, 1.0, 1.0, 0.55)
    TILE_BG_DARK = vec4(0.216, 0.180, 0.341, 1.0)
    PURPLE_500 = vec4(0.659, 0.333, 0.969, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    /// One selectable content-type tile
    TypeButton = <View> {
        width: Fill, height: 96
        flow: Down
        spacing: 8
        align: {x: 0.5, y: 0.5}
        cursor: Hand
        show_bg: true
        draw_bg: {
            instance selected: 0.0
            instance hover: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 12.0);
                let base = mix((TILE_BG), (TILE_BG_DARK), self.dark_mode);
                let hovered = mix(base, mix(base, (WHITE), 0.25), self.hover);
                sdf.fill(mix(hovered, (PURPLE_500), self.selected));
                return sdf.result;
            }
        }

        icon = <View> {
            width: 30, height: 30
            show_bg: true
            draw_bg: {
                instance selected: 0.0
                instance dark_mode: 0.0
                fn pixel(self) -> vec4 {
                    return vec4(0.0, 0.0, 0.0, 0.0);
                }
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

    /// Content type picker grid
    pub TypePicker = {{TypePicker}} {
        width: Fill, height: Fit
        flow: Right
        spacing: 14

        btn_story = <TypeButton> {
            draw_bg: { selected: 1.0 }
            // Open book glyph
            icon = <View> {
                draw_bg: {
                    instance selected: 1.0
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        let color = mix(
                            mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode),
                            (WHITE), self.selected
                        );
                        // Two page panels and the spine
                        sdf.box(c.x - 11.0, c.y - 7.0, 10.0, 14.0, 2.0);
                        sdf.stroke(color, 1.5);
                        sdf.box(c.x + 1.0, c.y - 7.0, 10.0, 14.0, 2.0);
                        sdf.stroke(color, 1.5);
                        sdf.move_to(c.x, c.y - 7.0);
                        sdf.line_to(c.x, c.y + 7.0);
                        sdf.stroke(color, 1.5);
                        return sdf.result;
                    }
                }
            }
            lbl = <Label> { text: "Stories", draw_text: { selected: 1.0 } }
        }

        btn_motivation = <TypeButton> {
            // Sparkle glyph
            icon = <View> {
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        let color = mix(
                            mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode),
                            (WHITE), self.selected
                        );
                        sdf.move_to(c.x, c.y - 10.0);
                        sdf.line_to(c.x, c.y + 10.0);
                        sdf.stroke(color, 1.5);
                        sdf.move_to(c.x - 10.0, c.y);
                        sdf.line_to(c.x + 10.0, c.y);
                        sdf.stroke(color, 1.5);
                        sdf.move_to(c.x - 5.0, c.y - 5.0);
                        sdf.line_to(c.x + 5.0, c.y + 5.0);
                        sdf.stroke(color, 1.0);
                        sdf.move_to(c.x + 5.0, c.y - 5.0);
                        sdf.line_to(c.x - 5.0, c.y + 5.0);
                        sdf.stroke(color, 1.0);
                        return sdf.result;
                    }
                }
            }
            lbl = <Label> { text: "Motivation" }
        }

        btn_meditation = <TypeButton> {
            // Brain glyph: two hemispheres
            icon = <View> {
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        let color = mix(
                            mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode),
                            (WHITE), self.selected
                        );
                        sdf.circle(c.x - 4.5, c.y, 7.5);
                        sdf.stroke(color, 1.5);
                        sdf.circle(c.x + 4.5, c.y, 7.5);
                        sdf.stroke(color, 1.5);
                        return sdf.result;
                    }
                }
            }
            lbl = <Label> { text: "Meditation" }
        }

        btn_fiction = <TypeButton> {
            // Headphones glyph
            icon = <View> {
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        let color = mix(
                            mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode),
                            (WHITE), self.selected
                        );
                        // Headband
                        sdf.circle(c.x, c.y + 1.0, 9.0);
                        sdf.stroke(color, 1.5);
                        // Ear cups
                        sdf.box(c.x - 12.0, c.y + 1.0, 5.0, 9.0, 2.0);
                        sdf.fill(color);
                        sdf.box(c.x + 7.0, c.y + 1.0, 5.0, 9.0, 2.0);
                        sdf.fill(color);
                        return sdf.result;
                    }
                }
            }
            lbl = <Label> { text: "Fiction" }
        }
    }
}

/// Actions emitted by TypePicker
#[derive(Clone, Debug, DefaultNone)]
pub enum TypePickerAction {
    None,
    /// A content type was selected
    Selected(ContentType),
}

#[derive(Live, LiveHook, Widget)]
pub struct TypePicker {
    #[deref]
    view: View,

    /// Currently selected content type
    #[rust]
    selected: ContentType,

    #[rust]
    dark_mode: f64,
}

impl Widget for TypePicker {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        for content_type in ContentType::ALL {
            let button = self.button_view(content_type);
            match event.hits(cx, button.area()) {
                Hit::FingerHoverIn(_) => {
                    if content_type != self.selected {
                        button.apply_over(cx, live!{ draw_bg: { hover: 1.0 } });
                        self.view.redraw(cx);
                    }
                }
                Hit::FingerHoverOut(_) => {
                    button.apply_over(cx, live!{ draw_bg: { hover: 0.0 } });
                    self.view.redraw(cx);
                }
                Hit::FingerUp(_) => {
                    if content_type != self.selected {
                        self.set_selected(cx, content_type);
                        cx.widget_action(
                            self.widget_uid(),
                            &scope.path,
                            TypePickerAction::Selected(content_type),
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

impl TypePicker {
    fn button_view(&self, content_type: ContentType) -> ViewRef {
        match content_type {
            ContentType::Story => self.view.view(id!(btn_story)),
            ContentType::Motivation => self.view.view(id!(btn_motivation)),
            ContentType::Meditation => self.view.view(id!(btn_meditation)),
            ContentType::Fiction => self.view.view(id!(btn_fiction)),
        }
    }

    fn icon_view(&self, content_type: ContentType) -> ViewRef {
        match content_type {
            ContentType::Story => self.view.view(id!(btn_story.icon)),
            ContentType::Motivation => self.view.view(id!(btn_motivation.icon)),
            ContentType::Meditation => self.view.view(id!(btn_meditation.icon)),
            ContentType::Fiction => self.view.view(id!(btn_fiction.icon)),
        }
    }

    fn label(&self, content_type: ContentType) -> LabelRef {
        match content_type {
            ContentType::Story => self.view.label(id!(btn_story.lbl)),
            ContentType::Motivation => self.view.label(id!(btn_motivation.lbl)),
            ContentType::Meditation => self.view.label(id!(btn_meditation.lbl)),
            ContentType::Fiction => self.view.label(id!(btn_fiction.lbl)),
        }
    }

    /// Mark the given type selected and clear the others
    pub fn set_selected(&mut self, cx: &mut Cx, selected: ContentType) {
        self.selected = selected;

        for content_type in ContentType::ALL {
            let value = if content_type == selected { 1.0 } else { 0.0 };
            self.button_view(content_type).apply_over(cx, live!{
                draw_bg: { selected: (value), hover: 0.0 }
            });
            self.icon_view(content_type).apply_over(cx, live!{
                draw_bg: { selected: (value) }
            });
            self.label(content_type).apply_over(cx, live!{
                draw_text: { selected: (value) }
            });
        }

        self.view.redraw(cx);
    }

    /// Apply dark mode animation value
    pub fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.dark_mode = dark_mode;

        for content_type in ContentType::ALL {
            self.button_view(content_type).apply_over(cx, live!{
                draw_bg: { dark_mode: (dark_mode) }
            });
            self.icon_view(content_type).apply_over(cx, live!{
                draw_bg: { dark_mode: (dark_mode) }
            });
            self.label(content_type).apply_over(cx, live!{
                draw_text: { dark_mode: (dark_mode) }
            });
        }

        self.view.redraw(cx);
    }
}

impl TypePickerRef {
    /// Mark the given type selected
    pub fn set_selected(&self, cx: &mut Cx, selected: ContentType) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_selected(cx, selected);
        }
    }

    /// The type selected in this event cycle, if any
    pub fn selected(&self, actions: &Actions) -> Option<ContentType> {
        if let TypePickerAction::Selected(content_type) =
            actions.find_widget_action(self.widget_uid()).cast()
        {
            Some(content_type)
        } else {
            None
        }
    }
}

impl Themeable for TypePickerRef {
    fn apply_dark_mode(&self, cx: &mut Cx, dark_mode: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.apply_dark_mode(cx, dark_mode);
        }
    }
}
