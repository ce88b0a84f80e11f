//! KukuVerse application root
//!
//! Owns the shared [`KukuAppData`], wires widget actions to state changes,
//! drives the theme transition animation, and polls the generator worker for
//! status updates on a timer.

use kuku_ui::{
    FilePreferenceStore, GenerationStatus, KukuAppData, OsSystemTheme, Themeable, ThemeManager,
    StubGenerator, GeneratorHandle, THEME_TRANSITION_DURATION,
};
use makepad_widgets::*;
use once_cell::sync::OnceCell;

use crate::cli::Args;
use crate::widgets::{
    DurationSliderWidgetRefExt, KukuHeaderWidgetRefExt, MoodPickerWidgetRefExt,
    PlayerBarWidgetRefExt, TypePickerWidgetRefExt,
};

static CLI_ARGS: OnceCell<Args> = OnceCell::new();

/// Stash parsed CLI args before the UI starts
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::widgets::header::KukuHeader;
    use crate::widgets::type_picker::TypePicker;
    use crate::widgets::mood_picker::MoodPicker;
    use crate::widgets::duration_slider::DurationSlider;
    use crate::widgets::player_bar::PlayerBar;

    // Page background: soft lavender in light mode, deep violet in dark
    APP_BG = vec4(0.953, 0.933, 0.980, 1.0)
    APP_BG_DARK = vec4(0.102, 0.071, 0.184, 1.0)
    CARD_BG = vec4(1.0, 1.0, 1.0, 0.85)
    CARD_BG_DARK = vec4(0.157, 0.122, 0.267, 1.0)
    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    TEXT_PRIMARY_DARK = vec4(0.957, 0.953, 0.976, 1.0)
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    TEXT_SECONDARY_DARK = vec4(0.702, 0.690, 0.788, 1.0)
    PURPLE_500 = vec4(0.659, 0.333, 0.969, 1.0)
    PINK_500 = vec4(0.925, 0.282, 0.600, 1.0)
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    SectionTitle = <Label> {
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 14.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
    }

    // Pill button with a horizontal purple-to-pink gradient
    GenerateButton = <Button> {
        width: Fill, height: 52
        align: {x: 0.5, y: 0.5}
        draw_text: {
            text_style: { font_size: 14.0 }
            fn get_color(self) -> vec4 {
                return (WHITE);
            }
        }
        draw_bg: {
            instance hover: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 14.0);
                let grad = mix((PURPLE_500), (PINK_500), self.pos.x);
                sdf.fill(mix(grad, mix(grad, (WHITE), 0.15), self.hover));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
    }

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(1100, 860), title: "KukuVerse" }
            pass: { clear_color: (APP_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Down
                show_bg: true
                draw_bg: {
                    instance dark_mode: 0.0
                    fn pixel(self) -> vec4 {
                        return mix((APP_BG), (APP_BG_DARK), self.dark_mode);
                    }
                }

                header = <KukuHeader> {}

                content = <ScrollYView> {
                    width: Fill, height: Fill
                    flow: Down
                    align: {x: 0.5}
                    padding: {left: 32, right: 32, top: 8, bottom: 32}
                    scroll_bars: <ScrollBars> {
                        show_scroll_x: false
                        show_scroll_y: true
                    }

                    card = <RoundedView> {
                        width: Fill, height: Fit
                        flow: Down
                        spacing: 22
                        padding: 28
                        show_bg: true
                        draw_bg: {
                            instance dark_mode: 0.0
                            border_radius: 18.0
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                                sdf.fill(mix((CARD_BG), (CARD_BG_DARK), self.dark_mode));
                                return sdf.result;
                            }
                        }

                        type_section = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 12

                            type_title = <SectionTitle> { text: "Choose Content Type" }
                            type_picker = <TypePicker> {}
                        }

                        mood_section = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 12

                            mood_title = <SectionTitle> { text: "Select Mood" }
                            mood_picker = <MoodPicker> {}
                        }

                        duration_section = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 12

                            duration_title = <SectionTitle> { text: "Duration (minutes)" }
                            duration_slider = <DurationSlider> {}
                        }

                        generate_row = <View> {
                            width: Fill, height: Fit
                            flow: Down
                            spacing: 10

                            generate_btn = <GenerateButton> { text: "Generate Content" }

                            gen_status = <Label> {
                                text: ""
                                draw_text: {
                                    instance dark_mode: 0.0
                                    text_style: { font_size: 11.0 }
                                    fn get_color(self) -> vec4 {
                                        return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                                    }
                                }
                            }
                        }

                        player = <PlayerBar> {}
                    }
                }
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    #[rust]
    app_data: KukuAppData,

    #[rust]
    initialized: bool,

    /// Polls the generator worker for status updates
    #[rust]
    gen_timer: Timer,

    #[rust]
    theme_anim_active: bool,

    // 0.0 is a sentinel: capture the actual time on the first NextFrame
    #[rust]
    theme_anim_start: f64,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        crate::widgets::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        if let Event::Startup = event {
            self.init(cx);
        }

        if self.gen_timer.is_event(event).is_some() {
            self.poll_generator(cx);
        }

        if let Event::NextFrame(nf) = event {
            if self.theme_anim_active {
                self.advance_theme_animation(cx, nf.time);
            }
        }

        self.ui
            .handle_event(cx, event, &mut Scope::with_data(&mut self.app_data));

        if let Event::Actions(actions) = event {
            self.handle_actions(cx, actions);
        }
    }
}

impl App {
    fn init(&mut self, cx: &mut Cx) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        let args = cli_args();

        let mut theme =
            ThemeManager::init(Box::new(FilePreferenceStore::open_default()), &OsSystemTheme);
        if args.dark_mode {
            theme.set_dark(true);
        }

        self.app_data = KukuAppData::new(theme, GeneratorHandle::spawn(StubGenerator));

        ::log::info!(
            "KukuVerse initialized (dark mode: {})",
            self.app_data.is_dark_mode()
        );

        self.gen_timer = cx.start_interval(0.1);

        // Sync widgets with the restored state
        let selection = self.app_data.selection();
        let (content_type, mood, duration) = (
            selection.content_type(),
            selection.mood(),
            selection.duration_minutes(),
        );
        self.ui
            .type_picker(id!(type_picker))
            .set_selected(cx, content_type);
        self.ui.mood_picker(id!(mood_picker)).set_selected(cx, mood);
        self.ui
            .duration_slider(id!(duration_slider))
            .set_value(cx, duration);
        self.ui.player_bar(id!(player)).set_minutes(cx, duration);

        let is_dark = self.app_data.is_dark_mode();
        self.ui.kuku_header(id!(header)).set_dark_mode(cx, is_dark);
        self.apply_dark_mode(cx, self.app_data.dark_mode_value());
    }

    fn handle_actions(&mut self, cx: &mut Cx, actions: &Actions) {
        if self.ui.kuku_header(id!(header)).theme_toggled(actions) {
            self.app_data.toggle_dark_mode();
            let is_dark = self.app_data.is_dark_mode();
            ::log::debug!("Theme toggled, dark mode: {}", is_dark);

            self.ui.kuku_header(id!(header)).set_dark_mode(cx, is_dark);
            self.theme_anim_active = true;
            self.theme_anim_start = 0.0;
            cx.new_next_frame();
        }

        if let Some(content_type) = self.ui.type_picker(id!(type_picker)).selected(actions) {
            self.app_data.selection_mut().set_content_type(content_type);
        }

        if let Some(mood) = self.ui.mood_picker(id!(mood_picker)).selected(actions) {
            self.app_data.selection_mut().set_mood(mood);
        }

        if let Some(minutes) = self.ui.duration_slider(id!(duration_slider)).changed(actions) {
            self.app_data.selection_mut().set_duration(minutes);
            self.ui.player_bar(id!(player)).set_minutes(cx, minutes);
        }

        if self.ui.button(id!(generate_btn)).clicked(actions) {
            self.app_data.request_generation();
            self.ui
                .label(id!(gen_status))
                .set_text(cx, "Generating...");
        }

        if self.ui.player_bar(id!(player)).play_pause_clicked(actions) {
            self.app_data.selection_mut().toggle_playback();
            let playing = self.app_data.selection().is_playing();
            self.ui.player_bar(id!(player)).set_playing(cx, playing);
        }
    }

    fn poll_generator(&mut self, cx: &mut Cx) {
        let Some(status) = self.app_data.generator().take_update() else {
            return;
        };

        match status {
            GenerationStatus::Ready(track) => {
                ::log::info!("Generation complete: {}", track.title);
                self.ui.label(id!(gen_status)).set_text(cx, "Ready to play");
                self.ui
                    .player_bar(id!(player))
                    .set_track(cx, &track.title, track.duration_minutes);
            }
            GenerationStatus::Failed(msg) => {
                ::log::warn!("Generation failed: {}", msg);
                self.ui
                    .label(id!(gen_status))
                    .set_text(cx, &format!("Generation failed: {}", msg));
            }
            GenerationStatus::Pending | GenerationStatus::Idle => {}
        }
    }

    fn advance_theme_animation(&mut self, cx: &mut Cx, time: f64) {
        if self.theme_anim_start == 0.0 {
            self.theme_anim_start = time;
        }
        let elapsed = time - self.theme_anim_start;

        let in_progress = self
            .app_data
            .theme_mut()
            .theme_mut()
            .update_animation(elapsed, THEME_TRANSITION_DURATION);

        let value = self.app_data.dark_mode_value();
        self.apply_dark_mode(cx, value);

        if in_progress {
            cx.new_next_frame();
        } else {
            self.theme_anim_active = false;
        }
    }

    /// Fan the animation value out to every themed surface
    fn apply_dark_mode(&mut self, cx: &mut Cx, dark_mode: f64) {
        self.ui.view(id!(body)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });
        self.ui.view(id!(content.card)).apply_over(cx, live!{
            draw_bg: { dark_mode: (dark_mode) }
        });

        for title in [id!(type_title), id!(mood_title), id!(duration_title)] {
            self.ui.label(title).apply_over(cx, live!{
                draw_text: { dark_mode: (dark_mode) }
            });
        }
        self.ui.label(id!(gen_status)).apply_over(cx, live!{
            draw_text: { dark_mode: (dark_mode) }
        });

        self.ui.kuku_header(id!(header)).apply_dark_mode(cx, dark_mode);
        self.ui.type_picker(id!(type_picker)).apply_dark_mode(cx, dark_mode);
        self.ui.mood_picker(id!(mood_picker)).apply_dark_mode(cx, dark_mode);
        self.ui
            .duration_slider(id!(duration_slider))
            .apply_dark_mode(cx, dark_mode);
        self.ui.player_bar(id!(player)).apply_dark_mode(cx, dark_mode);

        self.ui.redraw(cx);
    }
}

app_main!(App);
