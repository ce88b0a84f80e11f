//! Selection state for the generation form
//!
//! Holds the four pieces of UI state behind the main screen: content type,
//! mood, requested duration, and the play/pause flag. The enums are the
//! single source of truth for the picker widgets: each exposes an ordered
//! `ALL` array plus `value()`/`label()` pairs, so the UI iterates the
//! enumeration instead of duplicating literals.

use crate::generator::ContentParams;

/// Minimum requested duration in minutes
pub const DURATION_MIN: u32 = 1;

/// Maximum requested duration in minutes
pub const DURATION_MAX: u32 = 30;

/// Default requested duration in minutes
pub const DURATION_DEFAULT: u32 = 5;

/// Category of audio content the user wants generated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ContentType {
    #[default]
    Story,
    Motivation,
    Meditation,
    Fiction,
}

impl ContentType {
    /// All content types in display order
    pub const ALL: [ContentType; 4] = [
        ContentType::Story,
        ContentType::Motivation,
        ContentType::Meditation,
        ContentType::Fiction,
    ];

    /// Stable identifier, as sent to the generation seam
    pub fn value(&self) -> &'static str {
        match self {
            ContentType::Story => "story",
            ContentType::Motivation => "motivation",
            ContentType::Meditation => "meditation",
            ContentType::Fiction => "fiction",
        }
    }

    /// Display label for picker buttons
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Story => "Stories",
            ContentType::Motivation => "Motivation",
            ContentType::Meditation => "Meditation",
            ContentType::Fiction => "Fiction",
        }
    }
}

/// Desired emotional tone for generated content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mood {
    #[default]
    Happy,
    Relaxed,
    Energetic,
    Focused,
}

impl Mood {
    /// All moods in display order
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Relaxed, Mood::Energetic, Mood::Focused];

    /// Stable identifier, as sent to the generation seam
    pub fn value(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Relaxed => "relaxed",
            Mood::Energetic => "energetic",
            Mood::Focused => "focused",
        }
    }

    /// Display label for mood chips
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Relaxed => "Relaxed",
            Mood::Energetic => "Energetic",
            Mood::Focused => "Focused",
        }
    }
}

/// Current form selections plus the UI-only playback flag.
///
/// All mutation goes through the setters so the duration bound holds even if
/// a control misbehaves.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    content_type: ContentType,
    mood: Mood,
    duration_minutes: u32,
    playing: bool,
}

impl Selection {
    pub fn new() -> Self {
        Self {
            content_type: ContentType::default(),
            mood: Mood::default(),
            duration_minutes: DURATION_DEFAULT,
            playing: false,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Replace the selected content type
    pub fn set_content_type(&mut self, content_type: ContentType) {
        self.content_type = content_type;
    }

    /// Replace the selected mood
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// Set the requested duration, clamped to [DURATION_MIN, DURATION_MAX].
    ///
    /// The slider already enforces the bound; clamping here keeps the
    /// invariant independent of the control.
    pub fn set_duration(&mut self, minutes: u32) {
        self.duration_minutes = minutes.clamp(DURATION_MIN, DURATION_MAX);
    }

    /// Flip the play/pause flag. No real audio resource exists.
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Snapshot the current (type, mood, duration) for the generation seam
    pub fn params(&self) -> ContentParams {
        ContentParams {
            content_type: self.content_type,
            mood: self.mood,
            duration_minutes: self.duration_minutes,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sel = Selection::new();
        assert_eq!(sel.content_type(), ContentType::Story);
        assert_eq!(sel.mood(), Mood::Happy);
        assert_eq!(sel.duration_minutes(), DURATION_DEFAULT);
        assert!(!sel.is_playing());
    }

    #[test]
    fn test_single_selection_per_enum() {
        let mut sel = Selection::new();

        for ct in ContentType::ALL {
            sel.set_content_type(ct);
            assert_eq!(sel.content_type(), ct);
        }

        // Mood selection is independent of content type
        for mood in Mood::ALL {
            sel.set_mood(mood);
            assert_eq!(sel.mood(), mood);
            assert_eq!(sel.content_type(), ContentType::Fiction);
        }
    }

    #[test]
    fn test_duration_in_range() {
        let mut sel = Selection::new();

        for v in DURATION_MIN..=DURATION_MAX {
            sel.set_duration(v);
            assert_eq!(sel.duration_minutes(), v);
        }
    }

    #[test]
    fn test_duration_clamped() {
        let mut sel = Selection::new();

        sel.set_duration(0);
        assert_eq!(sel.duration_minutes(), DURATION_MIN);

        sel.set_duration(31);
        assert_eq!(sel.duration_minutes(), DURATION_MAX);

        sel.set_duration(9999);
        assert_eq!(sel.duration_minutes(), DURATION_MAX);
    }

    #[test]
    fn test_playback_round_trip() {
        let mut sel = Selection::new();

        sel.toggle_playback();
        assert!(sel.is_playing());
        sel.toggle_playback();
        assert!(!sel.is_playing());
    }

    #[test]
    fn test_params_snapshot() {
        let mut sel = Selection::new();
        sel.set_content_type(ContentType::Meditation);
        sel.set_mood(Mood::Focused);
        sel.set_duration(12);

        let params = sel.params();
        assert_eq!(params.content_type, ContentType::Meditation);
        assert_eq!(params.mood, Mood::Focused);
        assert_eq!(params.duration_minutes, 12);
    }

    #[test]
    fn test_enum_values_and_labels() {
        assert_eq!(ContentType::Story.value(), "story");
        assert_eq!(ContentType::Story.label(), "Stories");
        assert_eq!(ContentType::Meditation.value(), "meditation");
        assert_eq!(Mood::Focused.value(), "focused");
        assert_eq!(Mood::Energetic.label(), "Energetic");
    }

    #[test]
    fn test_all_arrays_ordered() {
        assert_eq!(ContentType::ALL[0], ContentType::Story);
        assert_eq!(ContentType::ALL[3], ContentType::Fiction);
        assert_eq!(Mood::ALL[0], Mood::Happy);
        assert_eq!(Mood::ALL[3], Mood::Focused);
    }
}
