//! Shared app data for Makepad scope injection
//!
//! `KukuAppData` is the container the root app passes to child widgets
//! through `Scope::with_data()`. Widgets read it with
//! `scope.data.get::<KukuAppData>()`; mutation stays in the root app's
//! event handler.

use crate::generator::{GeneratorHandle, StubGenerator};
use crate::preferences::{FixedSystemTheme, MemoryStore};
use crate::selection::Selection;
use crate::theme::ThemeManager;

/// All shared state behind the KukuVerse screen
pub struct KukuAppData {
    selection: Selection,
    theme: ThemeManager,
    generator: GeneratorHandle,
}

impl KukuAppData {
    pub fn new(theme: ThemeManager, generator: GeneratorHandle) -> Self {
        Self {
            selection: Selection::new(),
            theme,
            generator,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeManager {
        &mut self.theme
    }

    pub fn generator(&self) -> &GeneratorHandle {
        &self.generator
    }

    // --- Convenience ---

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// Dark mode animation value (0.0 = light, 1.0 = dark)
    pub fn dark_mode_value(&self) -> f64 {
        self.theme.theme().dark_mode_anim
    }

    /// Toggle dark mode, persisting the new preference
    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
    }

    /// Snapshot the current selections and queue a generation request
    pub fn request_generation(&self) {
        self.generator.request(self.selection.params());
    }
}

impl Default for KukuAppData {
    fn default() -> Self {
        // Session-only placeholder until the app installs real storage
        Self::new(
            ThemeManager::init(Box::new(MemoryStore::new()), &FixedSystemTheme(false)),
            GeneratorHandle::spawn(StubGenerator),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::GenerationStatus;
    use crate::selection::{ContentType, Mood};
    use std::time::{Duration, Instant};

    #[test]
    fn test_app_data_default() {
        let data = KukuAppData::default();
        assert!(!data.is_dark_mode());
        assert_eq!(data.dark_mode_value(), 0.0);
        assert_eq!(data.generator().status(), GenerationStatus::Idle);
    }

    #[test]
    fn test_dark_mode_toggle() {
        let mut data = KukuAppData::default();

        data.toggle_dark_mode();
        assert!(data.is_dark_mode());
        data.toggle_dark_mode();
        assert!(!data.is_dark_mode());
    }

    #[test]
    fn test_request_generation_uses_current_selection() {
        let mut data = KukuAppData::default();
        data.selection_mut().set_content_type(ContentType::Meditation);
        data.selection_mut().set_mood(Mood::Focused);
        data.selection_mut().set_duration(12);

        data.request_generation();

        let deadline = Instant::now() + Duration::from_secs(5);
        let track = loop {
            if let GenerationStatus::Ready(track) = data.generator().status() {
                break track;
            }
            assert!(Instant::now() < deadline, "generation never completed");
            std::thread::sleep(Duration::from_millis(5));
        };

        assert_eq!(track.title, "Focused Meditation");
        assert_eq!(track.duration_minutes, 12);
    }
}
