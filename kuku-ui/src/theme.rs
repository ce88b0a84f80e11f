//! Runtime theme state and persistence
//!
//! Two layers:
//!
//! 1. [`KukuTheme`] — the current dark-mode boolean plus an animation value
//!    (0.0 light, 1.0 dark) that shaders consume through their
//!    `instance dark_mode` variables.
//! 2. [`ThemeManager`] — wires the theme to a [`PreferenceStore`] and a
//!    [`SystemTheme`] signal: stored preference wins at startup, the system
//!    signal is the fallback, and every toggle persists in the same step it
//!    applies. A failed write is logged and the session carries on with the
//!    new theme.

use crate::preferences::{PreferenceStore, SystemTheme, THEME_KEY};

/// Duration of the theme transition animation in seconds
pub const THEME_TRANSITION_DURATION: f64 = 0.25;

/// Runtime dark-mode state with animated transitions
#[derive(Clone, Debug)]
pub struct KukuTheme {
    /// Whether dark mode is enabled
    pub dark_mode: bool,

    /// Animation value (0.0 = light, 1.0 = dark) for shader instance variables
    pub dark_mode_anim: f64,
}

impl KukuTheme {
    /// Create a theme with the given dark mode state, animation settled
    pub fn with_dark_mode(dark: bool) -> Self {
        Self {
            dark_mode: dark,
            dark_mode_anim: if dark { 1.0 } else { 0.0 },
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark_mode
    }

    /// Toggle dark mode. Animate with `update_animation`, or snap with
    /// `set_dark_mode`.
    pub fn toggle(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Set dark mode immediately, no animation
    pub fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
        self.dark_mode_anim = if dark { 1.0 } else { 0.0 };
    }

    /// Advance the transition animation.
    ///
    /// Returns `true` while the animation is still in progress.
    pub fn update_animation(&mut self, elapsed: f64, duration: f64) -> bool {
        let target = if self.dark_mode { 1.0 } else { 0.0 };

        if elapsed >= duration {
            self.dark_mode_anim = target;
            false
        } else {
            // Ease-out cubic
            let t = (elapsed / duration).min(1.0);
            let ease_t = 1.0 - (1.0 - t).powi(3);

            let start = if self.dark_mode { 0.0 } else { 1.0 };
            self.dark_mode_anim = start + (target - start) * ease_t;

            true
        }
    }

    /// The animation value once the transition settles
    pub fn target_value(&self) -> f64 {
        if self.dark_mode {
            1.0
        } else {
            0.0
        }
    }
}

impl Default for KukuTheme {
    fn default() -> Self {
        Self::with_dark_mode(false)
    }
}

/// Owns the theme and keeps it in sync with the preference store
pub struct ThemeManager {
    theme: KukuTheme,
    store: Box<dyn PreferenceStore>,
}

impl ThemeManager {
    /// Resolve the initial theme: stored preference, else system signal,
    /// else light.
    pub fn init(store: Box<dyn PreferenceStore>, system: &dyn SystemTheme) -> Self {
        let dark = match store.get(THEME_KEY).as_deref() {
            Some("dark") => true,
            Some("light") => false,
            Some(other) => {
                log::warn!("Ignoring unrecognized theme preference: {:?}", other);
                system.prefers_dark()
            }
            None => system.prefers_dark(),
        };

        Self {
            theme: KukuTheme::with_dark_mode(dark),
            store,
        }
    }

    pub fn theme(&self) -> &KukuTheme {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut KukuTheme {
        &mut self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme and persist the new value in the same step.
    ///
    /// Storage failure degrades to a session-only preference.
    pub fn toggle(&mut self) {
        self.theme.toggle();
        self.persist();
    }

    /// Set the theme and persist, skipping the write when nothing changed
    pub fn set_dark(&mut self, dark: bool) {
        if self.theme.is_dark() == dark {
            return;
        }
        self.theme.set_dark_mode(dark);
        self.persist();
    }

    fn persist(&mut self) {
        let value = if self.theme.is_dark() { "dark" } else { "light" };
        if let Err(e) = self.store.set(THEME_KEY, value) {
            log::warn!("Failed to persist theme preference: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::{FixedSystemTheme, MemoryStore};
    use anyhow::bail;

    #[test]
    fn test_theme_default_light() {
        let theme = KukuTheme::default();
        assert!(!theme.is_dark());
        assert_eq!(theme.dark_mode_anim, 0.0);
    }

    #[test]
    fn test_theme_toggle_round_trip() {
        let mut theme = KukuTheme::default();

        theme.toggle();
        assert!(theme.is_dark());
        theme.toggle();
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_theme_animation() {
        let mut theme = KukuTheme::default();
        theme.toggle();

        let in_progress = theme.update_animation(0.125, 0.25);
        assert!(in_progress);
        assert!(theme.dark_mode_anim > 0.0);
        assert!(theme.dark_mode_anim < 1.0);

        let in_progress = theme.update_animation(0.25, 0.25);
        assert!(!in_progress);
        assert_eq!(theme.dark_mode_anim, 1.0);
    }

    #[test]
    fn test_init_no_pref_follows_system() {
        let mgr = ThemeManager::init(Box::new(MemoryStore::new()), &FixedSystemTheme(true));
        assert!(mgr.is_dark());

        let mgr = ThemeManager::init(Box::new(MemoryStore::new()), &FixedSystemTheme(false));
        assert!(!mgr.is_dark());
    }

    #[test]
    fn test_init_stored_pref_wins() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "light").unwrap();

        let mgr = ThemeManager::init(Box::new(store), &FixedSystemTheme(true));
        assert!(!mgr.is_dark());
    }

    #[test]
    fn test_init_unrecognized_pref_falls_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();

        let mgr = ThemeManager::init(Box::new(store), &FixedSystemTheme(true));
        assert!(mgr.is_dark());
    }

    #[test]
    fn test_toggle_persists_round_trip() {
        let store = MemoryStore::new();

        let mut mgr = ThemeManager::init(Box::new(store.clone()), &FixedSystemTheme(false));
        mgr.toggle();
        assert!(mgr.is_dark());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        // Re-initializing from the same storage reproduces the theme
        let mgr2 = ThemeManager::init(Box::new(store.clone()), &FixedSystemTheme(false));
        assert!(mgr2.is_dark());
    }

    #[test]
    fn test_set_dark_skips_redundant_write() {
        let store = MemoryStore::new();
        let mut mgr = ThemeManager::init(Box::new(store.clone()), &FixedSystemTheme(false));

        mgr.set_dark(false);
        assert!(store.get(THEME_KEY).is_none());

        mgr.set_dark(true);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            bail!("storage unavailable")
        }
    }

    #[test]
    fn test_storage_failure_keeps_session_theme() {
        let mut mgr = ThemeManager::init(Box::new(BrokenStore), &FixedSystemTheme(false));

        mgr.toggle();
        assert!(mgr.is_dark());

        mgr.toggle();
        assert!(!mgr.is_dark());
    }
}
