//! # KukuVerse UI library
//!
//! UI-independent state and services behind the KukuVerse shell:
//!
//! - **Selection** — content type, mood, duration, and playback flag,
//!   with enumeration tables the picker widgets render from
//! - **Theme** — runtime dark mode with animated transitions, persisted
//!   through an injected preference store
//! - **Generator** — the asynchronous content-generation seam with a
//!   worker-thread handle and a stub backend
//! - **App data** — the `Scope`-injected container the shell passes to
//!   widgets
//!
//! Everything here is testable without a window; the Makepad dependency is
//! limited to the `Themeable` trait signature.

pub mod app_data;
pub mod generator;
pub mod preferences;
pub mod selection;
pub mod theme;
pub mod traits;

pub use app_data::KukuAppData;
pub use generator::{
    ContentGenerator, ContentParams, GeneratedTrack, GenerationError, GenerationStatus,
    GeneratorHandle, StubGenerator,
};
pub use preferences::{
    FilePreferenceStore, FixedSystemTheme, MemoryStore, OsSystemTheme, PreferenceStore,
    Preferences, SystemTheme, THEME_KEY,
};
pub use selection::{
    ContentType, Mood, Selection, DURATION_DEFAULT, DURATION_MAX, DURATION_MIN,
};
pub use theme::{KukuTheme, ThemeManager, THEME_TRANSITION_DURATION};
pub use traits::Themeable;
