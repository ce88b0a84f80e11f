//! Content generation seam
//!
//! The Generate button is the one boundary where a real audio backend would
//! plug in. The contract is asynchronous: the UI hands a [`ContentParams`]
//! snapshot to a [`GeneratorHandle`], which runs the [`ContentGenerator`] on a
//! worker thread and reports Pending / Ready / Failed through a shared status
//! the UI polls on an interval timer. The UI thread never blocks.
//!
//! The current backend is [`StubGenerator`]: it logs the parameters it was
//! given and returns a placeholder track.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::selection::{ContentType, Mood};

/// Parameters handed to the generation seam
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentParams {
    pub content_type: ContentType,
    pub mood: Mood,
    pub duration_minutes: u32,
}

impl fmt::Display for ContentParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, mood: {}, duration: {}",
            self.content_type.value(),
            self.mood.value(),
            self.duration_minutes
        )
    }
}

/// Placeholder playable artifact returned by the seam
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTrack {
    pub title: String,
    pub duration_minutes: u32,
}

/// Errors a generation backend can report
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("generation backend unavailable")]
    BackendUnavailable,

    #[error("generation failed: {0}")]
    Failed(String),
}

/// The seam a real content-generation backend implements.
///
/// Runs on the generator worker thread; implementations may block.
pub trait ContentGenerator: Send + 'static {
    fn generate(&self, params: &ContentParams) -> Result<GeneratedTrack, GenerationError>;
}

/// Stub backend: logs its inputs and returns a titled placeholder track.
pub struct StubGenerator;

impl ContentGenerator for StubGenerator {
    fn generate(&self, params: &ContentParams) -> Result<GeneratedTrack, GenerationError> {
        log::info!("Generating content with: {}", params);

        Ok(GeneratedTrack {
            title: format!("{} {}", params.mood.label(), params.content_type.label()),
            duration_minutes: params.duration_minutes,
        })
    }
}

/// Progress of the most recent generation request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Pending,
    Ready(GeneratedTrack),
    Failed(String),
}

/// Commands sent to the generator thread
enum GeneratorCommand {
    Generate(ContentParams),
    Stop,
}

struct SharedGeneratorState {
    status: GenerationStatus,
    dirty: bool,
}

/// Handle to the generator worker thread.
///
/// Requests are queued over a channel and processed in order. Status updates
/// are published to shared state with a dirty flag; the UI drains them with
/// [`GeneratorHandle::take_update`].
pub struct GeneratorHandle {
    command_tx: Sender<GeneratorCommand>,
    state: Arc<Mutex<SharedGeneratorState>>,
}

impl GeneratorHandle {
    /// Spawn the worker thread around the given backend
    pub fn spawn(generator: impl ContentGenerator) -> Self {
        let (command_tx, command_rx) = unbounded::<GeneratorCommand>();

        let state = Arc::new(Mutex::new(SharedGeneratorState {
            status: GenerationStatus::Idle,
            dirty: false,
        }));

        let state_clone = Arc::clone(&state);
        std::thread::spawn(move || {
            run_generator_thread(generator, command_rx, state_clone);
        });

        Self { command_tx, state }
    }

    /// Queue a generation request.
    ///
    /// The status flips to Pending immediately so the UI can show progress
    /// before the worker picks the request up.
    pub fn request(&self, params: ContentParams) {
        {
            let mut state = self.state.lock();
            state.status = GenerationStatus::Pending;
            state.dirty = true;
        }
        let _ = self.command_tx.send(GeneratorCommand::Generate(params));
    }

    /// Current status snapshot
    pub fn status(&self) -> GenerationStatus {
        self.state.lock().status.clone()
    }

    /// Drain the latest status change, if any happened since the last call
    pub fn take_update(&self) -> Option<GenerationStatus> {
        let mut state = self.state.lock();
        if state.dirty {
            state.dirty = false;
            Some(state.status.clone())
        } else {
            None
        }
    }
}

impl Drop for GeneratorHandle {
    fn drop(&mut self) {
        let _ = self.command_tx.send(GeneratorCommand::Stop);
    }
}

fn run_generator_thread(
    generator: impl ContentGenerator,
    command_rx: Receiver<GeneratorCommand>,
    state: Arc<Mutex<SharedGeneratorState>>,
) {
    while let Ok(command) = command_rx.recv() {
        match command {
            GeneratorCommand::Generate(params) => {
                let status = match generator.generate(&params) {
                    Ok(track) => GenerationStatus::Ready(track),
                    Err(e) => {
                        log::warn!("Generation failed: {}", e);
                        GenerationStatus::Failed(e.to_string())
                    }
                };

                let mut s = state.lock();
                s.status = status;
                s.dirty = true;
            }
            GeneratorCommand::Stop => {
                log::info!("Generator thread stopping");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for<F: Fn(&GenerationStatus) -> bool>(
        handle: &GeneratorHandle,
        pred: F,
    ) -> GenerationStatus {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let status = handle.status();
            if pred(&status) {
                return status;
            }
            assert!(Instant::now() < deadline, "timed out waiting for status");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    struct RecordingGenerator {
        seen: Arc<Mutex<Vec<ContentParams>>>,
    }

    impl ContentGenerator for RecordingGenerator {
        fn generate(&self, params: &ContentParams) -> Result<GeneratedTrack, GenerationError> {
            self.seen.lock().push(params.clone());
            Ok(GeneratedTrack {
                title: "test".to_string(),
                duration_minutes: params.duration_minutes,
            })
        }
    }

    struct FailingGenerator;

    impl ContentGenerator for FailingGenerator {
        fn generate(&self, _params: &ContentParams) -> Result<GeneratedTrack, GenerationError> {
            Err(GenerationError::BackendUnavailable)
        }
    }

    fn test_params() -> ContentParams {
        ContentParams {
            content_type: ContentType::Meditation,
            mood: Mood::Focused,
            duration_minutes: 12,
        }
    }

    #[test]
    fn test_stub_generator_echoes_params() {
        let track = StubGenerator.generate(&test_params()).unwrap();
        assert_eq!(track.title, "Focused Meditation");
        assert_eq!(track.duration_minutes, 12);
    }

    #[test]
    fn test_seam_receives_exact_params() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handle = GeneratorHandle::spawn(RecordingGenerator {
            seen: Arc::clone(&seen),
        });

        handle.request(test_params());
        wait_for(&handle, |s| matches!(s, GenerationStatus::Ready(_)));

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], test_params());
    }

    #[test]
    fn test_pending_then_ready() {
        let handle = GeneratorHandle::spawn(StubGenerator);
        assert_eq!(handle.status(), GenerationStatus::Idle);

        handle.request(test_params());
        // Pending is published synchronously by request()
        assert_ne!(handle.status(), GenerationStatus::Idle);

        let status = wait_for(&handle, |s| matches!(s, GenerationStatus::Ready(_)));
        match status {
            GenerationStatus::Ready(track) => {
                assert_eq!(track.title, "Focused Meditation");
                assert_eq!(track.duration_minutes, 12);
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn test_failure_reported() {
        let handle = GeneratorHandle::spawn(FailingGenerator);
        handle.request(test_params());

        let status = wait_for(&handle, |s| matches!(s, GenerationStatus::Failed(_)));
        match status {
            GenerationStatus::Failed(msg) => {
                assert!(msg.contains("unavailable"));
            }
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn test_take_update_drains_once() {
        let handle = GeneratorHandle::spawn(StubGenerator);

        handle.request(test_params());
        wait_for(&handle, |s| matches!(s, GenerationStatus::Ready(_)));

        // Exactly one update left after the status settled
        assert!(handle.take_update().is_some());
        assert!(handle.take_update().is_none());
    }

    #[test]
    fn test_params_display() {
        let text = test_params().to_string();
        assert_eq!(text, "type: meditation, mood: focused, duration: 12");
    }
}
