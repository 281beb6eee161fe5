// Playback outcomes and observer events
// Fill-level notifications arrive on the platform audio thread at a high rate, so they are throttled

use crate::state::PlayerState;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How a single playback ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// Play head reached the end of the content
    Completed,
    /// Play head stalled; the player is treated as finished
    Stalled,
    /// Local file does not exist, no player was created
    Missing,
    /// Prefetch underflowed with an empty buffer, the source could not be read
    Underflow,
    /// The player exposed no play interface and was never started
    Unplayable,
}

impl PlaybackOutcome {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            PlaybackOutcome::Missing | PlaybackOutcome::Underflow | PlaybackOutcome::Unplayable
        )
    }
}

impl fmt::Display for PlaybackOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            PlaybackOutcome::Completed => "completed",
            PlaybackOutcome::Stalled => "stalled",
            PlaybackOutcome::Missing => "missing",
            PlaybackOutcome::Underflow => "underflow",
            PlaybackOutcome::Unplayable => "unplayable",
        };
        f.write_str(text)
    }
}

/// Player event types
#[derive(Debug, Clone)]
pub enum PlayerEvent {
    /// Player state changed
    StateChanged {
        old_state: PlayerState,
        new_state: PlayerState,
    },

    /// A URI is about to be played
    TrackStarted { index: usize, uri: String },

    /// A URI finished playing
    TrackFinished {
        index: usize,
        uri: String,
        outcome: PlaybackOutcome,
    },

    /// Prefetch status reported by the platform
    PrefetchStatusChanged { status: &'static str, fill_level: i16 },

    /// Prefetch fill level, in permille
    FillLevelChanged { permille: i16 },

    /// Playback error occurred
    Error { message: String },
}

/// Player callback trait
/// Implementations should be lightweight and non-blocking
pub trait PlayerCallback: Send + Sync {
    /// Called when an event occurs
    /// May be called from the platform audio thread
    fn on_event(&self, event: PlayerEvent);
}

/// Throttled callback wrapper
pub struct ThrottledCallback {
    inner: Arc<dyn PlayerCallback>,
    last_fill_update: Mutex<Option<Instant>>,
    fill_update_interval: Duration,
}

impl ThrottledCallback {
    pub fn new(callback: Arc<dyn PlayerCallback>, update_interval: Duration) -> Self {
        Self {
            inner: callback,
            last_fill_update: Mutex::new(None),
            fill_update_interval: update_interval,
        }
    }

    pub fn dispatch(&self, event: PlayerEvent) {
        match &event {
            PlayerEvent::FillLevelChanged { .. } => {
                let mut last_update = self.last_fill_update.lock();
                let due = last_update
                    .map(|at| at.elapsed() >= self.fill_update_interval)
                    .unwrap_or(true);
                if due {
                    *last_update = Some(Instant::now());
                    self.inner.on_event(event);
                }
            }
            _ => self.inner.on_event(event),
        }
    }
}

/// Callback manager for handling multiple callbacks
pub struct CallbackManager {
    callbacks: Mutex<Vec<Arc<ThrottledCallback>>>,
}

impl CallbackManager {
    pub fn new() -> Self {
        Self {
            callbacks: Mutex::new(Vec::new()),
        }
    }

    pub fn add_callback(&self, callback: Arc<dyn PlayerCallback>, throttle: Duration) {
        let throttled = Arc::new(ThrottledCallback::new(callback, throttle));
        self.callbacks.lock().push(throttled);
    }

    pub fn clear_callbacks(&self) {
        self.callbacks.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.callbacks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dispatch_event(&self, event: PlayerEvent) {
        // Snapshot so a callback may register or clear callbacks without deadlocking
        let callbacks: Vec<_> = self.callbacks.lock().clone();
        for callback in callbacks.iter() {
            callback.dispatch(event.clone());
        }
    }
}

impl Default for CallbackManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Callback that writes every event to the log
pub struct LoggingCallback;

impl PlayerCallback for LoggingCallback {
    fn on_event(&self, event: PlayerEvent) {
        match event {
            PlayerEvent::StateChanged {
                old_state,
                new_state,
            } => log::debug!("Player state {:?} -> {:?}", old_state, new_state),
            PlayerEvent::TrackStarted { index, uri } => {
                log::info!("[{}] Playing {}", index + 1, uri)
            }
            PlayerEvent::TrackFinished {
                index,
                uri,
                outcome,
            } => {
                if outcome.is_error() {
                    log::warn!("[{}] {} ended: {}", index + 1, uri, outcome)
                } else {
                    log::info!("[{}] {} ended: {}", index + 1, uri, outcome)
                }
            }
            PlayerEvent::PrefetchStatusChanged { status, fill_level } => {
                log::debug!("Prefetch status {} (fill level {}‰)", status, fill_level)
            }
            PlayerEvent::FillLevelChanged { permille } => {
                log::trace!("Prefetch fill level {}‰", permille)
            }
            PlayerEvent::Error { message } => log::error!("{}", message),
        }
    }
}

/// Simple callback implementation for testing
#[cfg(test)]
pub struct TestCallback {
    events: Mutex<Vec<PlayerEvent>>,
}

#[cfg(test)]
impl TestCallback {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn get_events(&self) -> Vec<PlayerEvent> {
        self.events.lock().clone()
    }
}

#[cfg(test)]
impl PlayerCallback for TestCallback {
    fn on_event(&self, event: PlayerEvent) {
        self.events.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_throttled_fill_level() {
        let test_callback = Arc::new(TestCallback::new());
        let throttled = ThrottledCallback::new(test_callback.clone(), Duration::from_millis(100));

        for i in 0..10 {
            throttled.dispatch(PlayerEvent::FillLevelChanged { permille: i * 100 });
            thread::sleep(Duration::from_millis(5));
        }

        // First update always passes, the rest fall inside the interval
        let events = test_callback.get_events();
        assert!(!events.is_empty());
        assert!(events.len() < 10);
    }

    #[test]
    fn test_non_throttled_events() {
        let test_callback = Arc::new(TestCallback::new());
        let throttled = ThrottledCallback::new(test_callback.clone(), Duration::from_millis(100));

        throttled.dispatch(PlayerEvent::StateChanged {
            old_state: PlayerState::Idle,
            new_state: PlayerState::Realized,
        });
        throttled.dispatch(PlayerEvent::TrackFinished {
            index: 0,
            uri: "/sdcard/a.ogg".to_string(),
            outcome: PlaybackOutcome::Completed,
        });

        assert_eq!(test_callback.get_events().len(), 2);
    }

    #[test]
    fn test_manager_fans_out() {
        let manager = CallbackManager::new();
        let first = Arc::new(TestCallback::new());
        let second = Arc::new(TestCallback::new());
        manager.add_callback(first.clone(), Duration::ZERO);
        manager.add_callback(second.clone(), Duration::ZERO);
        assert_eq!(manager.len(), 2);

        manager.dispatch_event(PlayerEvent::Error {
            message: "boom".to_string(),
        });

        assert_eq!(first.get_events().len(), 1);
        assert_eq!(second.get_events().len(), 1);

        manager.clear_callbacks();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_outcome_error_classification() {
        assert!(!PlaybackOutcome::Completed.is_error());
        assert!(!PlaybackOutcome::Stalled.is_error());
        assert!(PlaybackOutcome::Missing.is_error());
        assert!(PlaybackOutcome::Underflow.is_error());
        assert!(PlaybackOutcome::Unplayable.is_error());
        assert_eq!(PlaybackOutcome::Underflow.to_string(), "underflow");
    }
}
