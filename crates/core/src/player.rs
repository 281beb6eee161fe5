// Backend trait and the sequential playback session

use crate::config::PlayerConfig;
use crate::error::Result;
use crate::event::{CallbackManager, PlaybackOutcome, PlayerCallback, PlayerEvent};
use crate::uri::MediaUri;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Platform playback backend
///
/// Implementations own the long-lived audio objects (engine, output mix) and
/// create one short-lived player per URI.
pub trait AudioBackend {
    /// Backend name for logging
    fn name(&self) -> &'static str;

    /// Create a player for `uri`, start it, block until it reports an outcome,
    /// then destroy it. Events raised on the platform thread go to `events`.
    fn play_uri(&mut self, uri: &MediaUri, events: &Arc<CallbackManager>) -> Result<PlaybackOutcome>;
}

#[derive(Debug, Clone)]
pub struct TrackReport {
    pub uri: String,
    pub outcome: PlaybackOutcome,
    pub elapsed: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct SessionReport {
    pub tracks: Vec<TrackReport>,
}

impl SessionReport {
    /// Tracks that played to the end or stalled
    pub fn completed(&self) -> usize {
        self.tracks.iter().filter(|t| !t.outcome.is_error()).count()
    }

    /// Tracks that underflowed or could not be played
    pub fn failed(&self) -> usize {
        self.tracks.iter().filter(|t| t.outcome.is_error()).count()
    }

    pub fn total_elapsed(&self) -> Duration {
        self.tracks.iter().map(|t| t.elapsed).sum()
    }
}

/// Plays inputs one after another through a single backend
pub struct Session<B: AudioBackend> {
    backend: B,
    config: PlayerConfig,
    events: Arc<CallbackManager>,
}

impl<B: AudioBackend> Session<B> {
    pub fn new(backend: B, config: PlayerConfig) -> Self {
        Self {
            backend,
            config,
            events: Arc::new(CallbackManager::new()),
        }
    }

    pub fn add_callback(&self, callback: Arc<dyn PlayerCallback>) {
        self.events
            .add_callback(callback, self.config.fill_level_throttle);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Play a single input to completion.
    /// Missing, underflow and unplayable outcomes are reported, not returned as errors.
    pub fn play(&mut self, index: usize, input: &str) -> Result<TrackReport> {
        let uri = MediaUri::parse(input)?;

        self.events.dispatch_event(PlayerEvent::TrackStarted {
            index,
            uri: uri.to_string(),
        });

        let started = Instant::now();
        let outcome = match self.check_exists(&uri) {
            Some(outcome) => outcome,
            None => self.backend.play_uri(&uri, &self.events)?,
        };
        let elapsed = started.elapsed();

        match outcome {
            PlaybackOutcome::Missing => log::error!("No such file: {}", uri),
            PlaybackOutcome::Underflow => {
                log::error!("Underflow when prefetching data and fill level zero: {}", uri)
            }
            PlaybackOutcome::Unplayable => log::error!("Cannot play '{}'", uri),
            PlaybackOutcome::Completed | PlaybackOutcome::Stalled => {}
        }

        self.events.dispatch_event(PlayerEvent::TrackFinished {
            index,
            uri: uri.to_string(),
            outcome,
        });

        Ok(TrackReport {
            uri: uri.to_string(),
            outcome,
            elapsed,
        })
    }

    /// A missing local file ends the track without creating a player
    fn check_exists(&self, uri: &MediaUri) -> Option<PlaybackOutcome> {
        if !self.config.check_local_files {
            return None;
        }
        match uri.ensure_exists() {
            Ok(()) => None,
            Err(e) => {
                log::debug!("{}", e);
                Some(PlaybackOutcome::Missing)
            }
        }
    }

    /// Play every input in order. The first error aborts the run.
    pub fn run<I, S>(&mut self, inputs: I) -> Result<SessionReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        log::info!("Starting session on {} backend", self.backend.name());
        let mut report = SessionReport::default();

        for (index, input) in inputs.into_iter().enumerate() {
            match self.play(index, input.as_ref()) {
                Ok(track) => report.tracks.push(track),
                Err(e) => {
                    self.events.dispatch_event(PlayerEvent::Error {
                        message: format!("{}: {}", input.as_ref(), e),
                    });
                    return Err(e);
                }
            }
        }

        log::info!(
            "Session finished: {} played, {} failed",
            report.completed(),
            report.failed()
        );
        Ok(report)
    }
}
