// Per-track failures on the terminal
// On Android the log goes to logcat, which a shell user does not see

use parking_lot::Mutex;
use play_audio_core::{PlaybackOutcome, PlayerCallback, PlayerEvent};
use std::io::Write;

/// Writes a line for every track that did not play
pub struct TerminalCallback<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalCallback<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[cfg(target_os = "android")]
impl TerminalCallback<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> PlayerCallback for TerminalCallback<W> {
    fn on_event(&self, event: PlayerEvent) {
        let line = match event {
            PlayerEvent::TrackFinished { uri, outcome, .. } => match outcome {
                PlaybackOutcome::Missing => format!("No such file: {}", uri),
                PlaybackOutcome::Underflow => {
                    format!("Underflow when prefetching data and fill level zero: {}", uri)
                }
                PlaybackOutcome::Unplayable => format!("Cannot play '{}'", uri),
                PlaybackOutcome::Completed | PlaybackOutcome::Stalled => return,
            },
            _ => return,
        };

        let mut out = self.out.lock();
        // Nothing sensible to do if the terminal is gone
        let _ = writeln!(out, "play-audio: {}", line);
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(uri: &str, outcome: PlaybackOutcome) -> PlayerEvent {
        PlayerEvent::TrackFinished {
            index: 0,
            uri: uri.to_string(),
            outcome,
        }
    }

    #[test]
    fn test_reports_failed_tracks() {
        let callback = TerminalCallback::new(Vec::new());
        callback.on_event(finished("/sdcard/gone.ogg", PlaybackOutcome::Missing));
        callback.on_event(finished("/sdcard/bad.ogg", PlaybackOutcome::Underflow));
        callback.on_event(finished("/sdcard/odd.ogg", PlaybackOutcome::Unplayable));

        let text = String::from_utf8(callback.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "play-audio: No such file: /sdcard/gone.ogg",
                "play-audio: Underflow when prefetching data and fill level zero: /sdcard/bad.ogg",
                "play-audio: Cannot play '/sdcard/odd.ogg'",
            ]
        );
    }

    #[test]
    fn test_quiet_for_played_tracks() {
        let callback = TerminalCallback::new(Vec::new());
        callback.on_event(finished("/sdcard/a.ogg", PlaybackOutcome::Completed));
        callback.on_event(finished("/sdcard/b.ogg", PlaybackOutcome::Stalled));
        callback.on_event(PlayerEvent::TrackStarted {
            index: 1,
            uri: "/sdcard/b.ogg".to_string(),
        });
        callback.on_event(PlayerEvent::FillLevelChanged { permille: 0 });

        assert!(callback.into_inner().is_empty());
    }
}
