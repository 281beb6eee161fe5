// Completion rendezvous between the platform callback thread and the waiting caller

use crate::event::PlaybackOutcome;
use parking_lot::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// One-shot signal carrying the outcome of a single playback.
///
/// The platform audio thread calls [`signal`](Self::signal) from its callback;
/// the thread that started playback blocks in [`wait`](Self::wait). The first
/// outcome wins, so a player that reports both a stall and the end of stream
/// still wakes the waiter exactly once with a stable answer.
pub struct CompletionSignal {
    outcome: Mutex<Option<PlaybackOutcome>>,
    condition: Condvar,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self {
            outcome: Mutex::new(None),
            condition: Condvar::new(),
        }
    }

    /// Store `outcome` and wake every waiter.
    /// Returns false if an earlier outcome was already delivered.
    pub fn signal(&self, outcome: PlaybackOutcome) -> bool {
        let mut slot = self.outcome.lock();
        if slot.is_some() {
            log::trace!("Ignoring late completion signal: {:?}", outcome);
            return false;
        }
        *slot = Some(outcome);
        self.condition.notify_all();
        true
    }

    /// Block until an outcome has been signalled.
    pub fn wait(&self) -> PlaybackOutcome {
        let mut slot = self.outcome.lock();
        loop {
            if let Some(outcome) = *slot {
                return outcome;
            }
            self.condition.wait(&mut slot);
        }
    }

    /// Block until an outcome has been signalled or `timeout` elapses.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<PlaybackOutcome> {
        let deadline = Instant::now() + timeout;
        let mut slot = self.outcome.lock();
        loop {
            if let Some(outcome) = *slot {
                return Some(outcome);
            }
            if self.condition.wait_until(&mut slot, deadline).timed_out() {
                return *slot;
            }
        }
    }

    /// Wait with an optional deadline.
    pub fn wait_for(&self, timeout: Option<Duration>) -> Option<PlaybackOutcome> {
        match timeout {
            Some(timeout) => self.wait_timeout(timeout),
            None => Some(self.wait()),
        }
    }

    pub fn is_signalled(&self) -> bool {
        self.outcome.lock().is_some()
    }

    pub fn outcome(&self) -> Option<PlaybackOutcome> {
        *self.outcome.lock()
    }
}

impl Default for CompletionSignal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_signal_from_other_thread() {
        let signal = Arc::new(CompletionSignal::new());
        let producer = signal.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            producer.signal(PlaybackOutcome::Completed)
        });

        assert_eq!(signal.wait(), PlaybackOutcome::Completed);
        assert!(handle.join().unwrap());
    }

    #[test]
    fn test_signal_before_wait_is_not_lost() {
        let signal = CompletionSignal::new();
        assert!(signal.signal(PlaybackOutcome::Underflow));
        assert_eq!(signal.wait(), PlaybackOutcome::Underflow);
    }

    #[test]
    fn test_first_outcome_wins() {
        let signal = CompletionSignal::new();
        assert!(signal.signal(PlaybackOutcome::Stalled));
        assert!(!signal.signal(PlaybackOutcome::Completed));
        assert_eq!(signal.outcome(), Some(PlaybackOutcome::Stalled));
        assert_eq!(signal.wait(), PlaybackOutcome::Stalled);
    }

    #[test]
    fn test_wait_timeout_expires() {
        let signal = CompletionSignal::new();
        let started = Instant::now();
        assert_eq!(signal.wait_timeout(Duration::from_millis(30)), None);
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert!(!signal.is_signalled());
    }

    #[test]
    fn test_wait_timeout_returns_outcome() {
        let signal = Arc::new(CompletionSignal::new());
        let producer = signal.clone();
        thread::spawn(move || {
            producer.signal(PlaybackOutcome::Completed);
        });

        let outcome = signal.wait_for(Some(Duration::from_secs(5)));
        assert_eq!(outcome, Some(PlaybackOutcome::Completed));
    }

    #[test]
    fn test_many_waiters_all_wake() {
        let signal = Arc::new(CompletionSignal::new());
        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let signal = signal.clone();
                thread::spawn(move || signal.wait())
            })
            .collect();

        thread::sleep(Duration::from_millis(10));
        signal.signal(PlaybackOutcome::Completed);

        for waiter in waiters {
            assert_eq!(waiter.join().unwrap(), PlaybackOutcome::Completed);
        }
    }
}
