// Decoding of play and prefetch callback events into playback outcomes

use crate::sys::*;
use play_audio_core::PlaybackOutcome;

/// Events the play interface is asked to report
pub const PLAY_EVENT_MASK: SLuint32 = SL_PLAYEVENT_HEADSTALLED | SL_PLAYEVENT_HEADATEND;

/// Events the prefetch interface is asked to report
pub const PREFETCH_EVENT_MASK: SLuint32 =
    SL_PREFETCHEVENT_FILLLEVELCHANGE | SL_PREFETCHEVENT_STATUSCHANGE;

/// Outcome carried by a play callback, if any. End of stream wins over a stall.
pub fn play_event_outcome(event: SLuint32) -> Option<PlaybackOutcome> {
    if event & SL_PLAYEVENT_HEADATEND != 0 {
        Some(PlaybackOutcome::Completed)
    } else if event & SL_PLAYEVENT_HEADSTALLED != 0 {
        Some(PlaybackOutcome::Stalled)
    } else {
        None
    }
}

/// A status change to underflow while the fill level is zero means the source
/// cannot be read at all, and no completion event will follow.
pub fn prefetch_outcome(
    event: SLuint32,
    fill_level: SLpermille,
    status: SLuint32,
) -> Option<PlaybackOutcome> {
    let status_changed = event & SL_PREFETCHEVENT_STATUSCHANGE != 0;
    if status_changed && fill_level == 0 && status == SL_PREFETCHSTATUS_UNDERFLOW {
        Some(PlaybackOutcome::Underflow)
    } else {
        None
    }
}

pub fn prefetch_status_name(status: SLuint32) -> &'static str {
    match status {
        SL_PREFETCHSTATUS_UNDERFLOW => "underflow",
        SL_PREFETCHSTATUS_SUFFICIENTDATA => "sufficient data",
        SL_PREFETCHSTATUS_OVERFLOW => "overflow",
        _ => "unknown",
    }
}
