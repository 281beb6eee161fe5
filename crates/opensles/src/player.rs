// URI audio player: one per input, destroyed once playback has ended

use crate::engine::{Engine, Object, OutputMix};
use crate::events::{
    play_event_outcome, prefetch_outcome, prefetch_status_name, PLAY_EVENT_MASK,
    PREFETCH_EVENT_MASK,
};
use crate::result::check;
use crate::sys::*;
use play_audio_core::{
    AudioError, CallbackManager, CompletionSignal, MediaUri, PlaybackOutcome, PlayerEvent,
    PlayerState, PlayerStateContainer, Result, StreamType,
};
use std::ffi::CString;
use std::mem::size_of;
use std::os::raw::c_void;
use std::ptr;
use std::sync::Arc;
use std::time::Duration;

/// State shared with the platform callback thread
struct CallbackContext {
    signal: CompletionSignal,
    events: Arc<CallbackManager>,
}

impl CallbackContext {
    fn finish(&self, outcome: PlaybackOutcome) {
        if self.signal.signal(outcome) {
            log::debug!("Playback finished: {}", outcome);
        }
    }
}

unsafe extern "C" fn play_callback(_caller: SLPlayItf, context: *mut c_void, event: SLuint32) {
    if context.is_null() {
        return;
    }
    let context = &*(context as *const CallbackContext);
    if let Some(outcome) = play_event_outcome(event) {
        context.finish(outcome);
    }
}

unsafe extern "C" fn prefetch_callback(
    caller: SLPrefetchStatusItf,
    context: *mut c_void,
    event: SLuint32,
) {
    if context.is_null() {
        return;
    }
    let context = &*(context as *const CallbackContext);

    let mut level: SLpermille = 0;
    ((**caller).GetFillLevel)(caller, &mut level);

    if event & SL_PREFETCHEVENT_FILLLEVELCHANGE != 0 {
        context
            .events
            .dispatch_event(PlayerEvent::FillLevelChanged { permille: level });
    }

    if event & SL_PREFETCHEVENT_STATUSCHANGE != 0 {
        let mut status: SLuint32 = 0;
        ((**caller).GetPrefetchStatus)(caller, &mut status);
        context.events.dispatch_event(PlayerEvent::PrefetchStatusChanged {
            status: prefetch_status_name(status),
            fill_level: level,
        });
        if let Some(outcome) = prefetch_outcome(event, level, status) {
            context.finish(outcome);
        }
    }
}

/// Audio player reading from a URI into the output mix
///
/// Field order matters: the player object is destroyed before the callback
/// context it points at is freed.
pub struct UriPlayer {
    _object: Object,
    play: SLPlayItf,
    prefetch: SLPrefetchStatusItf,
    _playback_rate: SLPlaybackRateItf,
    state: PlayerStateContainer,
    uri: String,
    context: Box<CallbackContext>,
    // Kept alive for the player's lifetime, the platform may read it lazily
    _uri_c: CString,
}

impl UriPlayer {
    /// Create and realize a player for `uri`, routed to `stream_type`
    pub fn create(
        engine: &Engine,
        output_mix: &OutputMix,
        uri: &MediaUri,
        stream_type: StreamType,
        events: Arc<CallbackManager>,
    ) -> Result<Self> {
        let uri_c = uri.to_c_string()?;

        let mut loc_uri = SLDataLocator_URI {
            locatorType: SL_DATALOCATOR_URI,
            URI: uri_c.as_ptr() as *mut SLchar,
        };
        let mut format_mime = SLDataFormat_MIME {
            formatType: SL_DATAFORMAT_MIME,
            mimeType: ptr::null_mut(),
            containerType: SL_CONTAINERTYPE_UNSPECIFIED,
        };
        let mut audio_src = SLDataSource {
            pLocator: &mut loc_uri as *mut _ as *mut c_void,
            pFormat: &mut format_mime as *mut _ as *mut c_void,
        };
        let mut loc_outmix = SLDataLocator_OutputMix {
            locatorType: SL_DATALOCATOR_OUTPUTMIX,
            outputMix: output_mix.object(),
        };
        let mut audio_sink = SLDataSink {
            pLocator: &mut loc_outmix as *mut _ as *mut c_void,
            pFormat: ptr::null_mut(),
        };

        // Android configuration must be requested up front and applied before Realize
        let wanted = unsafe {
            [
                SL_IID_ANDROIDCONFIGURATION,
                SL_IID_VOLUME,
                SL_IID_PREFETCHSTATUS,
                SL_IID_PLAYBACKRATE,
                SL_IID_EFFECTSEND,
            ]
        };
        let required = [SL_BOOLEAN_TRUE; 5];

        let itf = engine.itf();
        let mut raw: SLObjectItf = ptr::null();
        let result = unsafe {
            ((**itf).CreateAudioPlayer)(
                itf,
                &mut raw,
                &mut audio_src,
                &mut audio_sink,
                wanted.len() as SLuint32,
                wanted.as_ptr(),
                required.as_ptr(),
            )
        };
        check("CreateAudioPlayer", result)?;
        let object = unsafe { Object::from_raw(raw, "audio player")? };

        let config = unsafe {
            object.interface::<SLAndroidConfigurationItf_>(
                SL_IID_ANDROIDCONFIGURATION,
                "GetInterface(SL_IID_ANDROIDCONFIGURATION)",
            )?
        };
        let stream = stream_type.as_raw() as SLint32;
        let result = unsafe {
            ((**config).SetConfiguration)(
                config,
                SL_ANDROID_KEY_STREAM_TYPE.as_ptr(),
                &stream as *const SLint32 as *const c_void,
                size_of::<SLint32>() as SLuint32,
            )
        };
        check("SetConfiguration(stream type)", result)?;
        log::debug!("Stream type set to {}", stream_type);

        // Realize allocates resources; the data source is only opened once playing
        object.realize("AudioPlayer::Realize")?;

        let prefetch = unsafe {
            object.interface::<SLPrefetchStatusItf_>(
                SL_IID_PREFETCHSTATUS,
                "GetInterface(SL_IID_PREFETCHSTATUS)",
            )?
        };
        let play =
            unsafe { object.interface::<SLPlayItf_>(SL_IID_PLAY, "GetInterface(SL_IID_PLAY)")? };
        let playback_rate = unsafe {
            object.interface::<c_void>(SL_IID_PLAYBACKRATE, "GetInterface(SL_IID_PLAYBACKRATE)")?
        };

        let state = PlayerStateContainer::new();
        let old_state = state.transition(PlayerState::Realized)?;
        events.dispatch_event(PlayerEvent::StateChanged {
            old_state,
            new_state: PlayerState::Realized,
        });

        Ok(Self {
            _object: object,
            play,
            prefetch,
            _playback_rate: playback_rate,
            state,
            uri: uri.to_string(),
            context: Box::new(CallbackContext {
                signal: CompletionSignal::new(),
                events,
            }),
            _uri_c: uri_c,
        })
    }

    /// Start playback and block until completion, a stall, or an underflow
    pub fn play_to_end(&mut self, timeout: Option<Duration>) -> Result<PlaybackOutcome> {
        if self.play.is_null() {
            return Ok(PlaybackOutcome::Unplayable);
        }

        let context = &*self.context as *const CallbackContext as *mut c_void;
        let play = self.play;
        let prefetch = self.prefetch;

        let started = (|| -> Result<()> {
            unsafe {
                check(
                    "SetCallbackEventsMask(play)",
                    ((**play).SetCallbackEventsMask)(play, PLAY_EVENT_MASK),
                )?;
                check(
                    "RegisterCallback(play)",
                    ((**play).RegisterCallback)(play, Some(play_callback), context),
                )?;
                check(
                    "RegisterCallback(prefetch)",
                    ((**prefetch).RegisterCallback)(prefetch, Some(prefetch_callback), context),
                )?;
                check(
                    "SetCallbackEventsMask(prefetch)",
                    ((**prefetch).SetCallbackEventsMask)(prefetch, PREFETCH_EVENT_MASK),
                )?;
                check(
                    "SetPlayState(PLAYING)",
                    ((**play).SetPlayState)(play, SL_PLAYSTATE_PLAYING),
                )?;
            }
            Ok(())
        })();
        if let Err(e) = started {
            self.set_state(PlayerState::Error);
            return Err(e);
        }
        self.set_state(PlayerState::Playing);

        match self.context.signal.wait_for(timeout) {
            Some(outcome) => {
                self.set_state(PlayerState::Finished);
                Ok(outcome)
            }
            None => {
                self.set_state(PlayerState::Error);
                Err(AudioError::Timeout {
                    uri: self.uri.clone(),
                    seconds: timeout.map(|t| t.as_secs()).unwrap_or_default(),
                })
            }
        }
    }

    fn set_state(&self, new_state: PlayerState) {
        match self.state.transition(new_state) {
            Ok(old_state) => self.context.events.dispatch_event(PlayerEvent::StateChanged {
                old_state,
                new_state,
            }),
            Err(e) => log::warn!("{}", e),
        }
    }
}
