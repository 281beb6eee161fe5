// AudioBackend implementation over OpenSL ES

use play_audio_core::{
    AudioBackend, CallbackManager, MediaUri, PlaybackOutcome, PlayerConfig, Result,
};
use std::sync::Arc;

#[cfg(not(target_os = "android"))]
use play_audio_core::AudioError;

#[cfg(target_os = "android")]
use crate::engine::{Engine, OutputMix};
#[cfg(target_os = "android")]
use crate::player::UriPlayer;

/// One engine and one output mix, shared by a fresh player per URI
#[cfg(target_os = "android")]
pub struct OpenSlBackend {
    // Dropped in declaration order: output mix before engine
    output_mix: OutputMix,
    engine: Engine,
    config: PlayerConfig,
}

#[cfg(target_os = "android")]
impl OpenSlBackend {
    pub fn new(config: PlayerConfig) -> Result<Self> {
        config.validate()?;
        log::info!("Initializing OpenSL ES backend (stream: {})", config.stream_type);

        let engine = Engine::create()?;
        let output_mix = OutputMix::create(&engine)?;

        Ok(Self {
            output_mix,
            engine,
            config,
        })
    }
}

#[cfg(target_os = "android")]
impl AudioBackend for OpenSlBackend {
    fn name(&self) -> &'static str {
        "opensles"
    }

    fn play_uri(&mut self, uri: &MediaUri, events: &Arc<CallbackManager>) -> Result<PlaybackOutcome> {
        let mut player = UriPlayer::create(
            &self.engine,
            &self.output_mix,
            uri,
            self.config.stream_type,
            events.clone(),
        )?;
        let outcome = player.play_to_end(self.config.completion_timeout)?;
        drop(player);
        log::debug!("Player for {} destroyed", uri);
        Ok(outcome)
    }
}

#[cfg(not(target_os = "android"))]
pub struct OpenSlBackend {
    _private: (),
}

#[cfg(not(target_os = "android"))]
impl OpenSlBackend {
    pub fn new(_config: PlayerConfig) -> Result<Self> {
        Err(AudioError::UnsupportedPlatform(
            "OpenSL ES backend is only available on Android".to_string(),
        ))
    }
}

#[cfg(not(target_os = "android"))]
impl AudioBackend for OpenSlBackend {
    fn name(&self) -> &'static str {
        "opensles"
    }

    fn play_uri(&mut self, _uri: &MediaUri, _events: &Arc<CallbackManager>) -> Result<PlaybackOutcome> {
        Err(AudioError::UnsupportedPlatform(
            "OpenSL ES backend is only available on Android".to_string(),
        ))
    }
}

#[cfg(all(test, not(target_os = "android")))]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_off_android() {
        let err = OpenSlBackend::new(PlayerConfig::default()).err().unwrap();
        assert!(matches!(err, AudioError::UnsupportedPlatform(_)));
    }
}
