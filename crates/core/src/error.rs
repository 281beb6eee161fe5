// Error handling for the player

use thiserror::Error;

/// Audio player error types
#[derive(Debug, Error)]
pub enum AudioError {
    /// Failed to bring up the audio engine or output mix
    #[error("Initialization error: {0}")]
    InitializationError(String),

    /// Invalid state transition
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input could not be turned into a media URI
    #[error("Invalid URI '{input}': {reason}")]
    InvalidUri { input: String, reason: String },

    /// Local media file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// No completion was signalled before the deadline
    #[error("Timed out after {seconds}s waiting for '{uri}' to finish")]
    Timeout { uri: String, seconds: u64 },

    /// Backend not available on this target
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// A platform audio call returned a non-success result
    #[error("{operation} failed: {reason} (0x{code:x})")]
    Backend {
        operation: &'static str,
        code: u32,
        reason: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for audio operations
pub type Result<T> = std::result::Result<T, AudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display() {
        let err = AudioError::Backend {
            operation: "CreateAudioPlayer",
            code: 0x9,
            reason: "content unsupported",
        };
        assert_eq!(
            err.to_string(),
            "CreateAudioPlayer failed: content unsupported (0x9)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AudioError = io.into();
        assert!(matches!(err, AudioError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
