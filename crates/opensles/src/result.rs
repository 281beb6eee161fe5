// SLresult checking

use crate::sys::*;
use play_audio_core::AudioError;
use thiserror::Error;

/// A platform call that returned something other than `SL_RESULT_SUCCESS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} failed: {} (0x{code:x})", describe(.code))]
pub struct SlError {
    pub operation: &'static str,
    pub code: SLresult,
}

impl SlError {
    pub fn reason(&self) -> &'static str {
        reason(self.code)
    }
}

/// Human readable name of an SLresult code
pub fn reason(code: SLresult) -> &'static str {
    match code {
        SL_RESULT_SUCCESS => "success",
        SL_RESULT_PRECONDITIONS_VIOLATED => "preconditions violated",
        SL_RESULT_PARAMETER_INVALID => "parameter invalid",
        SL_RESULT_MEMORY_FAILURE => "memory failure",
        SL_RESULT_RESOURCE_ERROR => "resource error",
        SL_RESULT_RESOURCE_LOST => "resource lost",
        SL_RESULT_IO_ERROR => "io error",
        SL_RESULT_BUFFER_INSUFFICIENT => "buffer insufficient",
        SL_RESULT_CONTENT_CORRUPTED => "content corrupted",
        SL_RESULT_CONTENT_UNSUPPORTED => "content unsupported",
        SL_RESULT_CONTENT_NOT_FOUND => "content not found",
        SL_RESULT_PERMISSION_DENIED => "permission denied",
        SL_RESULT_FEATURE_UNSUPPORTED => "feature unsupported",
        SL_RESULT_INTERNAL_ERROR => "internal error",
        SL_RESULT_UNKNOWN_ERROR => "unknown error",
        SL_RESULT_OPERATION_ABORTED => "operation aborted",
        SL_RESULT_CONTROL_LOST => "control lost",
        _ => "unrecognized result",
    }
}

fn describe(code: &SLresult) -> &'static str {
    reason(*code)
}

pub fn check(operation: &'static str, result: SLresult) -> Result<(), SlError> {
    if result == SL_RESULT_SUCCESS {
        Ok(())
    } else {
        log::error!("{} returned 0x{:x} ({})", operation, result, reason(result));
        Err(SlError {
            operation,
            code: result,
        })
    }
}

impl From<SlError> for AudioError {
    fn from(err: SlError) -> Self {
        AudioError::Backend {
            operation: err.operation,
            code: err.code,
            reason: err.reason(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes() {
        assert!(check("Realize", SL_RESULT_SUCCESS).is_ok());
    }

    #[test]
    fn test_failure_carries_operation_and_code() {
        let err = check("CreateAudioPlayer", SL_RESULT_CONTENT_NOT_FOUND).unwrap_err();
        assert_eq!(err.operation, "CreateAudioPlayer");
        assert_eq!(err.reason(), "content not found");
        assert_eq!(err.to_string(), "CreateAudioPlayer failed: content not found (0xa)");
    }

    #[test]
    fn test_every_standard_code_is_named() {
        for code in SL_RESULT_PRECONDITIONS_VIOLATED..=SL_RESULT_CONTROL_LOST {
            assert_ne!(reason(code), "unrecognized result", "code 0x{:x}", code);
        }
        assert_eq!(reason(0x1234), "unrecognized result");
    }

    #[test]
    fn test_converts_to_audio_error() {
        let err: AudioError = SlError {
            operation: "Realize",
            code: SL_RESULT_RESOURCE_ERROR,
        }
        .into();
        match err {
            AudioError::Backend {
                operation,
                code,
                reason,
            } => {
                assert_eq!(operation, "Realize");
                assert_eq!(code, SL_RESULT_RESOURCE_ERROR);
                assert_eq!(reason, "resource error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
