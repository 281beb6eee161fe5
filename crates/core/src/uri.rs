// Media locators handed to the platform player

use crate::error::{AudioError, Result};
use std::ffi::CString;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriKind {
    /// Filesystem path or `file://` URI
    Local,
    /// Any other scheme, resolved by the platform (http, content, ...)
    Remote,
}

/// A validated URI ready to be passed to the platform as a NUL-terminated string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUri {
    uri: String,
    kind: UriKind,
}

impl MediaUri {
    /// Parse a command line argument.
    ///
    /// Arguments with a scheme are kept verbatim. Bare paths are made absolute,
    /// since the media server resolving them does not share our working directory.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(invalid(input, "empty"));
        }
        if input.contains('\0') {
            return Err(invalid(input, "contains a NUL byte"));
        }

        if let Some(scheme) = scheme_of(input) {
            let kind = if scheme.eq_ignore_ascii_case("file") {
                UriKind::Local
            } else {
                UriKind::Remote
            };
            return Ok(Self {
                uri: input.to_string(),
                kind,
            });
        }

        let path = Path::new(input);
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()?.join(path)
        };
        let uri = absolute
            .to_str()
            .ok_or_else(|| invalid(input, "path is not valid UTF-8"))?
            .to_string();

        Ok(Self {
            uri,
            kind: UriKind::Local,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.uri
    }

    pub fn kind(&self) -> UriKind {
        self.kind
    }

    pub fn is_local(&self) -> bool {
        self.kind == UriKind::Local
    }

    /// Filesystem path for bare local paths.
    /// `file://` URIs may be percent-encoded and are left to the platform to resolve.
    pub fn local_path(&self) -> Option<PathBuf> {
        match self.kind {
            UriKind::Local if scheme_of(&self.uri).is_none() => Some(PathBuf::from(&self.uri)),
            _ => None,
        }
    }

    /// Fail early with a readable error instead of a platform prefetch underflow
    pub fn ensure_exists(&self) -> Result<()> {
        match self.local_path() {
            Some(path) if !path.exists() => Err(AudioError::NotFound(path.display().to_string())),
            _ => Ok(()),
        }
    }

    pub fn to_c_string(&self) -> Result<CString> {
        CString::new(self.uri.as_bytes()).map_err(|_| invalid(&self.uri, "contains a NUL byte"))
    }
}

impl fmt::Display for MediaUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

fn invalid(input: &str, reason: &str) -> AudioError {
    AudioError::InvalidUri {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}

/// RFC 3986 scheme followed by `://`
fn scheme_of(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(scheme)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_uri_kept_verbatim() {
        let uri = MediaUri::parse("http://example.com/stream.mp3").unwrap();
        assert_eq!(uri.as_str(), "http://example.com/stream.mp3");
        assert_eq!(uri.kind(), UriKind::Remote);
        assert!(uri.local_path().is_none());
        assert!(uri.ensure_exists().is_ok());
    }

    #[test]
    fn test_file_scheme_is_local() {
        let uri = MediaUri::parse("file:///sdcard/Music/a.ogg").unwrap();
        assert!(uri.is_local());
        assert_eq!(uri.as_str(), "file:///sdcard/Music/a.ogg");
    }

    #[test]
    fn test_encoded_file_uri_not_reported_missing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("My Song.ogg"), b"OggS").unwrap();

        let encoded = format!("file://{}/My%20Song.ogg", dir.path().display());
        let uri = MediaUri::parse(&encoded).unwrap();
        assert!(uri.is_local());
        assert!(uri.local_path().is_none());
        assert!(uri.ensure_exists().is_ok());
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let uri = MediaUri::parse("sounds/beep.wav").unwrap();
        let expected = std::env::current_dir().unwrap().join("sounds/beep.wav");
        assert_eq!(uri.local_path().unwrap(), expected);
        assert!(Path::new(uri.as_str()).is_absolute());
    }

    #[test]
    fn test_absolute_path_untouched() {
        let uri = MediaUri::parse("/system/media/audio/alarms/Alarm.ogg").unwrap();
        assert_eq!(uri.as_str(), "/system/media/audio/alarms/Alarm.ogg");
    }

    #[test]
    fn test_rejects_empty_and_nul() {
        assert!(matches!(
            MediaUri::parse("  "),
            Err(AudioError::InvalidUri { .. })
        ));
        assert!(matches!(
            MediaUri::parse("a\0b"),
            Err(AudioError::InvalidUri { .. })
        ));
    }

    #[test]
    fn test_malformed_scheme_treated_as_path() {
        let uri = MediaUri::parse("1http://x").unwrap();
        assert!(uri.is_local());
    }

    #[test]
    fn test_ensure_exists() {
        let dir = tempfile::tempdir().unwrap();
        let present = dir.path().join("tone.ogg");
        std::fs::write(&present, b"OggS").unwrap();

        let uri = MediaUri::parse(present.to_str().unwrap()).unwrap();
        assert!(uri.ensure_exists().is_ok());

        let missing = MediaUri::parse(dir.path().join("missing.ogg").to_str().unwrap()).unwrap();
        assert!(matches!(missing.ensure_exists(), Err(AudioError::NotFound(_))));
    }

    #[test]
    fn test_c_string_is_nul_terminated() {
        let uri = MediaUri::parse("/sdcard/a.ogg").unwrap();
        let c = uri.to_c_string().unwrap();
        assert_eq!(c.as_bytes_with_nul().last(), Some(&0));
    }
}
