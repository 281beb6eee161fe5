// Android audio stream types (same values as android.media.AudioManager.STREAM_*)

use crate::error::AudioError;
use std::fmt;
use std::str::FromStr;

/// Stream the player is routed to, which selects the volume slider and policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamType {
    Voice,
    System,
    Ring,
    Media,
    #[default]
    Alarm,
    Notification,
}

impl StreamType {
    pub const ALL: [StreamType; 6] = [
        StreamType::Voice,
        StreamType::System,
        StreamType::Ring,
        StreamType::Media,
        StreamType::Alarm,
        StreamType::Notification,
    ];

    /// Value for the `androidPlaybackStreamType` configuration key
    pub fn as_raw(&self) -> i32 {
        match self {
            StreamType::Voice => 0,
            StreamType::System => 1,
            StreamType::Ring => 2,
            StreamType::Media => 3,
            StreamType::Alarm => 4,
            StreamType::Notification => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StreamType::Voice => "voice",
            StreamType::System => "system",
            StreamType::Ring => "ring",
            StreamType::Media => "media",
            StreamType::Alarm => "alarm",
            StreamType::Notification => "notification",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StreamType {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        if lowered == "music" {
            return Ok(StreamType::Media);
        }
        StreamType::ALL
            .iter()
            .copied()
            .find(|stream| stream.name() == lowered)
            .ok_or_else(|| {
                AudioError::InvalidConfig(format!(
                    "Unknown stream type '{}', expected one of: voice, system, ring, media, alarm, notification",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_alarm() {
        assert_eq!(StreamType::default(), StreamType::Alarm);
        assert_eq!(StreamType::default().as_raw(), 4);
    }

    #[test]
    fn test_parse_names() {
        for stream in StreamType::ALL {
            assert_eq!(stream.name().parse::<StreamType>().unwrap(), stream);
        }
        assert_eq!("MEDIA".parse::<StreamType>().unwrap(), StreamType::Media);
        assert_eq!("music".parse::<StreamType>().unwrap(), StreamType::Media);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("speaker".parse::<StreamType>().is_err());
    }

    #[test]
    fn test_raw_values_are_distinct_and_ordered() {
        let raw: Vec<i32> = StreamType::ALL.iter().map(|s| s.as_raw()).collect();
        assert_eq!(raw, vec![0, 1, 2, 3, 4, 5]);
    }
}
