// Player configuration

use crate::error::{AudioError, Result};
use crate::stream::StreamType;
use std::time::Duration;

/// Default interval between forwarded fill-level events
pub const DEFAULT_FILL_LEVEL_THROTTLE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Android stream the players are routed to
    pub stream_type: StreamType,
    /// Give up on a URI if no completion arrives in time. `None` waits forever.
    pub completion_timeout: Option<Duration>,
    /// Check local files exist before handing them to the platform
    pub check_local_files: bool,
    pub fill_level_throttle: Duration,
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.completion_timeout == Some(Duration::ZERO) {
            return Err(AudioError::InvalidConfig(
                "completion timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            stream_type: StreamType::default(),
            completion_timeout: None,
            check_local_files: true,
            fill_level_throttle: DEFAULT_FILL_LEVEL_THROTTLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PlayerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stream_type, StreamType::Alarm);
        assert!(config.completion_timeout.is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = PlayerConfig {
            completion_timeout: Some(Duration::ZERO),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(AudioError::InvalidConfig(_))));
    }
}
