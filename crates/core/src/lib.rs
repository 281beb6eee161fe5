// Core types and traits for play-audio

pub mod completion;
pub mod config;
pub mod error;
pub mod event;
pub mod player;
pub mod state;
pub mod stream;
pub mod uri;

// Re-export commonly used types
pub use completion::CompletionSignal;
pub use config::PlayerConfig;
pub use error::{AudioError, Result};
pub use event::{CallbackManager, LoggingCallback, PlaybackOutcome, PlayerCallback, PlayerEvent};
pub use player::{AudioBackend, Session, SessionReport, TrackReport};
pub use state::{PlayerState, PlayerStateContainer};
pub use stream::StreamType;
pub use uri::{MediaUri, UriKind};
