// OpenSL ES playback backend
//
// FFI declarations, result codes and event decoding build everywhere so they can be
// tested on the host; the engine and player objects only exist on Android.

pub mod backend;
pub mod events;
pub mod result;
pub mod sys;

#[cfg(target_os = "android")]
mod engine;
#[cfg(target_os = "android")]
mod player;

pub use backend::OpenSlBackend;
#[cfg(target_os = "android")]
pub use engine::{Engine, OutputMix};
#[cfg(target_os = "android")]
pub use player::UriPlayer;
pub use result::SlError;
