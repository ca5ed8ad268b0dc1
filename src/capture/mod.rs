/// Sample conversion and WAV encoding
pub mod audio;
/// Injected host capabilities (file staging, transcription)
pub mod bridge;
/// Recording state machine
pub mod recorder;

pub use bridge::{CaptureBridge, CaptureError, TempDirBridge, Transcriber};
pub use recorder::{CaptureState, VoiceCapture};
