use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

use super::audio::{encode_wav, to_16khz_mono};
use super::bridge::{CaptureBridge, CaptureError};
use crate::config::CaptureConfig;

/// Voice capture state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// Waiting for `start`
    Idle,
    /// Buffering audio
    Recording,
    /// Staging and transcribing the buffered audio
    Processing,
}

/// Records audio chunks and turns them into text through a [`CaptureBridge`]
///
/// Idle → Recording on [`start`](Self::start), Recording → Processing → Idle
/// on [`stop`](Self::stop). The capture always returns to Idle, even when
/// staging or transcription fails.
pub struct VoiceCapture<B> {
    bridge: B,
    state: CaptureState,
    samples: Vec<f32>,
    sample_rate: u32,
    channels: u16,
}

impl<B: CaptureBridge> VoiceCapture<B> {
    /// Capture for interleaved `f32` audio at `sample_rate` with `channels`
    pub const fn new(bridge: B, sample_rate: u32, channels: u16) -> Self {
        Self {
            bridge,
            state: CaptureState::Idle,
            samples: Vec::new(),
            sample_rate,
            channels,
        }
    }

    /// Capture using the audio format from configuration
    pub const fn from_config(bridge: B, config: &CaptureConfig) -> Self {
        Self::new(bridge, config.sample_rate, config.channels)
    }

    /// Current state
    pub const fn state(&self) -> CaptureState {
        self.state
    }

    /// Injected host capabilities
    pub const fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Begin a new recording, discarding any previously buffered audio
    ///
    /// # Errors
    /// Returns [`CaptureError::NotIdle`] if a recording is already running
    pub fn start(&mut self) -> Result<(), CaptureError> {
        if self.state != CaptureState::Idle {
            debug!(state = ?self.state, "start ignored");
            return Err(CaptureError::NotIdle(self.state));
        }
        self.samples.clear();
        self.state = CaptureState::Recording;
        info!("recording started");
        Ok(())
    }

    /// Buffer a chunk of audio
    ///
    /// Returns `false` when the chunk is dropped: empty chunks, or chunks
    /// arriving while not recording.
    pub fn push_samples(&mut self, chunk: &[f32]) -> bool {
        if self.state != CaptureState::Recording || chunk.is_empty() {
            return false;
        }
        self.samples.extend_from_slice(chunk);
        true
    }

    /// Stop recording and transcribe what was captured
    ///
    /// The audio is converted to 16 kHz mono WAV, staged as
    /// `recording-<unix millis>.wav`, transcribed, then removed. Failure to
    /// remove the staged file is logged, not returned.
    ///
    /// # Errors
    /// Returns [`CaptureError::NotRecording`] if no recording is running, or
    /// the first encoding, staging or transcription error
    pub fn stop(&mut self) -> Result<String, CaptureError> {
        if self.state != CaptureState::Recording {
            debug!(state = ?self.state, "stop ignored");
            return Err(CaptureError::NotRecording);
        }

        self.state = CaptureState::Processing;
        info!(samples = self.samples.len(), "recording stopped, processing");

        let samples = std::mem::take(&mut self.samples);
        let result = self.transcribe_samples(&samples);

        self.state = CaptureState::Idle;
        match &result {
            Ok(text) => info!(chars = text.len(), "capture complete"),
            Err(e) => warn!("capture failed: {e}"),
        }
        result
    }

    fn transcribe_samples(&self, samples: &[f32]) -> Result<String, CaptureError> {
        let mono = to_16khz_mono(samples, self.sample_rate, self.channels);
        let wav = encode_wav(&mono)?;

        let path = self.bridge.save_file(&recording_file_name(), &wav)?;
        let transcription = self.bridge.transcribe_audio(&path);

        if let Err(e) = self.bridge.delete_file(&path) {
            warn!("failed to remove staged recording: {e}");
        }

        transcription
    }
}

/// `recording-<unix millis>.wav`
fn recording_file_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis());
    format!("recording-{millis}.wav")
}
