use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::recorder::CaptureState;

/// Errors that can occur while capturing and transcribing speech
#[derive(Debug, Error)]
pub enum CaptureError {
    /// `start` called while a recording or transcription is in progress
    #[error("cannot start recording while {0:?}")]
    NotIdle(CaptureState),

    /// `stop` called without an active recording
    #[error("no recording in progress")]
    NotRecording,

    /// Failed to write or remove a staged audio file
    #[error("failed to stage audio file {path}: {source}")]
    Staging {
        /// Path of the staged file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode captured samples
    #[error("failed to encode audio: {0}")]
    Encoding(#[from] hound::Error),

    /// The transcription service failed
    #[error("failed to transcribe {path}: {source}")]
    Transcription {
        /// Path of the staged file
        path: String,
        /// Underlying error
        source: anyhow::Error,
    },
}

/// Speech-to-text service (out of process or in-process model)
#[cfg_attr(test, mockall::automock)]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `path`
    ///
    /// # Errors
    /// Returns error if the file cannot be read or inference fails
    fn transcribe(&self, path: &Path) -> anyhow::Result<String>;
}

/// Host capabilities the voice capture needs
///
/// Passed explicitly to [`super::VoiceCapture`] so tests can substitute a fake.
#[cfg_attr(test, mockall::automock)]
pub trait CaptureBridge: Send + Sync {
    /// Stage `bytes` under `file_name`, returning the full path
    ///
    /// # Errors
    /// Returns [`CaptureError::Staging`] if the file cannot be written
    fn save_file(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError>;

    /// Remove a staged file
    ///
    /// # Errors
    /// Returns [`CaptureError::Staging`] if the file cannot be removed
    fn delete_file(&self, path: &Path) -> Result<(), CaptureError>;

    /// Transcribe a staged audio file
    ///
    /// # Errors
    /// Returns [`CaptureError::Transcription`] if the service fails
    fn transcribe_audio(&self, path: &Path) -> Result<String, CaptureError>;
}

/// Bridge staging files in a local directory and delegating transcription
pub struct TempDirBridge<T> {
    dir: PathBuf,
    transcriber: T,
}

impl<T: Transcriber> TempDirBridge<T> {
    /// Stage files under `dir` (created on first save)
    pub fn new(dir: impl Into<PathBuf>, transcriber: T) -> Self {
        Self {
            dir: dir.into(),
            transcriber,
        }
    }

    /// Staging directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Wrapped transcription service
    #[must_use]
    pub const fn transcriber(&self) -> &T {
        &self.transcriber
    }
}

impl<T: Transcriber> CaptureBridge for TempDirBridge<T> {
    fn save_file(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, CaptureError> {
        let path = self.dir.join(file_name);
        let staging = |source| CaptureError::Staging {
            path: path.display().to_string(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(staging)?;
        fs::write(&path, bytes).map_err(staging)?;

        debug!(path = %path.display(), bytes = bytes.len(), "audio staged");
        Ok(path)
    }

    fn delete_file(&self, path: &Path) -> Result<(), CaptureError> {
        fs::remove_file(path).map_err(|source| CaptureError::Staging {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "staged audio removed");
        Ok(())
    }

    fn transcribe_audio(&self, path: &Path) -> Result<String, CaptureError> {
        let start = std::time::Instant::now();
        let text = self
            .transcriber
            .transcribe(path)
            .map_err(|source| CaptureError::Transcription {
                path: path.display().to_string(),
                source,
            })?;
        info!(
            chars = text.len(),
            latency_ms = start.elapsed().as_millis(),
            "transcription complete"
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let staging = dir.path().join("nested");
        let bridge = TempDirBridge::new(&staging, MockTranscriber::new());

        let path = bridge.save_file("recording-1.wav", b"RIFF").unwrap();
        assert_eq!(path, staging.join("recording-1.wav"));
        assert_eq!(fs::read(&path).unwrap(), b"RIFF");

        bridge.delete_file(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_delete_missing_file_is_staging_error() {
        let dir = tempfile::tempdir().unwrap();
        let bridge = TempDirBridge::new(dir.path(), MockTranscriber::new());

        let err = bridge
            .delete_file(&dir.path().join("missing.wav"))
            .unwrap_err();
        assert!(matches!(err, CaptureError::Staging { .. }));
    }

    #[test]
    fn test_transcribe_delegates() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .withf(|path| path.ends_with("recording-1.wav"))
            .times(1)
            .returning(|_| Ok("hello world".to_owned()));

        let bridge = TempDirBridge::new("/tmp", transcriber);
        let text = bridge
            .transcribe_audio(Path::new("/tmp/recording-1.wav"))
            .unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_transcribe_error_keeps_path() {
        let mut transcriber = MockTranscriber::new();
        transcriber
            .expect_transcribe()
            .returning(|_| Err(anyhow::anyhow!("model not loaded")));

        let bridge = TempDirBridge::new("/tmp", transcriber);
        let err = bridge
            .transcribe_audio(Path::new("/tmp/recording-2.wav"))
            .unwrap_err();
        assert!(matches!(err, CaptureError::Transcription { .. }));
        assert!(err.to_string().contains("recording-2.wav"));
        assert!(err.to_string().contains("model not loaded"));
    }
}
