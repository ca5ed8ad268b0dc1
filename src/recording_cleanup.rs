use crate::config::CaptureConfig;
use anyhow::{Context, Result};
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Remove staged recordings left behind by interrupted captures
///
/// Deletes `recording-<unix millis>.wav` files in `dir` older than
/// `retention_minutes` OR beyond the `max_count` newest. Other files are
/// left alone. Returns the number of files deleted.
///
/// # Errors
/// Returns error if the directory cannot be listed; a file that cannot be
/// removed is logged and skipped
pub fn cleanup_stale_recordings(dir: &Path, config: &CaptureConfig) -> Result<usize> {
    if !dir.exists() {
        tracing::debug!("staging directory does not exist, skipping cleanup");
        return Ok(0);
    }

    let mut recordings: Vec<(PathBuf, u128)> = fs::read_dir(dir)
        .context("failed to read staging directory")?
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            let millis = recording_timestamp(path.file_name()?.to_str()?)?;
            Some((path, millis))
        })
        .collect();

    if recordings.is_empty() {
        tracing::debug!("no staged recordings found, skipping cleanup");
        return Ok(0);
    }

    // Newest first
    recordings.sort_by_key(|(_, millis)| Reverse(*millis));

    let cutoff = if config.retention_minutes > 0 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the unix epoch")?
            .as_millis();
        Some(now.saturating_sub(u128::from(config.retention_minutes) * 60_000))
    } else {
        None
    };
    let keep = if config.max_count > 0 {
        config.max_count
    } else {
        usize::MAX
    };

    let stale: Vec<&Path> = recordings
        .iter()
        .enumerate()
        .filter(|(rank, (_, millis))| *rank >= keep || cutoff.is_some_and(|c| *millis < c))
        .map(|(_, (path, _))| path.as_path())
        .collect();

    let deleted = stale
        .into_iter()
        .filter(|path| match fs::remove_file(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "staged recording removed");
                true
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not remove staged recording: {e}");
                false
            }
        })
        .count();

    if deleted > 0 {
        tracing::info!(
            deleted,
            remaining = recordings.len() - deleted,
            "staging directory cleaned"
        );
    }

    Ok(deleted)
}

/// Parse the millisecond timestamp out of `recording-<millis>.wav`
fn recording_timestamp(file_name: &str) -> Option<u128> {
    let stem = file_name.strip_prefix("recording-")?;
    let (millis, ext) = stem.rsplit_once('.')?;
    if !ext.eq_ignore_ascii_case("wav") {
        return None;
    }
    millis.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now_millis() -> u128 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis()
    }

    fn create_recording(dir: &Path, millis: u128) -> PathBuf {
        let path = dir.join(format!("recording-{millis}.wav"));
        fs::write(&path, b"RIFF").unwrap();
        path
    }

    fn config(retention_minutes: u32, max_count: usize) -> CaptureConfig {
        CaptureConfig {
            retention_minutes,
            max_count,
            ..CaptureConfig::default()
        }
    }

    #[test]
    fn test_recording_timestamp() {
        assert_eq!(recording_timestamp("recording-1700000000000.wav"), Some(1_700_000_000_000));
        assert_eq!(recording_timestamp("recording-42.WAV"), Some(42));
        assert_eq!(recording_timestamp("recording-abc.wav"), None);
        assert_eq!(recording_timestamp("recording_42.wav"), None);
        assert_eq!(recording_timestamp("recording-42.txt"), None);
        assert_eq!(recording_timestamp("notes.wav"), None);
    }

    #[test]
    fn test_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let deleted = cleanup_stale_recordings(&dir.path().join("absent"), &config(60, 10)).unwrap();
        assert_eq!(deleted, 0);
    }

    #[test]
    fn test_empty_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let deleted = cleanup_stale_recordings(dir.path(), &config(60, 10)).unwrap();
        assert_eq!(deleted, 0);
    }

    #[test]
    fn test_expired_recordings_removed() {
        let dir = tempfile::tempdir().unwrap();
        let now = now_millis();

        let old = create_recording(dir.path(), now - 2 * 60 * 60 * 1000);
        let recent = create_recording(dir.path(), now - 60 * 1000);

        let deleted = cleanup_stale_recordings(dir.path(), &config(60, 0)).unwrap();
        assert_eq!(deleted, 1);
        assert!(!old.exists());
        assert!(recent.exists());
    }

    #[test]
    fn test_keeps_newest_max_count() {
        let dir = tempfile::tempdir().unwrap();
        let now = now_millis();

        let paths: Vec<PathBuf> = (0..5)
            .map(|i| create_recording(dir.path(), now - i * 1000))
            .collect();

        let deleted = cleanup_stale_recordings(dir.path(), &config(0, 3)).unwrap();
        assert_eq!(deleted, 2);

        // 3 newest remain, 2 oldest deleted
        assert!(paths[..3].iter().all(|p| p.exists()));
        assert!(paths[3..].iter().all(|p| !p.exists()));
    }

    #[test]
    fn test_age_and_count_combine() {
        let dir = tempfile::tempdir().unwrap();
        let now = now_millis();

        create_recording(dir.path(), now - 24 * 60 * 60 * 1000);
        for i in 0..4 {
            create_recording(dir.path(), now - i * 1000);
        }

        let deleted = cleanup_stale_recordings(dir.path(), &config(60, 3)).unwrap();
        // the day-old file plus one beyond the newest three
        assert_eq!(deleted, 2);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
    }

    #[test]
    fn test_zero_limits_keep_everything() {
        let dir = tempfile::tempdir().unwrap();
        let now = now_millis();

        create_recording(dir.path(), now - 30 * 24 * 60 * 60 * 1000);
        for i in 0..6 {
            create_recording(dir.path(), now - i * 1000);
        }

        let deleted = cleanup_stale_recordings(dir.path(), &config(0, 0)).unwrap();
        assert_eq!(deleted, 0);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 7);
    }

    #[test]
    fn test_foreign_files_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let now = now_millis();

        create_recording(dir.path(), now - 2 * 60 * 60 * 1000);
        fs::write(dir.path().join("notes.wav"), b"data").unwrap();
        fs::write(dir.path().join("recording.txt"), b"data").unwrap();
        fs::write(dir.path().join("recording-invalid.wav"), b"data").unwrap();

        let deleted = cleanup_stale_recordings(dir.path(), &config(60, 0)).unwrap();
        assert_eq!(deleted, 1);

        assert!(dir.path().join("notes.wav").exists());
        assert!(dir.path().join("recording.txt").exists());
        assert!(dir.path().join("recording-invalid.wav").exists());
    }
}
