use hound::{SampleFormat, WavSpec, WavWriter};
use std::io::Cursor;
use tracing::debug;

/// Sample rate expected by transcription services
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Downmix interleaved samples to mono and resample to 16 kHz
///
/// Channels are averaged per frame; resampling is linear interpolation.
#[must_use]
pub fn to_16khz_mono(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<f32> {
    let mono_samples = if channels <= 1 {
        samples.to_vec()
    } else {
        let channels_f64 = f64::from(channels);
        samples
            .chunks(usize::from(channels))
            .map(|frame| {
                let sum: f64 = frame.iter().map(|&s| f64::from(s)).sum();
                // f64 → f32: audio samples are stored as f32, precision sufficient
                #[allow(clippy::cast_possible_truncation)]
                {
                    (sum / channels_f64) as f32
                }
            })
            .collect()
    };

    if sample_rate == TARGET_SAMPLE_RATE || sample_rate == 0 || mono_samples.is_empty() {
        return mono_samples;
    }

    // Fractional index math needs f64 ↔ usize conversions
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let resampled: Vec<f32> = {
        let ratio = f64::from(sample_rate) / f64::from(TARGET_SAMPLE_RATE);
        let output_len = ((mono_samples.len() as f64) / ratio).ceil() as usize;
        let last = mono_samples.len() - 1;

        (0..output_len)
            .map(|i| {
                let src = (i as f64) * ratio;
                let floor = (src.floor() as usize).min(last);
                let ceil = (floor + 1).min(last);
                let fract = src - src.floor();
                let s1 = f64::from(mono_samples[floor]);
                let s2 = f64::from(mono_samples[ceil]);
                s1.mul_add(1.0 - fract, s2 * fract) as f32
            })
            .collect()
    };

    debug!(
        source_rate = sample_rate,
        channels,
        input_samples = samples.len(),
        output_samples = resampled.len(),
        "audio converted to 16kHz mono"
    );

    resampled
}

/// Encode 16 kHz mono samples as a 32-bit float WAV file in memory
///
/// # Errors
/// Returns error if the WAV writer rejects a sample
pub fn encode_wav(samples: &[f32]) -> Result<Vec<u8>, hound::Error> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: TARGET_SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = WavWriter::new(&mut cursor, spec)?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}
