//! WAV I/O: expose a file as a flat integer sample sequence.

use anyhow::{Context, Result};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;

/// Read a WAV file and return (samples, sample_rate).
///
/// - Integer WAVs (16/24/32-bit) are read as raw `i32` values
/// - Float WAVs are scaled to the 16-bit integer range
/// - Takes the first channel if stereo/multi-channel
///
/// The detector's similarity metric is energy-normalized, so any
/// consistent scaling of the samples gives the same detections.
pub fn read_wav(path: &Path) -> Result<(Vec<i32>, u32)> {
    let reader = WavReader::open(path)
        .with_context(|| format!("Failed to open WAV file: {}", path.display()))?;

    let spec = reader.spec();
    let sample_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    let samples: Vec<i32> = match spec.sample_format {
        SampleFormat::Int => reader
            .into_samples::<i32>()
            .enumerate()
            .filter_map(|(i, s)| {
                // Take first channel only
                if i % channels == 0 {
                    Some(s)
                } else {
                    // Still consume the sample to advance the iterator
                    let _ = s;
                    None
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read WAV samples")?,
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .enumerate()
            .filter_map(|(i, s)| {
                if i % channels == 0 {
                    Some(s.map(|v| (v.clamp(-1.0, 1.0) * 32_767.0) as i32))
                } else {
                    let _ = s;
                    None
                }
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read WAV samples")?,
    };

    Ok((samples, sample_rate))
}

/// Write integer samples to a 16-bit PCM WAV file.
///
/// Values outside the 16-bit range are clamped. Creates parent
/// directories if needed.
pub fn write_wav(path: &Path, samples: &[i32], sample_rate: u32) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for &sample in samples {
        let clamped = sample.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        writer.write_sample(clamped)?;
    }

    writer.finalize().context("Failed to finalize WAV file")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_wav_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("wavecycle_test_io");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn test_write_read_roundtrip() {
        let path = temp_wav_path("roundtrip.wav");
        let samples = crate::audio::synth::sine(440.0, 16_000, 12_000.0, 0.1);
        write_wav(&path, &samples, 16_000).unwrap();

        let (read_samples, sr) = read_wav(&path).unwrap();
        assert_eq!(sr, 16_000);
        assert_eq!(read_samples, samples);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_clamps_values() {
        let path = temp_wav_path("clamping.wav");
        let samples = vec![i32::MIN, -40_000, 0, 40_000, i32::MAX];
        write_wav(&path, &samples, 16_000).unwrap();

        let (read, _) = read_wav(&path).unwrap();
        assert_eq!(read, vec![-32_768, -32_768, 0, 32_767, 32_767]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_takes_first_channel() {
        let path = temp_wav_path("stereo.wav");
        let spec = WavSpec {
            channels: 2,
            sample_rate: 16_000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for i in 0..100i16 {
            writer.write_sample(i).unwrap(); // left
            writer.write_sample(-i).unwrap(); // right
        }
        writer.finalize().unwrap();

        let (samples, _) = read_wav(&path).unwrap();
        assert_eq!(samples.len(), 100);
        assert!(samples.iter().enumerate().all(|(i, &s)| s == i as i32));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_missing_file_errors() {
        let result = read_wav(Path::new("/nonexistent/not_a_file.wav"));
        assert!(result.is_err());
    }
}
