//! WAV file reading and writing for the offline processing harness.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Error types for WAV file operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The input file decoded to zero samples.
    #[error("input file contains no samples")]
    EmptyInput,
}

/// Convenience result type for WAV operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Read a WAV file as mono f32 samples plus the file's sample rate.
///
/// Multi-channel files are mixed down to mono by averaging the channels;
/// integer formats are normalized to `[-1, 1]`.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, u32)> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = spec.channels as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        SampleFormat::Float => reader.samples::<f32>().collect::<hound::Result<_>>()?,
        SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<hound::Result<_>>()?
        }
    };

    if interleaved.is_empty() {
        return Err(Error::EmptyInput);
    }

    let samples = if channels == 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    };

    Ok((samples, spec.sample_rate))
}

/// Write mono f32 samples as a 32-bit IEEE float WAV file.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    Ok(())
}
