//! WAV file I/O for stereolab
//!
//! Reads 16-bit linear PCM (mono or stereo) into a [`Sound`] and writes a
//! [`Sound`] back as 16-bit stereo PCM.
//!
//! Decoding divides every `i16` by 2^15. Encoding clamps to [-1.0, 1.0] and
//! scales by 2^15 - 1, so the two directions are not exact inverses.
//!
//! With the default [`Quantization::Nearest`], a decoded value `k / 2^15`
//! re-encodes to `k` whenever `|k| <= 16384`, so repeated load/write passes
//! leave such audio untouched. Louder samples lose one step per pass.
//! [`Quantization::Truncate`] matches the classic `int()` writer bit for bit
//! but drops every non-zero sample one step toward zero on each pass.

use std::io::{Read, Seek, Write};
use std::path::Path;

use clap::ValueEnum;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::engine::sound::Sound;
use crate::error::{LabError, Result};

/// Only supported bit depth, for both reading and writing
pub const BIT_DEPTH: u16 = 16;

/// Divisor applied when decoding (2^15)
const DECODE_SCALE: f64 = 32768.0;

/// Multiplier applied when encoding (2^15 - 1)
const ENCODE_SCALE: f64 = 32767.0;

/// How a clamped sample is converted to an integer on export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Quantization {
    /// Round to nearest, halves away from zero
    #[default]
    Nearest,
    /// Truncate toward zero (bit-exact with the classic `int()` writer)
    Truncate,
}

impl Quantization {
    /// Quantize a sample that is already clamped to [-1.0, 1.0]
    #[inline]
    pub fn apply(self, sample: f64) -> i16 {
        let scaled = sample * ENCODE_SCALE;
        // `as` saturates and maps NaN to 0
        match self {
            Quantization::Truncate => scaled as i16,
            Quantization::Nearest => scaled.round() as i16,
        }
    }
}

/// Export format configuration
///
/// Channel count and bit depth are fixed (stereo, 16-bit); only the
/// quantization policy is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportFormat {
    pub quantization: Quantization,
}

impl ExportFormat {
    pub fn new(quantization: Quantization) -> Self {
        ExportFormat { quantization }
    }
}

/// Load a WAV file into a [`Sound`]
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidAudio` - If the file is not a readable WAV file or has a zero rate
/// * `UnsupportedFormat` - If the file is not 16-bit integer mono/stereo PCM
pub fn load_wav(path: &Path) -> Result<Sound> {
    if !path.exists() {
        return Err(LabError::FileNotFound {
            path: path.display().to_string(),
            source: None,
        });
    }

    let reader = WavReader::open(path).map_err(|e| LabError::InvalidAudio {
        reason: format!("Failed to open WAV file: {}", e),
        source: Some(Box::new(e)),
    })?;

    let sound = decode_reader(reader)?;
    info!(
        "Loaded {} ({} frames at {} Hz)",
        path.display(),
        sound.len(),
        sound.rate()
    );
    Ok(sound)
}

/// Decode a WAV stream into a [`Sound`]
pub fn decode<R: Read>(reader: R) -> Result<Sound> {
    let reader = WavReader::new(reader).map_err(|e| LabError::InvalidAudio {
        reason: format!("Failed to parse WAV header: {}", e),
        source: Some(Box::new(e)),
    })?;
    decode_reader(reader)
}

/// Write a [`Sound`] to a WAV file as 16-bit stereo PCM
pub fn write_wav(sound: &Sound, path: &Path, format: ExportFormat) -> Result<()> {
    let writer = WavWriter::create(path, output_spec(sound)).map_err(write_error)?;
    write_frames(sound, writer, format)?;
    info!(
        "Wrote {} ({} frames at {} Hz)",
        path.display(),
        sound.len(),
        sound.rate()
    );
    Ok(())
}

/// Encode a [`Sound`] as a 16-bit stereo WAV stream
pub fn encode<W: Write + Seek>(sound: &Sound, writer: W, format: ExportFormat) -> Result<()> {
    let writer = WavWriter::new(writer, output_spec(sound)).map_err(write_error)?;
    write_frames(sound, writer, format)
}

// ============================================================================
// Internal helper functions
// ============================================================================

fn decode_reader<R: Read>(mut reader: WavReader<R>) -> Result<Sound> {
    let spec = reader.spec();
    let channels = spec.channels as usize;

    if channels == 0 || channels > 2 {
        return Err(LabError::UnsupportedFormat {
            format: format!("{}-channel audio (only mono/stereo supported)", channels),
        });
    }

    if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != BIT_DEPTH {
        let kind = match spec.sample_format {
            SampleFormat::Int => "integer",
            SampleFormat::Float => "float",
        };
        return Err(LabError::UnsupportedFormat {
            format: format!(
                "{}-bit {} audio (only 16-bit integer PCM supported)",
                spec.bits_per_sample, kind
            ),
        });
    }

    if spec.sample_rate == 0 {
        return Err(LabError::InvalidAudio {
            reason: "sample rate is zero".to_string(),
            source: None,
        });
    }

    debug!(
        "WAV header: {} channel(s), {} Hz, {} frames",
        channels,
        spec.sample_rate,
        reader.duration()
    );

    let samples = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<i16>, _>>()
        .map_err(|e| LabError::InvalidAudio {
            reason: format!("Failed to read 16-bit samples: {}", e),
            source: Some(Box::new(e)),
        })?;

    let frames = samples.len() / channels;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);

    for frame in samples.chunks_exact(channels) {
        let l = frame[0] as f64 / DECODE_SCALE;
        let r = if channels == 2 {
            frame[1] as f64 / DECODE_SCALE
        } else {
            l
        };
        left.push(l);
        right.push(r);
    }

    Ok(Sound::new(spec.sample_rate, left, right))
}

fn output_spec(sound: &Sound) -> WavSpec {
    WavSpec {
        channels: 2,
        sample_rate: sound.rate(),
        bits_per_sample: BIT_DEPTH,
        sample_format: SampleFormat::Int,
    }
}

fn write_frames<W: Write + Seek>(
    sound: &Sound,
    mut writer: WavWriter<W>,
    format: ExportFormat,
) -> Result<()> {
    if !sound.is_finite() {
        warn!("Sound contains NaN or infinite samples; NaN is written as 0");
    }

    let mut clipped = 0usize;

    for (l, r) in sound.frames() {
        for sample in [l, r] {
            if sample.abs() > 1.0 {
                clipped += 1;
            }
            let value = format.quantization.apply(sample.clamp(-1.0, 1.0));
            writer.write_sample(value).map_err(write_error)?;
        }
    }

    if clipped > 0 {
        warn!("Clipped {} sample(s) outside [-1.0, 1.0] on export", clipped);
    }

    writer.finalize().map_err(write_error)
}

fn write_error(e: hound::Error) -> LabError {
    match e {
        hound::Error::IoError(io) => LabError::Io(io),
        other => LabError::InvalidAudio {
            reason: format!("Failed to write WAV data: {}", other),
            source: Some(Box::new(other)),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Cursor;
    use tempfile::tempdir;
    use test_case::test_case;

    const STEP: f64 = 1.0 / 32767.0;

    /// Build a WAV stream with an arbitrary spec and raw integer samples
    fn raw_wav(spec: WavSpec, samples: &[i32]) -> Vec<u8> {
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            for &s in samples {
                match spec.bits_per_sample {
                    8 => writer.write_sample(s as i8).unwrap(),
                    16 => writer.write_sample(s as i16).unwrap(),
                    _ => writer.write_sample(s).unwrap(),
                }
            }
            writer.finalize().unwrap();
        }
        bytes
    }

    fn encode_to_bytes(sound: &Sound, format: ExportFormat) -> Vec<u8> {
        let mut bytes = Vec::new();
        encode(sound, Cursor::new(&mut bytes), format).unwrap();
        bytes
    }

    #[test]
    fn test_decode_stereo_normalizes() {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let bytes = raw_wav(spec, &[16384, -16384, -32768, 0]);
        let sound = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(sound.rate(), 8000);
        assert_eq!(sound.left(), &[0.5, -1.0]);
        assert_eq!(sound.right(), &[-0.5, 0.0]);
    }

    #[test]
    fn test_decode_mono_duplicates_channel() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 22050,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let bytes = raw_wav(spec, &[8192, -8192, 0]);
        let sound = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(sound.len(), 3);
        assert_eq!(sound.left(), &[0.25, -0.25, 0.0]);
        assert_eq!(sound.left(), sound.right());
    }

    #[test_case(8 ; "8-bit")]
    #[test_case(24 ; "24-bit")]
    #[test_case(32 ; "32-bit")]
    fn test_decode_rejects_other_bit_depths(bits: u16) {
        let spec = WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: bits,
            sample_format: SampleFormat::Int,
        };
        let bytes = raw_wav(spec, &[0, 0]);
        match decode(Cursor::new(bytes)) {
            Err(LabError::UnsupportedFormat { format }) => {
                assert!(format.contains(&format!("{}-bit", bits)));
            }
            other => panic!("Expected UnsupportedFormat, got: {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_float() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut bytes = Vec::new();
        {
            let mut writer = WavWriter::new(Cursor::new(&mut bytes), spec).unwrap();
            writer.write_sample(0.5f32).unwrap();
            writer.finalize().unwrap();
        }
        assert!(matches!(
            decode(Cursor::new(bytes)),
            Err(LabError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_multichannel() {
        let spec = WavSpec {
            channels: 4,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let bytes = raw_wav(spec, &[0, 0, 0, 0]);
        assert!(matches!(
            decode(Cursor::new(bytes)),
            Err(LabError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_decode_garbage_is_invalid_audio() {
        let result = decode(Cursor::new(b"definitely not a wav file".to_vec()));
        assert!(matches!(result, Err(LabError::InvalidAudio { .. })));
    }

    #[test]
    fn test_encode_always_stereo_16bit() {
        let sound = Sound::from_mono(11025, vec![0.1, 0.2]);
        let bytes = encode_to_bytes(&sound, ExportFormat::default());

        let reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        assert_eq!(spec.sample_rate, 11025);
        assert_eq!(reader.duration(), 2);
    }

    #[test]
    fn test_encode_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5, -0.5 * 32767 = -16383.5
        let sound = Sound::new(8000, vec![0.5, -0.5], vec![1.0, -1.0]);
        let bytes = encode_to_bytes(&sound, ExportFormat::new(Quantization::Truncate));

        let mut reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let raw: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(raw, vec![16383, 32767, -16383, -32767]);
    }

    #[test]
    fn test_encode_nearest_rounds() {
        let sound = Sound::new(8000, vec![0.5], vec![-0.5]);
        let bytes = encode_to_bytes(&sound, ExportFormat::default());

        let mut reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let raw: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(raw, vec![16384, -16384]);
    }

    #[test]
    fn test_encode_clamps_out_of_range() {
        let sound = Sound::new(8000, vec![3.0, f64::NEG_INFINITY], vec![-1.5, f64::NAN]);
        let bytes = encode_to_bytes(&sound, ExportFormat::default());

        let mut reader = WavReader::new(Cursor::new(bytes)).unwrap();
        let raw: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(raw, vec![32767, -32767, -32767, 0]);
    }

    #[test]
    fn test_round_trip_within_one_step() {
        let original = Sound::new(44100, vec![0.5, -0.5, 0.0], vec![0.25, -0.25, 0.0]);
        let bytes = encode_to_bytes(&original, ExportFormat::new(Quantization::Truncate));
        let decoded = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(decoded.rate(), 44100);
        assert_eq!(decoded.len(), 3);
        for (orig, dec) in original.frames().zip(decoded.frames()) {
            assert_abs_diff_eq!(orig.0, dec.0, epsilon = STEP);
            assert_abs_diff_eq!(orig.1, dec.1, epsilon = STEP);
        }
    }

    #[test]
    fn test_round_trip_nearest_exact_for_small_values() {
        // k / 32768 re-encodes to k under rounding when |k| <= 16384
        let left: Vec<f64> = [-16384, -1, 0, 1, 12345, 16384]
            .iter()
            .map(|&k| k as f64 / 32768.0)
            .collect();
        let original = Sound::from_mono(8000, left);

        let bytes = encode_to_bytes(&original, ExportFormat::default());
        let decoded = decode(Cursor::new(bytes)).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_repeated_passes_are_stable_by_default() {
        let original = Sound::new(
            8000,
            vec![1.0 / 32768.0, 100.0 / 32768.0],
            vec![0.0, -1.0 / 32768.0],
        );

        let mut current = original.clone();
        for _ in 0..3 {
            let bytes = encode_to_bytes(&current, ExportFormat::default());
            current = decode(Cursor::new(bytes)).unwrap();
        }
        assert_eq!(current, original);
    }

    #[test]
    fn test_truncate_drifts_toward_zero() {
        let original = Sound::new(
            8000,
            vec![1.0 / 32768.0, 100.0 / 32768.0],
            vec![0.0, -1.0 / 32768.0],
        );

        let bytes = encode_to_bytes(&original, ExportFormat::new(Quantization::Truncate));
        let decoded = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(decoded.left(), &[0.0, 99.0 / 32768.0]);
        assert_eq!(decoded.right(), &[0.0, 0.0]);
    }

    #[test]
    fn test_nearest_loses_one_step_above_half_scale() {
        let original = Sound::from_mono(8000, vec![32767.0 / 32768.0, -20000.0 / 32768.0]);

        let bytes = encode_to_bytes(&original, ExportFormat::default());
        let decoded = decode(Cursor::new(bytes)).unwrap();

        assert_eq!(decoded.left(), &[32766.0 / 32768.0, -19999.0 / 32768.0]);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.wav");

        let original = Sound::new(44100, vec![0.5, -0.5, 0.0], vec![0.25, -0.25, 0.0]);
        write_wav(&original, &path, ExportFormat::default()).unwrap();
        let loaded = load_wav(&path).unwrap();

        assert_eq!(loaded.rate(), original.rate());
        for (orig, dec) in original.left().iter().zip(loaded.left()) {
            assert_abs_diff_eq!(*orig, *dec, epsilon = STEP);
        }
    }

    #[test]
    fn test_empty_sound_round_trip() {
        let original = Sound::silence(8000, 0);
        let bytes = encode_to_bytes(&original, ExportFormat::default());
        let decoded = decode(Cursor::new(bytes)).unwrap();
        assert!(decoded.is_empty());
        assert_eq!(decoded.rate(), 8000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_wav(Path::new("/nonexistent/path/audio.wav"));

        match result.unwrap_err() {
            LabError::FileNotFound { path, .. } => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected FileNotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_export_format_default() {
        assert_eq!(ExportFormat::default().quantization, Quantization::Nearest);
    }
}
