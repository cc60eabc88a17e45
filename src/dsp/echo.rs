//! Echo
//!
//! Adds delayed, geometrically attenuated copies of a sound on top of the
//! original. Overlapping copies accumulate without clipping.

use std::time::Duration;

use log::debug;

use crate::engine::Sound;
use crate::error::{LabError, Result};

/// Longest channel a `Vec<f64>` can hold
const MAX_FRAMES: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Convert a delay to a whole number of samples at `rate`.
///
/// Halfway cases round to the nearest even sample count, so 0.5 samples
/// becomes 0 and 1.5 samples becomes 2. Returns `None` when the count does
/// not fit in a `usize`.
///
/// The delay is held as whole nanoseconds, so a delay given in seconds is
/// already rounded to the nanosecond before it is multiplied by `rate`.
/// For very high rates or delays landing within a nanosecond of a half
/// sample this can round differently from `round(seconds * rate)`.
pub fn sample_delay(delay: Duration, rate: u32) -> Option<usize> {
    let samples = (delay.as_secs_f64() * rate as f64).round_ties_even();
    // usize::MAX as f64 rounds up to 2^64, which is itself out of range
    if samples < usize::MAX as f64 {
        Some(samples as usize)
    } else {
        None
    }
}

/// Build an echo of `sound`.
///
/// Copy `n` (for `n` in `0..=num_echos`) is scaled by `scale^n` and shifted
/// by `n * sample_delay(delay)` samples. Copy 0 is the original at full
/// level, so `num_echos == 0` reproduces the input.
///
/// Output length is `sound.len() + sample_delay * num_echos`.
///
/// # Errors
/// * `InvalidParameter` - If the output length cannot be represented
pub fn echo(sound: &Sound, num_echos: usize, delay: Duration, scale: f64) -> Result<Sound> {
    let too_long = || LabError::InvalidParameter {
        name: "delay".to_string(),
        reason: format!(
            "{} echoes {:?} apart at {} Hz exceed the maximum sound length",
            num_echos,
            delay,
            sound.rate()
        ),
    };

    let offset = if num_echos == 0 {
        0
    } else {
        sample_delay(delay, sound.rate()).ok_or_else(too_long)?
    };
    let len = offset
        .checked_mul(num_echos)
        .and_then(|tail| tail.checked_add(sound.len()))
        .filter(|&len| len <= MAX_FRAMES)
        .ok_or_else(too_long)?;

    debug!(
        "Echo: {} copies, {} samples apart, scale {}, {} -> {} frames",
        num_echos,
        offset,
        scale,
        sound.len(),
        len
    );

    let mut left = vec![0.0; len];
    let mut right = vec![0.0; len];

    for n in 0..=num_echos {
        let scaling = scale.powf(n as f64);
        let start = n * offset;
        accumulate(&mut left[start..], sound.left(), scaling);
        accumulate(&mut right[start..], sound.right(), scaling);
    }

    Ok(Sound::new(sound.rate(), left, right))
}

#[inline]
fn accumulate(dst: &mut [f64], src: &[f64], scaling: f64) {
    for (out, &sample) in dst.iter_mut().zip(src) {
        *out += sample * scaling;
    }
}
