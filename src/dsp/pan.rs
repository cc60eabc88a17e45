//! Pan
//!
//! Sweeps a sound linearly from the left speaker to the right one.

use crate::engine::Sound;
use crate::error::{LabError, Result};

/// Apply a left-to-right linear pan.
///
/// At frame `i` of `n`, the right channel is scaled by `i / (n - 1)` and the
/// left channel by `1 - i / (n - 1)`. An empty sound pans to an empty sound.
///
/// # Errors
/// * `DegenerateLength` - For a single-frame sound, where the sweep has no
///   defined position
pub fn pan(sound: &Sound) -> Result<Sound> {
    let len = sound.len();
    if len == 1 {
        return Err(LabError::DegenerateLength {
            operation: "pan",
            len,
        });
    }

    // Unused when len == 0: the iterators below are empty
    let last = len.saturating_sub(1) as f64;

    let right = sound
        .right()
        .iter()
        .enumerate()
        .map(|(i, &s)| s * (i as f64 / last))
        .collect();
    let left = sound
        .left()
        .iter()
        .enumerate()
        .map(|(i, &s)| s * (1.0 - i as f64 / last))
        .collect();

    Ok(Sound::new(sound.rate(), left, right))
}
