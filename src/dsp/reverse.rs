//! Reverse
//!
//! Time-inverts a sound so it plays backwards.

use crate::engine::Sound;

/// Return a new sound with both channels in reverse order.
///
/// Sample values are untouched, so `reverse(&reverse(s)) == s`.
pub fn reverse(sound: &Sound) -> Sound {
    let left = sound.left().iter().rev().copied().collect();
    let right = sound.right().iter().rev().copied().collect();
    Sound::new(sound.rate(), left, right)
}
