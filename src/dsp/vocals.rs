//! Vocal removal
//!
//! Vocals are usually mixed identically into both channels of a stereo
//! master, so subtracting one channel from the other cancels them.

use crate::engine::Sound;

/// Replace both channels with `left - right`.
pub fn remove_vocals(sound: &Sound) -> Sound {
    let side: Vec<f64> = sound.frames().map(|(l, r)| l - r).collect();
    Sound::from_mono(sound.rate(), side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identical_channels_cancel() {
        let sound = Sound::from_mono(44100, vec![0.3, -0.7, 1.0, 0.0]);
        let result = remove_vocals(&sound);
        assert!(result.left().iter().all(|&s| s == 0.0));
        assert!(result.right().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_output_channels_identical() {
        let sound = Sound::new(8000, vec![0.5, 0.25, -1.0], vec![0.25, 0.5, 1.0]);
        let result = remove_vocals(&sound);

        assert_eq!(result.left(), &[0.25, -0.25, -2.0]);
        assert_eq!(result.left(), result.right());
        assert_eq!(result.rate(), 8000);
    }

    #[test]
    fn test_empty() {
        assert!(remove_vocals(&Sound::silence(8000, 0)).is_empty());
    }
}
