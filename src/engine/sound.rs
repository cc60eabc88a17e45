//! Sound value
//!
//! A sound is a sample rate plus two equal-length channels of normalized
//! samples. Values are immutable once built; transforms always produce a
//! new `Sound`.

/// Stereo sound held as non-interleaved `f64` channels.
///
/// Samples nominally live in [-1.0, 1.0]. Mixing and echo accumulation can
/// push them outside that range; clipping only happens at encode time.
///
/// # Example
/// ```
/// use stereolab::engine::Sound;
///
/// let sound = Sound::new(8000, vec![0.5, -0.5], vec![0.25, -0.25]);
/// assert_eq!(sound.rate(), 8000);
/// assert_eq!(sound.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Sound {
    rate: u32,
    left: Vec<f64>,
    right: Vec<f64>,
}

impl Sound {
    /// Create a sound from a rate and two channels.
    ///
    /// # Panics
    /// If `rate` is zero or the channels differ in length. Both are
    /// programming errors: nothing in the crate produces such a sound.
    pub fn new(rate: u32, left: Vec<f64>, right: Vec<f64>) -> Self {
        assert!(rate > 0, "sample rate must be positive");
        assert_eq!(
            left.len(),
            right.len(),
            "left and right channels must have equal length"
        );
        Self { rate, left, right }
    }

    /// Create a sound by duplicating one channel into both sides
    pub fn from_mono(rate: u32, samples: Vec<f64>) -> Self {
        Self::new(rate, samples.clone(), samples)
    }

    /// Create `len` frames of silence
    pub fn silence(rate: u32, len: usize) -> Self {
        Self::new(rate, vec![0.0; len], vec![0.0; len])
    }

    /// Sample rate in Hz
    #[inline]
    pub fn rate(&self) -> u32 {
        self.rate
    }

    #[inline]
    pub fn left(&self) -> &[f64] {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &[f64] {
        &self.right
    }

    /// Number of frames (samples per channel)
    #[inline]
    pub fn len(&self) -> usize {
        self.left.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 / self.rate as f64
    }

    /// Iterate over `(left, right)` frames
    pub fn frames(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.left.iter().copied().zip(self.right.iter().copied())
    }

    /// Largest absolute sample across both channels (0.0 when empty)
    pub fn peak(&self) -> f64 {
        self.left
            .iter()
            .chain(self.right.iter())
            .map(|s| s.abs())
            .fold(0.0_f64, f64::max)
    }

    /// Check that no sample is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.left
            .iter()
            .chain(self.right.iter())
            .all(|s| s.is_finite())
    }
}
