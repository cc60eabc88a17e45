//! Mix
//!
//! Weighted sum of two sounds sharing a sample rate.

use log::debug;

use crate::engine::Sound;
use crate::error::{LabError, Result};

/// Mix two sounds as `p * first + (1 - p) * second`.
///
/// The result is as long as the shorter input; the tail of the longer one
/// is dropped. `p` is not range-checked, values outside (0, 1) simply
/// extrapolate.
///
/// # Errors
/// * `RateMismatch` - If the two sounds have different sample rates
pub fn mix(first: &Sound, second: &Sound, p: f64) -> Result<Sound> {
    if first.rate() != second.rate() {
        return Err(LabError::RateMismatch {
            first: first.rate(),
            second: second.rate(),
        });
    }

    let len = first.len().min(second.len());
    debug!(
        "Mixing {} and {} frames at p={} into {} frames",
        first.len(),
        second.len(),
        p,
        len
    );

    let weigh = |a: &[f64], b: &[f64]| -> Vec<f64> {
        a.iter()
            .zip(b)
            .take(len)
            .map(|(&x, &y)| p * x + (1.0 - p) * y)
            .collect()
    };

    Ok(Sound::new(
        first.rate(),
        weigh(first.left(), second.left()),
        weigh(first.right(), second.right()),
    ))
}
