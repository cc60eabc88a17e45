//! Transform step definition
//!
//! A `Transform` names one of the five sound transforms together with its
//! arguments, so it can be built from the command line or read from a
//! recipe file.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dsp::{echo, mix, pan, remove_vocals, reverse};
use crate::engine::{load_wav, Sound};
use crate::error::{LabError, Result};

/// One transform with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transform {
    /// Play the sound backwards
    Reverse,
    /// Mix with another WAV file: `p * current + (1 - p) * other`
    Mix { with: PathBuf, p: f64 },
    /// Add `num_echos` delayed copies, each `scale` times quieter
    Echo {
        num_echos: usize,
        delay_secs: f64,
        scale: f64,
    },
    /// Sweep from left to right
    Pan,
    /// Cancel content common to both channels
    RemoveVocals,
}

impl Transform {
    /// Get the transform type identifier
    pub fn transform_type(&self) -> &'static str {
        match self {
            Transform::Reverse => "reverse",
            Transform::Mix { .. } => "mix",
            Transform::Echo { .. } => "echo",
            Transform::Pan => "pan",
            Transform::RemoveVocals => "remove_vocals",
        }
    }

    /// Run this transform on `sound`, producing a new sound
    pub fn apply(&self, sound: &Sound) -> Result<Sound> {
        match self {
            Transform::Reverse => Ok(reverse(sound)),
            Transform::Mix { with, p } => {
                let other = load_wav(with)?;
                mix(sound, &other, *p)
            }
            Transform::Echo {
                num_echos,
                delay_secs,
                scale,
            } => {
                let delay = delay_from_secs(*delay_secs)?;
                echo(sound, *num_echos, delay, *scale)
            }
            Transform::Pan => pan(sound),
            Transform::RemoveVocals => Ok(remove_vocals(sound)),
        }
    }
}

/// Convert a user-supplied delay in seconds to a `Duration`
///
/// # Errors
/// * `InvalidParameter` - If `secs` is negative, NaN or infinite
pub fn delay_from_secs(secs: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(secs).map_err(|e| LabError::InvalidParameter {
        name: "delay".to_string(),
        reason: format!("{} seconds: {}", secs, e),
    })
}
