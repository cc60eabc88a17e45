//! stereolab - Stereo Sound Transforms
//!
//! Loads 16-bit PCM WAV files into an immutable [`engine::Sound`], runs
//! deterministic transforms over it and writes the result back out.
//!
//! # Architecture
//!
//! - `engine`: the `Sound` value and WAV decode/encode
//! - `dsp`: reverse, mix, echo, pan, remove-vocals, and transform chains
//! - `cli`: command-line driver

pub mod cli;
pub mod dsp;
pub mod engine;
pub mod error;

pub use error::{LabError, Result};
