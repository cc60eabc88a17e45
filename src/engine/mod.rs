//! Audio Engine Module
//!
//! Core sound representation and file I/O:
//! - The immutable `Sound` value
//! - 16-bit PCM WAV decode/encode

pub mod io;
pub mod sound;

pub use io::{decode, encode, load_wav, write_wav, ExportFormat, Quantization};
pub use sound::Sound;
