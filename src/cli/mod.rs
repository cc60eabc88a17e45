//! CLI Module
//!
//! Command-line interface for stereolab.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::engine::Quantization;

/// Stereolab - apply stereo sound transforms to WAV files
#[derive(Parser, Debug)]
#[command(name = "stereolab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// How samples are rounded to 16-bit integers on export
    #[arg(short, long, global = true, value_enum, default_value_t = Quantization::Nearest)]
    pub quantization: Quantization,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a sound backwards
    #[command(name = "reverse")]
    Reverse {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
    },

    /// Mix two sounds with the same sample rate
    #[command(name = "mix")]
    Mix {
        /// First input WAV file
        first: PathBuf,
        /// Second input WAV file
        second: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Weight of the first sound (second gets 1 - p)
        #[arg(short, long, default_value_t = 0.5)]
        p: f64,
    },

    /// Add delayed, decaying copies of a sound
    #[command(name = "echo")]
    Echo {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Number of additional copies
        #[arg(short = 'n', long, default_value_t = 3)]
        echoes: usize,
        /// Delay between copies in seconds
        #[arg(short, long, default_value_t = 0.2)]
        delay: f64,
        /// Scale applied per copy
        #[arg(short, long, default_value_t = 0.4)]
        scale: f64,
    },

    /// Sweep a sound from the left speaker to the right
    #[command(name = "pan")]
    Pan {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
    },

    /// Cancel content mixed equally into both channels
    #[command(name = "remove-vocals")]
    RemoveVocals {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
    },

    /// Run a JSON recipe of transforms
    #[command(name = "apply")]
    Apply {
        /// Input WAV file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
        /// Recipe file
        #[arg(short, long)]
        recipe: PathBuf,
    },

    /// Print information about a WAV file
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,
    },
}
