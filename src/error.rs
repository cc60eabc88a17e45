//! Error handling for stereolab
//!
//! Every failure carries an error code and, where the user can do
//! something about it, recovery suggestions.

use thiserror::Error;

/// Result type alias for stereolab operations
pub type Result<T> = std::result::Result<T, LabError>;

/// Main error type for stereolab operations
#[derive(Error, Debug)]
pub enum LabError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Transform Errors
    #[error("Sample rate mismatch: {first} Hz vs {second} Hz")]
    RateMismatch { first: u32, second: u32 },

    #[error("Cannot {operation} a sound of length {len}")]
    DegenerateLength { operation: &'static str, len: usize },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LabError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            LabError::FileNotFound { .. } => "FILE_NOT_FOUND",
            LabError::InvalidAudio { .. } => "INVALID_AUDIO",
            LabError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            LabError::RateMismatch { .. } => "RATE_MISMATCH",
            LabError::DegenerateLength { .. } => "DEGENERATE_LENGTH",
            LabError::InvalidParameter { .. } => "INVALID_PARAMETER",
            LabError::Io(_) => "IO_ERROR",
            LabError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can recover by changing its input
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LabError::FileNotFound { .. }
                | LabError::RateMismatch { .. }
                | LabError::DegenerateLength { .. }
                | LabError::InvalidParameter { .. }
        )
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            LabError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Verify the file hasn't been moved or deleted",
            ],
            LabError::InvalidAudio { .. } => vec![
                "Check if the file plays in another application",
                "The file may be corrupted - try re-exporting from source",
            ],
            LabError::UnsupportedFormat { .. } => vec![
                "Convert the file to 16-bit PCM WAV first",
                "Only mono and stereo files are supported",
            ],
            LabError::RateMismatch { .. } => vec![
                "Both sounds must share the same sample rate",
                "Resample one of the files in an external editor before mixing",
            ],
            LabError::DegenerateLength { .. } => {
                vec!["Panning needs a sound of at least two samples"]
            }
            LabError::InvalidParameter { .. } => {
                vec!["Check the value passed on the command line or in the recipe"]
            }
            _ => vec![],
        }
    }
}
