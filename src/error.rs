//! Error types for srt-merge.

use crate::subtitle::ParseError;

/// Result type alias for srt-merge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for srt-merge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {source}")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}': {source}")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Failed to read the input subtitle file.
    #[error("failed to read subtitle file '{path}': {source}")]
    InputRead {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input subtitle file is malformed.
    #[error("failed to parse subtitle file '{path}': {source}")]
    SubtitleParse {
        /// Path to the input file.
        path: std::path::PathBuf,
        /// What was wrong with the file.
        #[source]
        source: ParseError,
    },

    /// Failed to write the output subtitle file.
    #[error("failed to write subtitle file '{path}': {source}")]
    OutputWrite {
        /// Path to the output file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Stable `snake_case` identifier for structured output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigDirNotFound => "config_dir_not_found",
            Self::ConfigRead { .. } => "config_read",
            Self::ConfigParse { .. } => "config_parse",
            Self::ConfigValidation { .. } => "config_validation",
            Self::ConfigWrite { .. } => "config_write",
            Self::ConfigSerialize { .. } => "config_serialize",
            Self::InputRead { .. } => "input_read",
            Self::SubtitleParse { .. } => "subtitle_parse",
            Self::OutputWrite { .. } => "output_write",
            Self::Internal { .. } => "internal",
        }
    }

    /// Hint for the user on how to fix the error, if there is an obvious one.
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InputRead { .. } => Some("check that the input path exists and is UTF-8 text"),
            Self::SubtitleParse { .. } => {
                Some("each block needs a 'HH:MM:SS,mmm --> HH:MM:SS,mmm' timeline")
            }
            Self::ConfigParse { .. } | Self::ConfigValidation { .. } => {
                Some("run 'srt-merge config show' or fix the config file")
            }
            _ => None,
        }
    }
}
