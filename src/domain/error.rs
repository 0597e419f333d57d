use std::io;

use thiserror::Error;

/// Library-wide error type for spec-switch operations.
///
/// Only host-level failures end up here. An input the mapper cannot handle
/// is a skipped outcome, not an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Layout configuration failed validation.
    #[error("Invalid layout configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Interactive prompt could not be shown or read.
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Neither `$VISUAL` nor `$EDITOR` is set.
    #[error("No editor configured. Set $VISUAL or $EDITOR, or omit --open.")]
    EditorNotConfigured,

    /// Editor process exited unsuccessfully.
    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed { editor: String, status: String },

    /// JSON serialization error.
    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
