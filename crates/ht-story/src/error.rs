//! Error types for story sessions.

use thiserror::Error;

/// Result type for story operations.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur during a story session.
#[derive(Debug, Error)]
pub enum StoryError {
    /// Export format not recognized.
    #[error("unknown format '{0}', use: markdown, text, json")]
    UnknownExportFormat(String),

    /// Slash command not recognized.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// JSON export failed.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
