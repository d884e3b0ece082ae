//! Error types for the core crate.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by strict parsing of user-facing identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Genre name is not one of the known packs.
    #[error("unknown genre: {0} (expected fantasy, sci-fi, or mystery)")]
    UnknownGenre(String),

    /// Session mode is neither adventure nor story.
    #[error("unknown session mode: {0} (expected adventure or story)")]
    UnknownMode(String),
}
