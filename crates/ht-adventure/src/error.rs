//! Error types for the adventure engine.

use thiserror::Error;

/// Result type for adventure operations.
pub type AdventureResult<T> = Result<T, AdventureError>;

/// Errors that can occur during an adventure session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdventureError {
    /// The character is defeated and the action would change state.
    #[error("You cannot {action} while defeated.")]
    Defeated {
        /// Verb phrase for the refused action.
        action: &'static str,
    },
}
