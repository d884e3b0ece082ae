//! Core types for Hearthtale.
//!
//! Provides the genre selector and its static content tables, the capped
//! message log with its append-only transcript, the injectable random
//! source shared by every resolver, and session launch parameters.

pub mod content;
pub mod error;
pub mod genre;
pub mod launch;
pub mod message;
pub mod random;
pub mod reply;

pub use content::{EnemyTemplate, GenreContent, Location, is_boss};
pub use error::{CoreError, CoreResult};
pub use genre::Genre;
pub use launch::{LaunchParams, SessionMode};
pub use message::{Message, MessageKind, MessageLog, Sender, TranscriptLine};
pub use random::{RandomSource, ScriptedSource};
pub use reply::Reply;
