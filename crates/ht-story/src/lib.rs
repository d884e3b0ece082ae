//! Collaborative storytelling for Hearthtale.
//!
//! A lighter companion to the adventure engine: no stats or combat, just a
//! shared transcript. Contributions are sorted into description requests,
//! questions, brief fragments, and detailed passages, and each gets a
//! genre-flavored reply that hands the pen back to the writer.

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod session;
pub mod templates;

pub use classify::{StoryInput, classify};
pub use config::StoryConfig;
pub use error::{StoryError, StoryResult};
pub use export::{ExportFormat, StoryDocument};
pub use session::StorySession;
