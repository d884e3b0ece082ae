//! Adventure engine for Hearthtale.
//!
//! A keyword-driven text adventure: free-text input is classified into an
//! action and resolved against the character state and the genre's content
//! tables. Covers turn-based combat, exploration and travel, resting,
//! inventory and item use, side activities, and leveling. All randomness
//! flows through [`ht_core::RandomSource`].

pub mod activity;
pub mod classify;
pub mod combat;
pub mod config;
pub mod error;
pub mod explore;
pub mod inventory;
pub mod narrative;
pub mod progression;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod state;

pub use activity::Activity;
pub use classify::{Action, classify};
pub use config::AdventureConfig;
pub use error::{AdventureError, AdventureResult};
pub use session::AdventureSession;
pub use snapshot::{InventoryRow, Snapshot};
pub use state::{AdventureState, Enemy};
