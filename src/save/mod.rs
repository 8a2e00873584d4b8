//! Snapshot persistence: capture, restore, and the JSON save file.

pub mod snapshot;

pub use snapshot::{GameSnapshot, SaveError, SavedCard};
