//! Error taxonomy for the snapshot pipeline.

mod types;

pub use types::{InitializationError, SnapshotError};
