//! telemetry/mod.rs
//! Read-session counters and snapshots.
//!
//! - Counters are plain fields updated by the single reader thread.
//! - Snapshots are immutable and serialisable for logs or reports.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
