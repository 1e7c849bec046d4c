//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot contract the store persists through.
//! - Isolate JSON entry details from store orchestration.
//!
//! # Invariants
//! - Snapshots always hold the full list; there is no incremental format.
//! - Read-side failures degrade to an empty list instead of propagating.

pub mod snapshot_repo;
