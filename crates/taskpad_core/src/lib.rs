//! Core task list state and persistence for taskpad.
//! This crate is the single source of truth for task lifecycle invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Filter, Task, TaskId};
pub use repo::snapshot_repo::{
    JsonSnapshotRepository, MemorySnapshotRepository, SnapshotError, SnapshotRepository,
    SnapshotResult, SNAPSHOT_FILE_NAME,
};
pub use store::task_store::{ChangeEvent, StoreError, StoreResult, TaskStats, TaskStore, TaskView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
