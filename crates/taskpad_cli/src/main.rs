//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskpad_core::{MemorySnapshotRepository, TaskStore};

fn main() {
    println!("taskpad_core ping={}", taskpad_core::ping());
    println!("taskpad_core version={}", taskpad_core::core_version());

    let mut store = TaskStore::open(MemorySnapshotRepository::new());
    if store.add("smoke task").is_ok() {
        let stats = store.stats();
        println!(
            "taskpad_core smoke total={} active={} filter={}",
            stats.total,
            stats.active,
            store.selected_filter().as_key()
        );
    }
}
