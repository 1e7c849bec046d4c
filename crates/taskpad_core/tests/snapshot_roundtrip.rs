use std::fs;
use taskpad_core::{
    Filter, JsonSnapshotRepository, MemorySnapshotRepository, SnapshotRepository, Task, TaskStore,
    SNAPSHOT_FILE_NAME,
};

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::new("water plants");
    done.toggle();
    vec![Task::new("buy milk"), done, Task::new("walk dog")]
}

#[test]
fn file_roundtrip_preserves_tasks_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());
    let tasks = sample_tasks();

    repo.save(&tasks).unwrap();

    assert_eq!(repo.load(), tasks);
}

#[test]
fn repository_in_dir_uses_the_default_entry_name() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());

    assert_eq!(repo.path(), dir.path().join(SNAPSHOT_FILE_NAME));
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::new(dir.path().join("nested").join("tasks.json"));
    let tasks = sample_tasks();

    repo.save(&tasks).unwrap();

    assert_eq!(repo.load(), tasks);
}

#[test]
fn save_overwrites_the_prior_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());

    repo.save(&sample_tasks()).unwrap();
    let remaining = vec![Task::new("only survivor")];
    repo.save(&remaining).unwrap();

    assert_eq!(repo.load(), remaining);
}

#[test]
fn load_missing_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());

    assert!(repo.load().is_empty());
}

#[test]
fn load_corrupt_file_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());

    fs::write(repo.path(), "{ definitely not a task array").unwrap();
    assert!(repo.load().is_empty());

    fs::write(repo.path(), r#"{"tasks": []}"#).unwrap();
    assert!(repo.load().is_empty());
}

#[test]
fn memory_roundtrip_matches_the_file_wire_shape() {
    let repo = MemorySnapshotRepository::new();
    let tasks = sample_tasks();

    repo.save(&tasks).unwrap();
    assert_eq!(repo.load(), tasks);

    let raw = repo.raw_entry().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), tasks.len());

    let record = records[0].as_object().unwrap();
    assert!(record.contains_key("id"));
    assert!(record.contains_key("text"));
    assert!(record.contains_key("completed"));
    assert!(record.contains_key("createdAt"));
    assert!(record["createdAt"].is_string());
}

#[test]
fn corrupt_memory_entry_degrades_to_empty() {
    let repo = MemorySnapshotRepository::with_raw_entry("][");

    assert!(repo.load().is_empty());
}

#[test]
fn store_restart_restores_tasks_and_resets_filter() {
    let dir = tempfile::tempdir().unwrap();

    let mut store = TaskStore::open(JsonSnapshotRepository::in_dir(dir.path()));
    let milk = store.add("Buy milk").unwrap();
    store.add("Walk dog").unwrap();
    store.toggle(milk.id).unwrap();
    store.select_filter(Filter::Completed);
    let saved = store.list(Filter::All);
    drop(store);

    let reopened = TaskStore::open(JsonSnapshotRepository::in_dir(dir.path()));
    assert_eq!(reopened.list(Filter::All), saved);
    assert_eq!(reopened.selected_filter(), Filter::All);

    let stats = reopened.stats();
    assert_eq!((stats.total, stats.active, stats.completed), (2, 1, 1));
}

#[test]
fn store_open_over_corrupt_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonSnapshotRepository::in_dir(dir.path());
    fs::write(repo.path(), "not json at all").unwrap();

    let store = TaskStore::open(repo);

    assert!(store.list(Filter::All).is_empty());
    let stats = store.stats();
    assert_eq!((stats.total, stats.active, stats.completed), (0, 0, 0));
}
