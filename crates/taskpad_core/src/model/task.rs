//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record owned by the store.
//! - Define the read-only filter selector exposed to presentation.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `text` is non-empty after trimming and immutable after creation.
//! - `completed` changes only through `toggle`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task in a list.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// A single to-do item.
///
/// `created_at` is captured once at creation and serves display purposes
/// only; list order is insertion order, not timestamp order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for lookup and equality.
    pub id: TaskId,
    /// Display text, trimmed and non-empty at creation.
    pub text: String,
    /// Completion flag, flipped by toggle.
    pub completed: bool,
    /// Serialized as `createdAt` (ISO-8601) to match the stored schema naming.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a generated stable ID.
    ///
    /// # Invariants
    /// - The generated ID is collision-resistant even across creations
    ///   within the same instant.
    /// - `completed` starts as `false`.
    /// - Callers pass already-trimmed, non-empty text.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), text)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by fixtures and import paths where identity already exists.
    pub fn with_id(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Read-only view selector over a task list.
///
/// Session state only: never persisted, and every store starts back at
/// `All`. Selecting a filter never mutates or reorders stored tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Every task.
    #[default]
    All,
    /// Tasks with `completed == false`.
    Active,
    /// Tasks with `completed == true`.
    Completed,
}

impl Filter {
    /// Returns whether `task` is visible under this filter.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Stable string key exposed to the presentation layer.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a presentation-layer filter key.
    ///
    /// Exactly `all`, `active` and `completed` are accepted.
    pub fn parse_key(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}
