//! Task store: canonical list state and derived views.
//!
//! # Responsibility
//! - Own the ordered task list and apply every mutation to it.
//! - Persist a snapshot after each successful mutation.
//! - Notify subscribers so presentation can re-pull views.
//!
//! # Invariants
//! - A mutation either fully applies or is rejected with no state change.
//! - A failed snapshot write never rolls back the in-memory mutation.
//! - List order is insertion order; toggle and filter never reorder.

use crate::model::task::{Filter, Task, TaskId};
use crate::repo::snapshot_repo::SnapshotRepository;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation errors surfaced to the presentation layer.
///
/// Both variants are recoverable by policy: callers drop the event instead
/// of surfacing an error dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Submitted text was empty after trimming.
    EmptyText,
    /// No task carries the referenced ID (stale reference).
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "task text is empty after trimming"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Derived task counts, recomputed on demand.
///
/// `active + completed == total` holds in every reachable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Data handed to the presentation layer on every state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Filter the task sequence was projected through.
    pub filter: Filter,
    /// Tasks visible under `filter`, in stored order.
    pub tasks: Vec<Task>,
    /// Counts over the full list, not the filtered one.
    pub stats: TaskStats,
}

/// State-change notification delivered to subscribers.
///
/// Carries only the change kind; subscribers re-pull `list`/`stats`/`view`
/// for the data itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    TaskAdded,
    TaskToggled,
    TaskRemoved,
    FilterSelected,
}

type ChangeListener = Box<dyn Fn(ChangeEvent)>;

/// Canonical task list with persistence and change notification.
///
/// The store is the single owner of every task it holds; external callers
/// read through `list`/`stats`/`view` and mutate only through `add`,
/// `toggle` and `remove`.
pub struct TaskStore<R: SnapshotRepository> {
    repo: R,
    tasks: Vec<Task>,
    filter: Filter,
    listeners: Vec<ChangeListener>,
}

impl<R: SnapshotRepository> TaskStore<R> {
    /// Opens a store over `repo`, restoring the last saved list.
    ///
    /// First runs and corrupt snapshots restore as empty. The selected
    /// filter always starts at `Filter::All`.
    pub fn open(repo: R) -> Self {
        let tasks = repo.load();
        info!(
            "event=store_open module=store status=ok tasks={}",
            tasks.len()
        );
        Self {
            repo,
            tasks,
            filter: Filter::All,
            listeners: Vec::new(),
        }
    }

    /// Appends a new task built from `text` and returns it.
    ///
    /// The text is trimmed before use; the created task gets a fresh ID,
    /// `completed == false` and the current time as `created_at`.
    ///
    /// # Errors
    /// Returns `StoreError::EmptyText` when `text` trims to nothing. The
    /// list is left untouched and no notification fires; callers discard
    /// the submission silently.
    pub fn add(&mut self, text: &str) -> StoreResult<Task> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::EmptyText);
        }

        let task = Task::new(trimmed);
        self.tasks.push(task.clone());
        self.persist("add");
        self.notify(ChangeEvent::TaskAdded);
        Ok(task)
    }

    /// Flips the completion flag of the task carrying `id`.
    ///
    /// All other tasks and fields stay untouched.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown ID; callers treat
    /// this as a stale-reference no-op.
    pub fn toggle(&mut self, id: TaskId) -> StoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        task.toggle();
        self.persist("toggle");
        self.notify(ChangeEvent::TaskToggled);
        Ok(())
    }

    /// Removes the task carrying `id`, preserving the order of the rest.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` for an unknown ID; callers treat
    /// this as a stale-reference no-op.
    pub fn remove(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        self.persist("remove");
        self.notify(ChangeEvent::TaskRemoved);
        Ok(())
    }

    /// Lists tasks in stored order, filtered by `filter`.
    ///
    /// Pure projection with no side effects.
    pub fn list(&self, filter: Filter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| filter.matches(task))
            .cloned()
            .collect()
    }

    /// Counts tasks by completion state.
    ///
    /// Recomputed from the current list on every call, never cached.
    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskStats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Selects the session filter and notifies subscribers.
    ///
    /// Filter selection is view state only; it is never persisted.
    pub fn select_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.notify(ChangeEvent::FilterSelected);
    }

    /// Returns the currently selected session filter.
    pub fn selected_filter(&self) -> Filter {
        self.filter
    }

    /// Builds the presentation envelope for the selected filter.
    pub fn view(&self) -> TaskView {
        TaskView {
            filter: self.filter,
            tasks: self.list(self.filter),
            stats: self.stats(),
        }
    }

    /// Registers a listener invoked after every state change.
    ///
    /// Rejected operations fire no event.
    pub fn subscribe(&mut self, listener: impl Fn(ChangeEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&self, operation: &str) {
        if let Err(err) = self.repo.save(&self.tasks) {
            // Durability lags but in-memory state stays authoritative.
            error!(
                "event=snapshot_save module=store status=error operation={operation} tasks={} error={err}",
                self.tasks.len()
            );
        }
    }

    fn notify(&self, event: ChangeEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
