//! High-level store API for taskflow.

use crate::id::IdGenerator;
use crate::trend;
use crate::types::{ListFilter, Stats, Task, TaskPatch, ValidationError, validate_title};
use chrono::Utc;
use log::debug;
use std::collections::HashMap;

/// Number of tasks `list_recent` returns by default.
pub const DEFAULT_RECENT_LIMIT: usize = 3;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Task not found.
    NotFound(String),
    /// Input rejected before any mutation.
    InvalidInput(ValidationError),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "task not found: {}", id),
            StoreError::InvalidInput(e) => write!(f, "invalid input: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::InvalidInput(e) => Some(e),
            StoreError::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::InvalidInput(e)
    }
}

/// Title and description for one task to create.
#[derive(Debug, Clone)]
pub struct CreateSpec {
    pub title: String,
    pub description: Option<String>,
}

impl CreateSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Tasks inserted by `seed_welcome` into an empty store.
const WELCOME_TASKS: [(&str, &str); 3] = [
    (
        "Welcome to TaskFlow!",
        "This is your first task. Click the complete button to mark it as done.",
    ),
    (
        "Explore the Analytics",
        "Check out the analytics section to see visual insights about your tasks.",
    ),
    ("Try editing a task", "Click the edit button on any task to modify it."),
];

/// The in-memory task store.
///
/// Owns every task exclusively; queries hand out clones. Mutations take
/// `&mut self`, so a single owner serializes all access.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: HashMap<String, Task>,
    order: Vec<String>,
    ids: IdGenerator,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new task.
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task, StoreError> {
        validate_title(title)?;

        let now = Utc::now();
        let title = title.trim();
        let task = Task {
            id: self.ids.next_id(title, now),
            title: title.to_string(),
            description: normalize_description(description),
            completed: false,
            created_at: now,
            updated_at: now,
            completed_at: None,
        };

        debug_assert!(task.validate().is_ok());
        debug!("created task {} {:?}", task.id, task.title);
        self.order.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task.clone());
        Ok(task)
    }

    /// Create several tasks; if any spec is invalid nothing is inserted.
    pub fn create_batch(&mut self, specs: &[CreateSpec]) -> Result<Vec<Task>, StoreError> {
        for spec in specs {
            validate_title(&spec.title)?;
        }

        specs
            .iter()
            .map(|spec| self.create(&spec.title, spec.description.as_deref().unwrap_or("")))
            .collect()
    }

    /// Insert the welcome tasks when the store is empty. Returns how many were added.
    pub fn seed_welcome(&mut self) -> Result<usize, StoreError> {
        if !self.is_empty() {
            return Ok(0);
        }
        let specs: Vec<CreateSpec> = WELCOME_TASKS
            .iter()
            .map(|(title, description)| CreateSpec::new(*title).with_description(*description))
            .collect();
        Ok(self.create_batch(&specs)?.len())
    }

    /// Get a task by ID.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Apply a partial update. `id` and `created_at` never change.
    pub fn update(&mut self, id: &str, patch: &TaskPatch) -> Result<Task, StoreError> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }

        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if let Some(title) = &patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = &patch.description {
            task.description = normalize_description(description);
        }
        task.updated_at = Utc::now().max(task.created_at);

        debug!("updated task {}", id);
        Ok(task.clone())
    }

    /// Remove a task. Missing IDs are ignored.
    pub fn delete(&mut self, id: &str) {
        if self.tasks.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            debug!("deleted task {}", id);
        }
    }

    /// Flip a task between active and completed.
    pub fn toggle_complete(&mut self, id: &str) -> Result<Task, StoreError> {
        let task = self
            .tasks
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        // Wall clock may step back past created_at
        let now = Utc::now().max(task.created_at);
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(now);
        task.updated_at = now;

        debug_assert!(task.validate().is_ok());
        debug!("task {} completed={}", id, task.completed);
        Ok(task.clone())
    }

    /// Tasks in insertion order.
    fn iter(&self) -> impl Iterator<Item = &Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id))
    }

    /// List tasks matching a filter, in insertion order.
    pub fn list(&self, filter: ListFilter) -> Vec<Task> {
        self.iter().filter(|t| filter.matches(t)).cloned().collect()
    }

    pub fn list_active(&self) -> Vec<Task> {
        self.list(ListFilter::Active)
    }

    pub fn list_completed(&self) -> Vec<Task> {
        self.list(ListFilter::Completed)
    }

    pub fn list_all(&self) -> Vec<Task> {
        self.list(ListFilter::All)
    }

    /// The `n` most recently created tasks, newest first.
    /// Equal timestamps fall back to reverse insertion order.
    pub fn list_recent(&self, n: usize) -> Vec<Task> {
        let mut indexed: Vec<(usize, &Task)> = self.iter().enumerate().collect();
        indexed.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        indexed.into_iter().take(n).map(|(_, t)| t.clone()).collect()
    }

    /// Derived counts and completion rate.
    pub fn stats(&self) -> Stats {
        let completed = self.tasks.values().filter(|t| t.completed).count();
        Stats::from_counts(self.tasks.len(), completed)
    }

    /// Synthetic trend: completed count spread evenly over `days` buckets, oldest first.
    pub fn completion_trend(&self, days: usize) -> Vec<u32> {
        trend::completion_trend(self.stats().completed, days)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn normalize_description(description: &str) -> Option<String> {
    let description = description.trim();
    (!description.is_empty()).then(|| description.to_string())
}
