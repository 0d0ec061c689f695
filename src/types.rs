//! Core data types for taskflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do item tracked by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier: "tf-" + sequence + "-" + 6 hex chars
    pub id: String,

    /// Short description of the work
    pub title: String,

    /// Optional longer description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the task is done
    #[serde(default)]
    pub completed: bool,

    /// When created
    pub created_at: DateTime<Utc>,

    /// Last modification
    pub updated_at: DateTime<Utc>,

    /// When completed (only while completed == true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// True when the task has not been completed yet.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Validate the task's fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)?;

        if self.updated_at < self.created_at {
            return Err(ValidationError::InvalidTimestamp);
        }

        if self.completed_at.is_some() != self.completed {
            return Err(ValidationError::CompletedAtMismatch);
        }

        Ok(())
    }
}

/// Check that a title is non-empty after trimming surrounding whitespace.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

/// Partial set of field changes applied by `TaskStore::update`.
///
/// `None` leaves the field untouched. An empty description clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// Aggregate counts derived from the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
    /// Percentage of tasks completed, 0-100, rounded half-up
    pub completion_rate: u8,
}

impl Stats {
    /// Derive stats from completed/total counts.
    pub fn from_counts(total: usize, completed: usize) -> Self {
        let completed = completed.min(total);
        Self {
            total,
            active: total - completed,
            completed,
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// `round(100 * completed / total)` with half-up rounding, 0 for an empty store.
pub fn completion_rate(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    // floor(100c/t + 1/2) without floating point
    ((200 * completed + total) / (2 * total)) as u8
}

/// Which slice of the store a list query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl ListFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Active => !task.completed,
            ListFilter::Completed => task.completed,
        }
    }
}

/// Validation errors for tasks.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptyTitle,
    InvalidTimestamp,
    CompletedAtMismatch,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "title cannot be empty"),
            ValidationError::InvalidTimestamp => write!(f, "updated_at cannot be before created_at"),
            ValidationError::CompletedAtMismatch => {
                write!(f, "completed_at must be set exactly when the task is completed")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
