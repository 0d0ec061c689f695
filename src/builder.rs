//! Builder pattern API for creating tasks.

use crate::store::{StoreError, TaskStore};
use crate::types::Task;

/// Builder for creating tasks with a fluent API.
///
/// # Example
///
/// ```
/// use taskflow::{StoreBuilderExt, TaskStore};
///
/// let mut store = TaskStore::new();
/// let task = store.build("Write release notes")
///     .description("Cover the new dashboard")
///     .create()
///     .unwrap();
/// assert_eq!(task.title, "Write release notes");
/// ```
pub struct TaskBuilder<'a> {
    store: &'a mut TaskStore,
    title: String,
    description: Option<String>,
}

impl<'a> TaskBuilder<'a> {
    /// Create a new builder with the given title.
    pub fn new(store: &'a mut TaskStore, title: impl Into<String>) -> Self {
        Self {
            store,
            title: title.into(),
            description: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Create the task.
    pub fn create(self) -> Result<Task, StoreError> {
        self.store
            .create(&self.title, self.description.as_deref().unwrap_or(""))
    }
}

/// Extension trait to add builder method to TaskStore.
pub trait StoreBuilderExt {
    /// Start building a new task with the given title.
    fn build(&mut self, title: impl Into<String>) -> TaskBuilder<'_>;
}

impl StoreBuilderExt for TaskStore {
    fn build(&mut self, title: impl Into<String>) -> TaskBuilder<'_> {
        TaskBuilder::new(self, title)
    }
}
