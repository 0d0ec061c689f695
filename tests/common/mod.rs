//! Shared test infrastructure for taskflow integration tests.
//!
//! Provides TestEnv helper for consistent test setup.

#![allow(dead_code)]

use std::collections::HashSet;
use taskflow::{Stats, Task, TaskPatch, TaskStore};

/// Test environment wrapping a fresh store.
pub struct TestEnv {
    pub store: TaskStore,
}

impl TestEnv {
    /// Create a new test environment with an empty store.
    pub fn new() -> Self {
        Self {
            store: TaskStore::new(),
        }
    }

    /// Create a task with no description.
    pub fn create_task(&mut self, title: &str) -> Task {
        self.store.create(title, "").expect("Failed to create task")
    }

    /// Create a task with a description.
    pub fn create_task_with_desc(&mut self, title: &str, description: &str) -> Task {
        self.store
            .create(title, description)
            .expect("Failed to create task")
    }

    /// Create `n` tasks titled "Task 0".."Task n-1".
    pub fn create_tasks(&mut self, n: usize) -> Vec<Task> {
        (0..n).map(|i| self.create_task(&format!("Task {}", i))).collect()
    }

    /// Mark a task completed (it must currently be active).
    pub fn complete(&mut self, task: &Task) -> Task {
        let toggled = self.store.toggle_complete(&task.id).expect("Failed to toggle task");
        assert!(toggled.completed, "Expected task {} to become completed", task.id);
        toggled
    }

    /// Rename a task.
    pub fn rename(&mut self, task: &Task, title: &str) -> Task {
        self.store
            .update(&task.id, &TaskPatch::new().title(title))
            .expect("Failed to update task")
    }

    /// Assert the stats match the expected values.
    pub fn assert_stats(&self, total: usize, active: usize, completed: usize, completion_rate: u8) {
        assert_eq!(
            self.store.stats(),
            Stats {
                total,
                active,
                completed,
                completion_rate
            }
        );
    }

    /// Assert that a task is in the active list.
    pub fn assert_active(&self, task: &Task) {
        let active = self.store.list_active();
        assert!(
            active.iter().any(|t| t.id == task.id),
            "Expected task {} to be active, but it wasn't. Active tasks: {:?}",
            task.id,
            active.iter().map(|t| &t.id).collect::<Vec<_>>()
        );
    }

    /// Assert that a task is in the completed list.
    pub fn assert_completed(&self, task: &Task) {
        let completed = self.store.list_completed();
        assert!(
            completed.iter().any(|t| t.id == task.id),
            "Expected task {} to be completed, but it wasn't",
            task.id
        );
    }

    /// Assert active and completed partition the full list.
    pub fn assert_partition(&self) {
        let ids = |tasks: Vec<Task>| tasks.into_iter().map(|t| t.id).collect::<HashSet<_>>();
        let active = ids(self.store.list_active());
        let completed = ids(self.store.list_completed());
        let all = ids(self.store.list_all());

        assert!(active.is_disjoint(&completed));
        assert_eq!(active.union(&completed).cloned().collect::<HashSet<_>>(), all);
    }

    /// Get all tasks count.
    pub fn total_count(&self) -> usize {
        self.store.list_all().len()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
