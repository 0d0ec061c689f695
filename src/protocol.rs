//! JSON-lines protocol between a presentation layer and a session.

use crate::dashboard::Dashboard;
use crate::trend::CompletionTrend;
use crate::types::{ListFilter, Stats, Task, TaskPatch};
use serde::{Deserialize, Serialize};

/// Request sent from a presentation layer to the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Create a new task.
    Create {
        title: String,
        #[serde(default)]
        description: String,
    },

    /// Apply a partial update to a task.
    Update {
        id: String,
        #[serde(flatten)]
        patch: TaskPatch,
    },

    /// Delete a task (missing IDs are not an error).
    Delete { id: String },

    /// Flip a task between active and completed.
    Toggle { id: String },

    /// Get a task by ID.
    Get { id: String },

    /// List tasks, all by default.
    List {
        #[serde(default)]
        filter: ListFilter,
    },

    /// Most recently created tasks.
    Recent {
        #[serde(default)]
        n: Option<usize>,
    },

    /// Aggregate counts.
    Stats,

    /// Labelled completion trend.
    Trend {
        #[serde(default)]
        days: Option<usize>,
    },

    /// Full dashboard snapshot.
    Dashboard,

    /// Insert the welcome tasks into an empty store.
    Seed,

    /// Ping to check if the session is alive.
    Ping,

    /// End the session.
    Shutdown,
}

/// Response sent from the session back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    /// Single task response.
    Task { task: Task },

    /// Multiple tasks response.
    Tasks { tasks: Vec<Task> },

    Stats { stats: Stats },

    Trend { trend: CompletionTrend },

    Dashboard { dashboard: Box<Dashboard> },

    /// Number of welcome tasks inserted.
    Seeded { count: usize },

    /// Task not found.
    NotFound { id: String },

    /// Input rejected; nothing changed.
    Invalid { message: String },

    /// Operation succeeded.
    Ok,

    /// Pong response to ping.
    Pong,

    /// Error response.
    Error { message: String },
}

impl Response {
    /// Create an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}
