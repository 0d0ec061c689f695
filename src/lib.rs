//! taskflow: an in-memory task tracker with dashboard statistics.
//!
//! The `TaskStore` owns every task and derives counts, a completion rate
//! and a completion trend. Presentation layers call its mutations, then
//! re-read the derived views; the store never calls back into them.
//!
//! # Example
//!
//! ```
//! use taskflow::{StoreError, TaskPatch, TaskStore};
//!
//! let mut store = TaskStore::new();
//!
//! let milk = store.create("Buy milk", "").unwrap();
//! let bread = store.create("Buy bread", "wholegrain").unwrap();
//! store.create("Call plumber", "").unwrap();
//!
//! store.toggle_complete(&milk.id).unwrap();
//! store.update(&bread.id, &TaskPatch::new().title("Buy rye bread")).unwrap();
//!
//! let stats = store.stats();
//! assert_eq!(stats.total, 3);
//! assert_eq!(stats.completion_rate, 33);
//!
//! assert!(matches!(store.create("  ", ""), Err(StoreError::InvalidInput(_))));
//! assert!(matches!(store.toggle_complete("missing"), Err(StoreError::NotFound(_))));
//! ```

mod builder;
mod id;
mod store;
mod types;

pub mod config;
pub mod dashboard;
pub mod protocol;
pub mod session;
pub mod trend;

// Re-export public API
pub use builder::{StoreBuilderExt, TaskBuilder};
pub use config::Config;
pub use dashboard::Dashboard;
pub use protocol::{Request, Response};
pub use session::{ReplayFailure, Session};
pub use store::{CreateSpec, DEFAULT_RECENT_LIMIT, StoreError, TaskStore};
pub use trend::{CompletionTrend, MAX_TREND_DAYS, TrendMode};
pub use types::{ListFilter, Stats, Task, TaskPatch, ValidationError};
