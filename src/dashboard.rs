//! Read-only dashboard snapshot assembled from a store.
//!
//! Presentation layers re-read this after every mutation instead of
//! querying the store piecemeal.

use crate::config::Config;
use crate::store::TaskStore;
use crate::trend::{self, CompletionTrend, TrendMode};
use crate::types::{Stats, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Everything a dashboard view needs in one value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub stats: Stats,
    pub active: Vec<Task>,
    pub completed: Vec<Task>,
    pub recent: Vec<Task>,
    /// Donut chart data: `[completed, active]`
    pub donut: [usize; 2],
    pub trend: CompletionTrend,
}

impl Dashboard {
    /// Snapshot the store as seen on `today`.
    pub fn from_store(store: &TaskStore, config: &Config, today: NaiveDate) -> Self {
        let stats = store.stats();
        Self {
            stats,
            active: store.list_active(),
            completed: store.list_completed(),
            recent: store.list_recent(config.recent_limit),
            donut: [stats.completed, stats.active],
            trend: labelled_trend(store, config.trend_mode, config.trend_days, today),
        }
    }
}

/// Trend counts for the `days` days ending on `today`, with weekday labels.
pub fn labelled_trend(store: &TaskStore, mode: TrendMode, days: usize, today: NaiveDate) -> CompletionTrend {
    let counts = match mode {
        TrendMode::Synthetic => store.completion_trend(days),
        TrendMode::History => trend::completion_history(&store.list_completed(), today, days),
    };
    CompletionTrend {
        labels: trend::trend_labels(today, days),
        counts,
    }
}
