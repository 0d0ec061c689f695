//! Completion trend bucketing for the dashboard bar chart.
//!
//! Two flavours exist. The synthetic trend spreads the current completed
//! count evenly over the window. The history trend counts tasks by the
//! local calendar day of their `completed_at` timestamp.

use crate::types::Task;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Default trend window, one week.
pub const DEFAULT_TREND_DAYS: usize = 7;

/// Widest trend window accepted from requests and config, one leap year.
pub const MAX_TREND_DAYS: usize = 366;

/// True when `days` is a window the dashboard can chart.
pub fn is_valid_window(days: usize) -> bool {
    (1..=MAX_TREND_DAYS).contains(&days)
}

/// How the dashboard computes its trend counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMode {
    #[default]
    Synthetic,
    History,
}

/// Labelled trend series, oldest day first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionTrend {
    pub labels: Vec<String>,
    pub counts: Vec<u32>,
}

impl CompletionTrend {
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Largest bucket, used to scale bar charts.
    pub fn peak(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Spread `completed` across `days` buckets; the first `completed % days`
/// buckets receive one extra. Bucket `i` is `days - 1 - i` days ago.
pub fn completion_trend(completed: usize, days: usize) -> Vec<u32> {
    if days == 0 {
        return Vec::new();
    }
    let per_day = (completed / days) as u32;
    let remainder = completed % days;
    (0..days)
        .map(|i| if i < remainder { per_day + 1 } else { per_day })
        .collect()
}

/// Count completed tasks per local calendar day for the `days` days ending
/// on `today`, oldest first. Completions outside the window are ignored.
pub fn completion_history<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate, days: usize) -> Vec<u32> {
    let mut counts = vec![0u32; days];
    if days == 0 {
        return counts;
    }
    for completed_at in tasks.into_iter().filter_map(|t| t.completed_at) {
        let day = completed_at.with_timezone(&Local).date_naive();
        let age = (today - day).num_days();
        if age >= 0 && (age as usize) < days {
            counts[days - 1 - age as usize] += 1;
        }
    }
    counts
}

/// Weekday abbreviations for the `days` days ending on `today`, oldest first.
pub fn trend_labels(today: NaiveDate, days: usize) -> Vec<String> {
    (0..days)
        .rev()
        .map(|ago| weekday_abbrev((today - Duration::days(ago as i64)).weekday()).to_string())
        .collect()
}

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
