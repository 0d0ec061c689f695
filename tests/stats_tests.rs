//! Integration tests for derived statistics and the completion trend.

mod common;

use common::TestEnv;
use taskflow::trend::{completion_trend, trend_labels};
use taskflow::{Config, Dashboard, TrendMode};

// =============================================================================
// Stats Scenarios
// =============================================================================

#[test]
fn test_single_active_task() {
    let mut env = TestEnv::new();

    let task = env.create_task_with_desc("Buy milk", "");

    assert!(!task.completed);
    env.assert_stats(1, 1, 0, 0);
}

#[test]
fn test_one_of_three_completed() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(3);

    env.complete(&tasks[1]);

    env.assert_stats(3, 2, 1, 33);
}

#[test]
fn test_two_of_three_completed_rounds_up() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(3);
    env.complete(&tasks[0]);
    env.complete(&tasks[2]);

    env.assert_stats(3, 1, 2, 67);
}

#[test]
fn test_half_rounds_up() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(8);
    env.complete(&tasks[0]);

    // 12.5% rounds to 13
    env.assert_stats(8, 7, 1, 13);
}

#[test]
fn test_all_completed() {
    let mut env = TestEnv::new();
    for task in env.create_tasks(4) {
        env.complete(&task);
    }
    env.assert_stats(4, 0, 4, 100);
}

// =============================================================================
// Completion Trend
// =============================================================================

#[test]
fn test_seven_of_seven_trend() {
    let mut env = TestEnv::new();
    for task in env.create_tasks(7) {
        env.complete(&task);
    }

    assert_eq!(env.store.completion_trend(7), vec![1, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn test_trend_ignores_active_tasks() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(10);
    env.complete(&tasks[0]);
    env.complete(&tasks[1]);

    assert_eq!(env.store.completion_trend(7), vec![1, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn test_trend_sum_matches_completed() {
    let mut env = TestEnv::new();
    for task in env.create_tasks(23) {
        env.complete(&task);
    }

    for days in 1..=31 {
        let trend = env.store.completion_trend(days);
        assert_eq!(trend.len(), days);
        assert_eq!(trend.iter().sum::<u32>() as usize, env.store.stats().completed);
    }
}

#[test]
fn test_trend_buckets_differ_by_at_most_one() {
    let trend = completion_trend(40, 7);
    let max = trend.iter().max().unwrap();
    let min = trend.iter().min().unwrap();
    assert!(max - min <= 1);
    // Larger buckets come first
    assert!(trend.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_trend_labels_match_window() {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(); // Sunday
    let labels = trend_labels(today, 7);
    assert_eq!(labels.first().map(String::as_str), Some("Mon"));
    assert_eq!(labels.last().map(String::as_str), Some("Sun"));
}

// =============================================================================
// Dashboard Snapshot
// =============================================================================

#[test]
fn test_dashboard_partition_and_donut() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(5);
    env.complete(&tasks[0]);
    env.complete(&tasks[3]);

    let today = chrono::Local::now().date_naive();
    let dashboard = Dashboard::from_store(&env.store, &Config::default(), today);

    assert_eq!(dashboard.donut, [2, 3]);
    assert_eq!(dashboard.active.len() + dashboard.completed.len(), dashboard.stats.total);
    assert_eq!(dashboard.trend.total(), 2);
    env.assert_partition();
}

#[test]
fn test_dashboard_history_mode_counts_today() {
    let mut env = TestEnv::new();
    let tasks = env.create_tasks(3);
    env.complete(&tasks[0]);
    env.complete(&tasks[1]);

    let config = Config {
        trend_mode: TrendMode::History,
        ..Config::default()
    };
    let today = chrono::Local::now().date_naive();
    let dashboard = Dashboard::from_store(&env.store, &config, today);

    assert_eq!(dashboard.trend.counts, vec![0, 0, 0, 0, 0, 0, 2]);
}

#[test]
fn test_dashboard_serializes() {
    let mut env = TestEnv::new();
    env.create_task("Serialize me");

    let dashboard = Dashboard::from_store(&env.store, &Config::default(), chrono::Local::now().date_naive());
    let json = serde_json::to_value(&dashboard).unwrap();

    assert_eq!(json["stats"]["total"], 1);
    assert_eq!(json["stats"]["completion_rate"], 0);
    assert_eq!(json["active"][0]["title"], "Serialize me");
    assert_eq!(json["trend"]["counts"].as_array().unwrap().len(), 7);
}
