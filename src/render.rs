//! Terminal rendering of the dashboard.

use colored::*;
use taskflow::{Dashboard, Task};

/// Width of the progress bar and the tallest trend bar, in cells.
const BAR_WIDTH: usize = 30;
const CHART_HEIGHT: u32 = 6;

pub fn print_dashboard(dashboard: &Dashboard) {
    let stats = &dashboard.stats;

    println!("{}", "TaskFlow".bold());
    println!(
        "  {} {}   {} {}   {} {}   {} {}",
        "Total".dimmed(),
        stats.total.to_string().bold(),
        "Active".dimmed(),
        stats.active.to_string().yellow(),
        "Completed".dimmed(),
        stats.completed.to_string().green(),
        "Rate".dimmed(),
        format!("{}%", stats.completion_rate).cyan()
    );
    println!("  {}", progress_bar(stats.completion_rate));
    println!();

    print_section("Active", &dashboard.active, "No active tasks. Add one to get started!");
    print_section("Completed", &dashboard.completed, "No completed tasks yet. Keep going!");
    print_section(
        "Recent activity",
        &dashboard.recent,
        "No recent activity. Start by creating your first task!",
    );

    println!("{}", "Completed over the last days".bold());
    for line in trend_chart(&dashboard.trend.labels, &dashboard.trend.counts) {
        println!("  {}", line);
    }
}

fn print_section(heading: &str, tasks: &[Task], empty: &str) {
    println!("{} ({})", heading.bold(), tasks.len());
    if tasks.is_empty() {
        println!("  {}", empty.dimmed());
    }
    for task in tasks {
        println!("  {}", format_task(task));
    }
    println!();
}

fn format_task(task: &Task) -> String {
    let mark = if task.completed { "✓".green() } else { "○".yellow() };
    let title = if task.completed {
        task.title.strikethrough()
    } else {
        task.title.normal()
    };
    let description = task
        .description
        .as_ref()
        .map(|d| format!("\n      {}", d.dimmed()))
        .unwrap_or_default();
    format!("{} {} {}{}", mark, task.id.cyan(), title, description)
}

fn progress_bar(rate: u8) -> String {
    let filled = BAR_WIDTH * usize::from(rate.min(100)) / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed(),
        rate
    )
}

/// Vertical bar chart, one column per day, tallest bar scaled to CHART_HEIGHT rows.
fn trend_chart(labels: &[String], counts: &[u32]) -> Vec<String> {
    let peak = counts.iter().copied().max().unwrap_or(0);
    let heights: Vec<u32> = counts
        .iter()
        .map(|&c| if peak == 0 { 0 } else { (c * CHART_HEIGHT).div_ceil(peak) })
        .collect();

    let mut lines: Vec<String> = (1..=CHART_HEIGHT)
        .rev()
        .map(|row| {
            heights
                .iter()
                .map(|&h| if h >= row { format!(" {} ", "██".blue()) } else { "    ".to_string() })
                .collect::<String>()
        })
        .collect();

    lines.push(counts.iter().map(|c| format!("{:^4}", c)).collect());
    lines.push(labels.iter().map(|l| format!("{:^4}", l)).collect::<String>().dimmed().to_string());
    lines
}
