// ABOUTME: Tests for training log aggregation and weekly progress summaries
// ABOUTME: Validates recency ordering, recurring problem detection, and rate averaging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use apex_core::models::TrainingLog;
use apex_intelligence::{average_escape_rate, most_recent_logs, recurring_problems, WeeklyProgress};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 14, 20, 0, 0).unwrap()
}

fn log_at(id: &str, hours_ago: i64, attempts: u32, successes: u32, problem: Option<&str>) -> TrainingLog {
    let log = TrainingLog::new(id, "user-1", now() - Duration::hours(hours_ago), attempts, successes)
        .unwrap();
    match problem {
        Some(problem) => log.with_problem(problem),
        None => log,
    }
}

#[test]
fn test_most_recent_logs_sorts_newest_first() {
    let logs = vec![
        log_at("old", 72, 1, 0, None),
        log_at("newest", 1, 1, 0, None),
        log_at("middle", 24, 1, 0, None),
    ];
    let ids: Vec<_> = most_recent_logs(&logs, 2).iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["newest", "middle"]);
    assert_eq!(most_recent_logs(&logs, 10).len(), 3);
    assert!(most_recent_logs(&[], 3).is_empty());
}

#[test]
fn test_recurring_problems_examples() {
    let repeated = vec![
        log_at("1", 1, 1, 0, Some("A")),
        log_at("2", 2, 1, 0, Some("A")),
        log_at("3", 3, 1, 0, Some("B")),
    ];
    assert_eq!(recurring_problems(&repeated, 3, 2), vec!["A".to_owned()]);

    let distinct = vec![
        log_at("1", 1, 1, 0, Some("A")),
        log_at("2", 2, 1, 0, Some("B")),
        log_at("3", 3, 1, 0, Some("C")),
    ];
    assert!(recurring_problems(&distinct, 3, 2).is_empty());
}

#[test]
fn test_recurring_problems_are_exact_matches() {
    let logs = vec![
        log_at("1", 1, 1, 0, Some("Frames collapse")),
        log_at("2", 2, 1, 0, Some("frames collapse")),
        log_at("3", 3, 1, 0, None),
    ];
    assert!(recurring_problems(&logs, 3, 2).is_empty());
}

#[test]
fn test_recurring_problems_ignore_logs_outside_window() {
    let logs = vec![
        log_at("4", 96, 1, 0, Some("A")),
        log_at("1", 1, 1, 0, Some("A")),
        log_at("2", 2, 1, 0, Some("B")),
        log_at("3", 3, 1, 0, Some("B")),
    ];
    assert_eq!(recurring_problems(&logs, 3, 2), vec!["B".to_owned()]);
    assert_eq!(
        recurring_problems(&logs, 4, 2),
        vec!["A".to_owned(), "B".to_owned()]
    );
}

#[test]
fn test_average_escape_rate() {
    assert_eq!(average_escape_rate(&[]), 0.0);

    let logs = vec![
        log_at("1", 1, 4, 1, None),
        log_at("2", 2, 2, 2, None),
        log_at("3", 3, 0, 0, None),
        log_at("4", 4, 4, 3, None),
    ];
    let expected = (0.25 + 1.0 + 0.0 + 0.75) / 4.0;
    assert_eq!(average_escape_rate(&logs), expected);
}

#[test]
fn test_weekly_progress_compares_windows() {
    let logs = vec![
        // this week: 0.5, 1.0, and 0.0
        log_at("t1", 24, 4, 2, Some("Frames collapse")),
        log_at("t2", 48, 4, 4, Some("Too slow")),
        log_at("t3", 72, 0, 0, Some("Frames collapse")),
        // last week: 0.25
        log_at("l1", 24 * 8, 4, 1, Some("Gave up back")),
        // outside both windows
        log_at("x1", 24 * 15, 4, 4, None),
    ];
    let progress = WeeklyProgress::compute(&logs, now());

    assert_eq!(progress.this_week_sessions, 3);
    assert_eq!(progress.last_week_sessions, 1);
    assert_eq!(progress.this_week_rate, 50);
    assert_eq!(progress.last_week_rate, 25);
    assert_eq!(progress.improvement, 25);
    assert_eq!(progress.top_problem, "Frames collapse");
    assert_eq!(progress.problem_count, 2);
}

#[test]
fn test_weekly_progress_window_edges() {
    let logs = vec![
        // exactly seven days ago belongs to this week
        log_at("edge-this", 24 * 7, 2, 2, None),
        // exactly fourteen days ago belongs to last week
        log_at("edge-last", 24 * 14, 2, 0, None),
    ];
    let progress = WeeklyProgress::compute(&logs, now());
    assert_eq!(progress.this_week_sessions, 1);
    assert_eq!(progress.last_week_sessions, 1);
    assert_eq!(progress.this_week_rate, 100);
    assert_eq!(progress.last_week_rate, 0);
}

#[test]
fn test_weekly_progress_top_problem_ties_and_default() {
    let tied = vec![
        log_at("1", 1, 1, 0, Some("Timing")),
        log_at("2", 2, 1, 0, Some("Frames")),
    ];
    let progress = WeeklyProgress::compute(&tied, now());
    assert_eq!(progress.top_problem, "Timing");
    assert_eq!(progress.problem_count, 1);

    let empty = WeeklyProgress::compute(&[], now());
    assert_eq!(empty.top_problem, "No specific problem identified");
    assert_eq!(empty.problem_count, 0);
    assert_eq!(empty.this_week_rate, 0);
    assert_eq!(empty.improvement, 0);
}
