// ABOUTME: Aggregations over training logs: recency window, recurring problems, escape rates
// ABOUTME: Also computes the week-over-week progress summary shown in weekly reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training analysis
//!
//! Pure functions over slices of [`TrainingLog`]. None of them require the
//! input to be sorted; recency is always derived from `session_date`.

use apex_core::constants::training_log::NO_PROBLEM_IDENTIFIED;
use apex_core::models::TrainingLog;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The `n` most recent logs by session date, newest first.
///
/// Logs sharing a session date keep their input order.
#[must_use]
pub fn most_recent_logs(logs: &[TrainingLog], n: usize) -> Vec<&TrainingLog> {
    let mut sorted: Vec<&TrainingLog> = logs.iter().collect();
    sorted.sort_by(|a, b| b.session_date.cmp(&a.session_date));
    sorted.truncate(n);
    sorted
}

/// Problems occurring at least `min_occurrences` times among the `window` most
/// recent logs, in order of first appearance (newest first).
///
/// Problems are compared as exact strings.
#[must_use]
pub fn recurring_problems(
    logs: &[TrainingLog],
    window: usize,
    min_occurrences: usize,
) -> Vec<String> {
    let tallies = tally_problems(most_recent_logs(logs, window));
    tallies
        .into_iter()
        .filter(|(_, count)| *count >= min_occurrences)
        .map(|(problem, _)| problem.to_owned())
        .collect()
}

/// Arithmetic mean of `escape_rate` over every log, 0 when empty
#[must_use]
pub fn average_escape_rate(logs: &[TrainingLog]) -> f64 {
    mean_rate(logs.iter())
}

fn mean_rate<'a>(logs: impl Iterator<Item = &'a TrainingLog>) -> f64 {
    let (sum, count) = logs.fold((0.0, 0_u32), |(sum, count), log| {
        (sum + log.escape_rate, count + 1)
    });
    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

// Insertion-ordered tally; the window is tiny so a linear scan is fine
fn tally_problems<'a>(logs: impl IntoIterator<Item = &'a TrainingLog>) -> Vec<(&'a str, usize)> {
    let mut tallies: Vec<(&str, usize)> = Vec::new();
    for problem in logs.into_iter().filter_map(|log| log.main_problem.as_deref()) {
        match tallies.iter_mut().find(|(seen, _)| *seen == problem) {
            Some((_, count)) => *count += 1,
            None => tallies.push((problem, 1)),
        }
    }
    tallies
}

/// Week-over-week progress summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    /// Average escape rate over the last 7 days, as a rounded percentage
    pub this_week_rate: i64,
    /// Average escape rate 7-14 days ago, as a rounded percentage
    pub last_week_rate: i64,
    /// `this_week_rate - last_week_rate`
    pub improvement: i64,
    /// Sessions logged in the last 7 days
    pub this_week_sessions: usize,
    /// Sessions logged 7-14 days ago
    pub last_week_sessions: usize,
    /// Most frequent problem this week
    pub top_problem: String,
    /// Occurrences of the top problem, 0 when none was logged
    pub problem_count: usize,
}

impl WeeklyProgress {
    /// Summarize logs relative to `now`.
    ///
    /// This week is `[now - 7d, ..)`, last week is `[now - 14d, now - 7d)`.
    /// Ties for the top problem go to the problem seen first.
    #[must_use]
    pub fn compute(logs: &[TrainingLog], now: DateTime<Utc>) -> Self {
        let this_week_start = now - Duration::days(7);
        let last_week_start = now - Duration::days(14);

        let this_week: Vec<&TrainingLog> = logs
            .iter()
            .filter(|log| log.session_date >= this_week_start)
            .collect();
        let last_week: Vec<&TrainingLog> = logs
            .iter()
            .filter(|log| {
                log.session_date >= last_week_start && log.session_date < this_week_start
            })
            .collect();

        let this_week_rate = as_percent(mean_rate(this_week.iter().copied()));
        let last_week_rate = as_percent(mean_rate(last_week.iter().copied()));

        let top = tally_problems(this_week.iter().copied())
            .into_iter()
            .fold(None, |best: Option<(&str, usize)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            });
        let (top_problem, problem_count) = top.unwrap_or((NO_PROBLEM_IDENTIFIED, 0));

        Self {
            this_week_rate,
            last_week_rate,
            improvement: this_week_rate - last_week_rate,
            this_week_sessions: this_week.len(),
            last_week_sessions: last_week.len(),
            top_problem: top_problem.to_owned(),
            problem_count,
        }
    }
}

fn as_percent(rate: f64) -> i64 {
    (rate * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log_at(id: &str, days_ago: i64, now: DateTime<Utc>, problem: Option<&str>) -> TrainingLog {
        let log = TrainingLog::new(id, "user-1", now - Duration::days(days_ago), 4, 2).unwrap();
        match problem {
            Some(problem) => log.with_problem(problem),
            None => log,
        }
    }

    #[test]
    fn test_tally_preserves_first_appearance() {
        let now = Utc::now();
        let logs = vec![
            log_at("a", 0, now, Some("B")),
            log_at("b", 1, now, Some("A")),
            log_at("c", 2, now, None),
            log_at("d", 3, now, Some("B")),
        ];
        let tallies = tally_problems(&logs);
        assert_eq!(tallies, vec![("B", 2), ("A", 1)]);
    }

    #[test]
    fn test_as_percent_rounds_half_up() {
        assert_eq!(as_percent(0.125), 13);
        assert_eq!(as_percent(2.0 / 3.0), 67);
        assert_eq!(as_percent(0.0), 0);
    }
}
