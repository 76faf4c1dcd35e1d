//! Derived views over the task collection.
//!
//! Pure, side-effect-free calculations recomputed from the collection on
//! demand: cadence filtering, completion rates, global totals, and the
//! seven-day velocity series behind the analytics view.
//!
//! ## Rate Formula
//!
//! ```text
//! Completion Rate = round(100 * Completed Tasks / Total Tasks)
//! ```
//!
//! Rounding is half-up; an empty selection has a rate of 0.

use crate::libs::task::{Task, TaskFrequency};
use chrono::{Duration, NaiveDate};

/// Global totals shown in the analytics view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalStats {
    pub total: usize,
    pub done: usize,
    /// Completion rate across the whole collection, 0-100.
    pub efficiency: u32,
}

/// One point of the velocity series: a day and its completion rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressPoint {
    pub label: String,
    pub completion_rate: u32,
}

/// Stable-order subsequence of tasks matching a cadence.
pub fn filtered_by_frequency(tasks: &[Task], frequency: TaskFrequency) -> Vec<Task> {
    tasks.iter().filter(|t| t.frequency == frequency).cloned().collect()
}

/// Completion rate of a selection, 0-100. Empty selections rate 0.
pub fn completion_rate(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|t| t.completed).count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
}

pub fn global_stats(tasks: &[Task]) -> GlobalStats {
    GlobalStats {
        total: tasks.len(),
        done: tasks.iter().filter(|t| t.completed).count(),
        efficiency: completion_rate(tasks),
    }
}

/// Completion-rate history for the seven days ending at `today`, oldest first.
///
/// For each day the rate is computed over the tasks that existed by the end of
/// that day, counting a task as done iff it was completed on or before that
/// day. Days before any task existed rate 0.
pub fn velocity(tasks: &[Task], today: NaiveDate) -> Vec<ProgressPoint> {
    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let existing: Vec<&Task> = tasks.iter().filter(|t| t.created_at.date_naive() <= day).collect();
            let done = existing
                .iter()
                .filter(|t| t.completed_at.map(|at| at.date_naive() <= day).unwrap_or(false))
                .count();
            let completion_rate = if existing.is_empty() {
                0
            } else {
                ((done as f64 / existing.len() as f64) * 100.0).round() as u32
            };

            ProgressPoint {
                label: day.format("%a").to_string(),
                completion_rate,
            }
        })
        .collect()
}
