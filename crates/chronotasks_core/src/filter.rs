//! Visible task selection.
//!
//! # Responsibility
//! - Map (tasks, dimension, time filter, today) to the ordered visible list.
//!
//! # Invariants
//! - Pure: the same inputs always give the same output; no clock is read.
//! - Input order is preserved.
//! - Only tasks from the requested dimension are returned.
//! - Day comparisons use calendar dates only.

use crate::model::dimension::Dimension;
use crate::model::task::Task;
use crate::model::time_filter::TimeFilter;
use chrono::NaiveDate;

/// Smallest day offset from today that counts as `upcoming`.
///
/// Offset 0 is today and offset 1 is tomorrow, so `upcoming` starts strictly
/// after tomorrow.
pub const UPCOMING_MIN_DAYS_AHEAD: i64 = 2;

/// Signed number of calendar days from `today` to `date`.
pub fn day_offset(date: NaiveDate, today: NaiveDate) -> i64 {
    date.signed_duration_since(today).num_days()
}

/// Returns the time filter under which `task` is listed, if any.
///
/// Completed tasks are always `Archived`. Pending tasks with no due date are
/// listed under `Today`. Pending tasks due before today match no filter.
pub fn bucket_for(task: &Task, today: NaiveDate) -> Option<TimeFilter> {
    if task.completed {
        return Some(TimeFilter::Archived);
    }

    let Some(due) = task.due_date else {
        return Some(TimeFilter::Today);
    };

    match day_offset(due, today) {
        0 => Some(TimeFilter::Today),
        1 => Some(TimeFilter::Tomorrow),
        offset if offset >= UPCOMING_MIN_DAYS_AHEAD => Some(TimeFilter::Upcoming),
        _ => None,
    }
}

/// Selects tasks visible for one dimension and time filter.
pub fn select_visible<'a>(
    tasks: &'a [Task],
    dimension: Dimension,
    time_filter: TimeFilter,
    today: NaiveDate,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| task.dimension() == dimension)
        .filter(|task| bucket_for(task, today) == Some(time_filter))
        .collect()
}
