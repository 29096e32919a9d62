//! Built-in demo tasks.

use crate::model::dimension::Dimension;
use crate::model::task::Task;
use chrono::{DateTime, Days, NaiveDate, Utc};

/// (title, dimension, due tomorrow, recurring)
const DEMO_TASKS: [(&str, Dimension, bool, bool); 6] = [
    ("Hack into the mainframe", Dimension::Cyber, false, false),
    ("Update neural interface", Dimension::Cyber, true, true),
    ("Study ancient spellbook", Dimension::Magic, false, false),
    ("Mix potion ingredients", Dimension::Magic, true, true),
    ("Meditate in the void", Dimension::Void, false, false),
    ("Contemplate cosmic entropy", Dimension::Void, true, true),
];

/// Builds the demo set: per dimension, one task due today and one recurring
/// task due tomorrow.
pub fn demo_tasks(today: NaiveDate, now: DateTime<Utc>) -> Vec<Task> {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    DEMO_TASKS
        .iter()
        .filter_map(|(title, dimension, due_tomorrow, recurring)| {
            let due = if *due_tomorrow { tomorrow } else { today };
            Task::new(title, *dimension, now)
                .ok()
                .map(|task| task.due_on(due).recurring(*recurring))
        })
        .collect()
}
