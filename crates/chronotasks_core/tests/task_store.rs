use chrono::{NaiveDate, TimeZone, Utc};
use chronotasks_core::{
    Clock, Dimension, ManualClock, Notification, NotificationSink, NotifyError, QueueSink, StoreError,
    TaskStore, TaskValidationError, TimeFilter,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

fn store() -> (TaskStore<Arc<ManualClock>>, Arc<QueueSink>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 10, 15, 45, 0).unwrap(),
    ));
    let queue = Arc::new(QueueSink::new());
    let mut store = TaskStore::new(clock);
    store.subscribe(queue.clone());
    (store, queue)
}

#[test]
fn add_task_appends_pending_task_due_today() {
    let (mut store, queue) = store();

    let task = store.add_task("Buy milk", Dimension::Cyber).unwrap();

    assert_eq!(store.len(), 1);
    let stored = store.get(task.id).unwrap();
    assert_eq!(stored.title, "Buy milk");
    assert!(!stored.completed);
    assert_eq!(stored.dimension(), Dimension::Cyber);
    assert_eq!(
        stored.due_date,
        Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
    );
    assert_eq!(stored.created_at(), store.clock().now());
    assert_eq!(
        queue.drain(),
        vec![Notification::TaskCreated {
            title: "Buy milk".to_string()
        }]
    );
}

#[test]
fn blank_title_leaves_collection_unchanged() {
    let (mut store, queue) = store();
    store.add_task("keep me", Dimension::Void).unwrap();
    queue.drain();
    let before = store.tasks();

    for title in ["", "   "] {
        let err = store.add_task(title, Dimension::Void).unwrap_err();
        assert_eq!(err, StoreError::Validation(TaskValidationError::EmptyTitle));
    }

    assert_eq!(store.tasks(), before);
    assert!(queue.is_empty());
}

#[test]
fn ids_are_unique_and_insertion_order_is_kept() {
    let (mut store, _) = store();
    let first = store.add_task("first", Dimension::Cyber).unwrap();
    let second = store.add_task("second", Dimension::Cyber).unwrap();

    assert_ne!(first.id, second.id);
    let titles: Vec<_> = store.tasks().iter().map(|t| t.title.clone()).collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[test]
fn complete_task_toggles_and_counts_once() {
    let (mut store, _) = store();
    let task = store.add_task("Hack the planet", Dimension::Cyber).unwrap();

    let done = store.complete_task(task.id).unwrap().unwrap();
    assert!(done.completed);
    assert_eq!(store.achievement().count(), 1);

    let reopened = store.complete_task(task.id).unwrap().unwrap();
    assert!(!reopened.completed);
    assert_eq!(store.achievement().count(), 1);
}

#[test]
fn completing_task_outside_active_dimension_does_not_count() {
    let (mut store, _) = store();
    let task = store.add_task("Brew", Dimension::Magic).unwrap();

    store.complete_task(task.id).unwrap();

    assert!(store.get(task.id).unwrap().completed);
    assert_eq!(store.achievement().count(), 0);
}

#[test]
fn delete_task_removes_and_notifies() {
    let (mut store, queue) = store();
    let keep = store.add_task("keep", Dimension::Cyber).unwrap();
    let drop = store.add_task("drop", Dimension::Cyber).unwrap();
    queue.drain();

    let removed = store.delete_task(drop.id).unwrap().unwrap();

    assert_eq!(removed.id, drop.id);
    assert_eq!(store.len(), 1);
    assert!(store.get(keep.id).is_some());
    assert_eq!(queue.drain(), vec![Notification::TaskDeleted]);
}

#[test]
fn toggle_recurring_flips_flag() {
    let (mut store, _) = store();
    let task = store.add_task("Orbit", Dimension::Void).unwrap();

    assert!(store.toggle_recurring(task.id).unwrap().unwrap().recurring);
    assert!(!store.toggle_recurring(task.id).unwrap().unwrap().recurring);
}

#[test]
fn missing_ids_are_silent_noops_by_default() {
    let (mut store, queue) = store();
    store.add_task("only", Dimension::Cyber).unwrap();
    queue.drain();
    let before = store.tasks();
    let ghost = Uuid::new_v4();

    assert_eq!(store.complete_task(ghost), Ok(None));
    assert_eq!(store.delete_task(ghost), Ok(None));
    assert_eq!(store.toggle_recurring(ghost), Ok(None));

    assert_eq!(store.tasks(), before);
    assert!(queue.is_empty());
}

#[test]
fn earlier_snapshots_are_not_affected_by_mutations() {
    let (mut store, _) = store();
    let task = store.add_task("snapshot", Dimension::Cyber).unwrap();
    let before = store.tasks();

    store.complete_task(task.id).unwrap();
    store.add_task("another", Dimension::Cyber).unwrap();

    assert_eq!(before.len(), 1);
    assert!(!before[0].completed);
    assert!(!Arc::ptr_eq(&before, &store.tasks()));
    assert!(store.get(task.id).unwrap().completed);
}

#[test]
fn visible_tasks_follow_selection_and_clock_day() {
    let (mut store, _) = store();
    let task = store.add_task("today", Dimension::Cyber).unwrap();
    store.add_task("elsewhere", Dimension::Magic).unwrap();

    assert_eq!(store.visible_tasks().len(), 1);

    store.set_time_filter(TimeFilter::Archived);
    assert!(store.visible_tasks().is_empty());
    store.complete_task(task.id).unwrap();
    assert_eq!(store.visible_tasks()[0].id, task.id);

    store.set_time_filter(TimeFilter::Today);
    store.complete_task(task.id).unwrap();
    store.clock().advance(Duration::from_secs(24 * 60 * 60));
    assert!(store.visible_tasks().is_empty());

    let view = store.view();
    assert_eq!(view.active_dimension, Dimension::Cyber);
    assert_eq!(view.time_filter, TimeFilter::Today);
    assert!(view.visible().is_empty());
}

struct BrokenSink;

impl NotificationSink for BrokenSink {
    fn deliver(&self, _: &Notification) -> Result<(), NotifyError> {
        Err(NotifyError("toast layer gone".to_string()))
    }
}

#[test]
fn failing_sink_does_not_fail_mutation() {
    let (mut store, queue) = store();
    store.subscribe(Arc::new(BrokenSink));

    let task = store.add_task("resilient", Dimension::Cyber).unwrap();
    store.delete_task(task.id).unwrap();

    assert!(store.is_empty());
    assert_eq!(queue.len(), 2);
}
