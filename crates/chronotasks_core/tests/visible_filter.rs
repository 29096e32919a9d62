use chrono::{NaiveDate, TimeZone, Utc};
use chronotasks_core::{select_visible, Dimension, Task, TimeFilter, UPCOMING_MIN_DAYS_AHEAD};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn day(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn task(title: &str, dimension: Dimension, due: Option<NaiveDate>) -> Task {
    let created = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let task = Task::new(title, dimension, created).unwrap();
    match due {
        Some(date) => task.due_on(date),
        None => task,
    }
}

fn titles(tasks: &[&Task]) -> Vec<String> {
    tasks.iter().map(|task| task.title.clone()).collect()
}

#[test]
fn due_date_buckets_follow_calendar_days() {
    let tasks = vec![
        task("due today", Dimension::Cyber, Some(day(10))),
        task("due tomorrow", Dimension::Cyber, Some(day(11))),
        task("due later", Dimension::Cyber, Some(day(13))),
    ];

    let tomorrow = select_visible(&tasks, Dimension::Cyber, TimeFilter::Tomorrow, today());
    assert_eq!(titles(&tomorrow), vec!["due tomorrow"]);

    let upcoming = select_visible(&tasks, Dimension::Cyber, TimeFilter::Upcoming, today());
    assert_eq!(titles(&upcoming), vec!["due later"]);

    let today_list = select_visible(&tasks, Dimension::Cyber, TimeFilter::Today, today());
    assert_eq!(titles(&today_list), vec!["due today"]);
}

#[test]
fn upcoming_boundary_is_the_day_after_tomorrow() {
    let boundary = today()
        .checked_add_days(chrono::Days::new(UPCOMING_MIN_DAYS_AHEAD as u64))
        .unwrap();
    let tasks = vec![task("boundary", Dimension::Void, Some(boundary))];

    assert_eq!(
        select_visible(&tasks, Dimension::Void, TimeFilter::Upcoming, today()).len(),
        1
    );
    assert!(select_visible(&tasks, Dimension::Void, TimeFilter::Tomorrow, today()).is_empty());
}

#[test]
fn task_without_due_date_is_listed_today_only() {
    let tasks = vec![task("someday", Dimension::Magic, None)];

    assert_eq!(
        select_visible(&tasks, Dimension::Magic, TimeFilter::Today, today()).len(),
        1
    );
    for filter in [TimeFilter::Tomorrow, TimeFilter::Upcoming, TimeFilter::Archived] {
        assert!(select_visible(&tasks, Dimension::Magic, filter, today()).is_empty());
    }
}

#[test]
fn archived_lists_completed_tasks_regardless_of_date() {
    let mut old = task("old win", Dimension::Cyber, Some(day(2)));
    old.completed = true;
    let mut undated = task("undated win", Dimension::Cyber, None);
    undated.completed = true;
    let pending = task("pending", Dimension::Cyber, Some(day(10)));
    let tasks = vec![old, pending, undated];

    let archived = select_visible(&tasks, Dimension::Cyber, TimeFilter::Archived, today());
    assert_eq!(titles(&archived), vec!["old win", "undated win"]);

    let today_list = select_visible(&tasks, Dimension::Cyber, TimeFilter::Today, today());
    assert_eq!(titles(&today_list), vec!["pending"]);
}

#[test]
fn only_requested_dimension_is_returned_in_input_order() {
    let tasks = vec![
        task("c1", Dimension::Cyber, Some(day(10))),
        task("m1", Dimension::Magic, Some(day(10))),
        task("c2", Dimension::Cyber, None),
        task("v1", Dimension::Void, Some(day(10))),
    ];

    let first = select_visible(&tasks, Dimension::Cyber, TimeFilter::Today, today());
    let second = select_visible(&tasks, Dimension::Cyber, TimeFilter::Today, today());

    assert_eq!(titles(&first), vec!["c1", "c2"]);
    assert_eq!(first, second);
    assert!(first.iter().all(|task| task.dimension() == Dimension::Cyber));
}

#[test]
fn overdue_pending_tasks_are_hidden_from_every_filter() {
    let tasks = vec![task("overdue", Dimension::Void, Some(day(9)))];
    for filter in TimeFilter::ALL {
        assert!(select_visible(&tasks, Dimension::Void, filter, today()).is_empty());
    }
}
