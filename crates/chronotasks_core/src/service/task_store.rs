//! In-memory task store.
//!
//! # Responsibility
//! - Own the task collection and the active dimension / time filter selection.
//! - Provide the only mutation entry points for tasks and selection state.
//! - Drive achievement tracking and the dimension transition timer.
//!
//! # Invariants
//! - Every mutation replaces the whole collection snapshot; a snapshot handed
//!   out earlier is never modified.
//! - Validation failures leave state untouched.
//! - Missing ids never change state. They are a silent no-op unless
//!   `strict_ids` is enabled.
//! - Notifications are emitted only after the mutation has been applied.

use crate::achievement::{AchievementProgress, AchievementTracker};
use crate::clock::{Clock, SystemClock};
use crate::config::CoreConfig;
use crate::filter::select_visible;
use crate::model::dimension::Dimension;
use crate::model::task::{Task, TaskId, TaskValidationError};
use crate::model::time_filter::TimeFilter;
use crate::notify::{Notification, NotificationSink, Notifier};
use crate::service::seed::demo_tasks;
use crate::transition::DimensionTransition;
use chrono::NaiveDate;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::Duration;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TaskValidationError> for StoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only bundle handed to presentation code.
#[derive(Debug, Clone)]
pub struct StoreView {
    pub tasks: Arc<Vec<Task>>,
    pub active_dimension: Dimension,
    pub time_filter: TimeFilter,
    pub transition_target: Option<Dimension>,
    pub achievement_open: bool,
    pub today: NaiveDate,
}

impl StoreView {
    /// Tasks visible under this view's selection.
    pub fn visible(&self) -> Vec<&Task> {
        select_visible(
            &self.tasks,
            self.active_dimension,
            self.time_filter,
            self.today,
        )
    }
}

/// Owned state container for tasks and selection.
pub struct TaskStore<C: Clock = SystemClock> {
    clock: C,
    tasks: Arc<Vec<Task>>,
    active_dimension: Dimension,
    time_filter: TimeFilter,
    transition: DimensionTransition,
    achievement: AchievementTracker,
    notifier: Notifier,
    strict_ids: bool,
}

impl TaskStore<SystemClock> {
    /// Creates an empty store on the system clock with default config.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TaskStore<C> {
    /// Creates an empty store with default config.
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, &CoreConfig::default())
    }

    /// Creates a store from config, seeding demo tasks when requested.
    pub fn with_config(clock: C, config: &CoreConfig) -> Self {
        let tasks = if config.seed_demo_tasks {
            demo_tasks(clock.today(), clock.now())
        } else {
            Vec::new()
        };

        Self {
            clock,
            tasks: Arc::new(tasks),
            active_dimension: Dimension::default(),
            time_filter: TimeFilter::default(),
            transition: DimensionTransition::new(config.transition_delay()),
            achievement: AchievementTracker::new(config.achievement_threshold),
            notifier: Notifier::new(),
            strict_ids: config.strict_ids,
        }
    }

    /// Registers a notification sink.
    pub fn subscribe(&mut self, sink: Arc<dyn NotificationSink>) {
        self.notifier.subscribe(sink);
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current collection snapshot.
    pub fn tasks(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn active_dimension(&self) -> Dimension {
        self.active_dimension
    }

    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter
    }

    pub fn achievement(&self) -> &AchievementTracker {
        &self.achievement
    }

    pub fn transition(&self) -> &DimensionTransition {
        &self.transition
    }

    /// Tasks visible under the current selection and calendar day.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        select_visible(
            &self.tasks,
            self.active_dimension,
            self.time_filter,
            self.clock.today(),
        )
    }

    pub fn view(&self) -> StoreView {
        StoreView {
            tasks: self.tasks(),
            active_dimension: self.active_dimension,
            time_filter: self.time_filter,
            transition_target: self.transition.target(),
            achievement_open: self.achievement.is_open(),
            today: self.clock.today(),
        }
    }

    /// Appends a new pending task due today.
    ///
    /// # Errors
    /// - `Validation(EmptyTitle)` when the title is blank; state is unchanged.
    pub fn add_task(&mut self, title: &str, dimension: Dimension) -> StoreResult<Task> {
        let task = Task::new(title, dimension, self.clock.now())?.due_on(self.clock.today());

        let mut next = Vec::with_capacity(self.tasks.len() + 1);
        next.extend(self.tasks.iter().cloned());
        next.push(task.clone());
        self.tasks = Arc::new(next);

        info!(
            "event=task_add module=store status=ok task_id={} dimension={}",
            task.id, dimension
        );
        self.notifier.emit(Notification::TaskCreated {
            title: task.title.clone(),
        });
        Ok(task)
    }

    /// Toggles completion and returns the updated task.
    ///
    /// Completing a task of the active dimension counts toward the
    /// achievement; reopening never decrements.
    pub fn complete_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        let Some(updated) = self.update_task(id, "task_complete", |task| {
            task.completed = !task.completed;
        })?
        else {
            return Ok(None);
        };

        debug!(
            "event=task_complete module=store status=ok task_id={} completed={}",
            id, updated.completed
        );

        if updated.completed && updated.dimension() == self.active_dimension {
            if let AchievementProgress::Reached = self.achievement.record_completion() {
                info!(
                    "event=achievement_unlocked module=store status=ok dimension={}",
                    self.active_dimension
                );
                self.notifier.emit(Notification::AchievementUnlocked {
                    count: self.achievement.threshold(),
                    dimension: self.active_dimension.display_name().to_string(),
                });
            }
        }

        Ok(Some(updated))
    }

    /// Removes a task and returns it.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        let Some(index) = self.position(id) else {
            return self.missing(id, "task_delete");
        };

        let mut next = self.tasks.as_ref().clone();
        let removed = next.remove(index);
        self.tasks = Arc::new(next);

        info!("event=task_delete module=store status=ok task_id={id}");
        self.notifier.emit(Notification::TaskDeleted);
        Ok(Some(removed))
    }

    /// Flips the recurring flag and returns the updated task.
    pub fn toggle_recurring(&mut self, id: TaskId) -> StoreResult<Option<Task>> {
        self.update_task(id, "task_toggle_recurring", |task| {
            task.recurring = !task.recurring;
        })
    }

    pub fn set_time_filter(&mut self, time_filter: TimeFilter) {
        self.time_filter = time_filter;
        debug!("event=time_filter_set module=store status=ok filter={time_filter}");
    }

    /// Requests a switch of the active dimension.
    ///
    /// Returns `true` when a transition started. Requests for the active
    /// dimension, or made while another transition is pending, are ignored.
    pub fn select_dimension(&mut self, target: Dimension) -> bool {
        let started =
            self.transition
                .request_change(self.active_dimension, target, self.clock.monotonic());
        if started {
            debug!(
                "event=transition_start module=store status=ok from={} to={}",
                self.active_dimension, target
            );
        } else {
            debug!("event=transition_start module=store status=noop target={target}");
        }
        started
    }

    /// Time left before the pending transition can apply.
    pub fn transition_remaining(&self) -> Option<Duration> {
        self.transition.remaining(self.clock.monotonic())
    }

    /// Applies the pending transition once its delay has elapsed.
    pub fn poll_transition(&mut self) -> Option<Dimension> {
        let target = self.transition.poll(self.clock.monotonic())?;
        self.active_dimension = target;

        info!("event=dimension_changed module=store status=ok dimension={target}");
        self.notifier.emit(Notification::DimensionChanged {
            name: target.display_name().to_string(),
        });
        Some(target)
    }

    /// Drops the pending transition without applying it.
    pub fn cancel_transition(&mut self) -> Option<Dimension> {
        let cancelled = self.transition.cancel();
        if let Some(target) = cancelled {
            debug!("event=transition_cancel module=store status=ok target={target}");
        }
        cancelled
    }

    /// Closes the achievement modal. The counter is not affected.
    pub fn dismiss_achievement(&mut self) {
        self.achievement.dismiss();
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn update_task<F>(&mut self, id: TaskId, event: &str, apply: F) -> StoreResult<Option<Task>>
    where
        F: FnOnce(&mut Task),
    {
        let Some(index) = self.position(id) else {
            return self.missing(id, event);
        };

        let mut next = self.tasks.as_ref().clone();
        apply(&mut next[index]);
        let updated = next[index].clone();
        self.tasks = Arc::new(next);
        Ok(Some(updated))
    }

    fn missing<T>(&self, id: TaskId, event: &str) -> StoreResult<Option<T>> {
        if self.strict_ids {
            return Err(StoreError::NotFound(id));
        }
        debug!("event={event} module=store status=noop task_id={id}");
        Ok(None)
    }
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}
