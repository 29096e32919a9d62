//! Fire-and-forget notifications to the presentation layer.
//!
//! # Responsibility
//! - Define the outbound notification vocabulary.
//! - Fan notifications out to registered sinks.
//!
//! # Invariants
//! - Sink failures are logged and swallowed; they never fail a mutation.
//! - Sinks are called in registration order.

use log::{info, warn};
use std::collections::VecDeque;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

/// Outbound notification emitted after a successful state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    TaskCreated { title: String },
    TaskDeleted,
    /// `name` is the display name of the newly active dimension.
    DimensionChanged { name: String },
    /// `dimension` is the display name of the dimension the completions
    /// were made in.
    AchievementUnlocked { count: u32, dimension: String },
}

impl Notification {
    /// Stable event name used in logs.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::TaskCreated { .. } => "task_created",
            Self::TaskDeleted => "task_deleted",
            Self::DimensionChanged { .. } => "dimension_changed",
            Self::AchievementUnlocked { .. } => "achievement_unlocked",
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TaskCreated { title } => write!(f, "Task Created: \"{title}\" added to your tasks"),
            Self::TaskDeleted => write!(f, "Task Deleted: Task has been removed"),
            Self::DimensionChanged { name } => {
                write!(f, "Dimension Changed: You've entered the {name} dimension")
            }
            Self::AchievementUnlocked { count, dimension } => write!(
                f,
                "Interdimensional Achiever! You've completed {count} tasks in the {dimension} dimension!"
            ),
        }
    }
}

/// Delivery failure reported by a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl Display for NotifyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification delivery failed: {}", self.0)
    }
}

impl Error for NotifyError {}

/// Receiver of store notifications.
pub trait NotificationSink: Send + Sync {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Buffers notifications until the presentation layer drains them.
#[derive(Debug, Default)]
pub struct QueueSink {
    queue: Mutex<VecDeque<Notification>>,
}

impl QueueSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns all buffered notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Notification>> {
        self.queue.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for QueueSink {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.lock().push_back(notification.clone());
        Ok(())
    }
}

/// Writes every notification to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&self, notification: &Notification) -> Result<(), NotifyError> {
        info!(
            "event=notification module=notify status=ok kind={}",
            notification.event_name()
        );
        Ok(())
    }
}

/// Ordered set of sinks.
#[derive(Default, Clone)]
pub struct Notifier {
    sinks: Vec<Arc<dyn NotificationSink>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Arc<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Delivers to every sink; failures are logged and skipped.
    pub fn emit(&self, notification: Notification) {
        for sink in &self.sinks {
            if let Err(err) = sink.deliver(&notification) {
                warn!(
                    "event=notification module=notify status=error kind={} error={}",
                    notification.event_name(),
                    err
                );
            }
        }
    }
}
