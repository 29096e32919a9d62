//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by store, filter and views.
//! - Validate title and identity on construction and deserialization.
//!
//! # Invariants
//! - `id` is a non-nil UUID and never reused for another task.
//! - `title` is stored trimmed and is never empty.
//! - `dimension` is fixed at construction; there is no setter.

use crate::model::dimension::Dimension;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
pub type TaskId = Uuid;

/// Optional urgency hint carried for presentation consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Validation failures for task construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Identifier is the nil UUID.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::NilId => write!(f, "task id cannot be nil"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    dimension: Dimension,
    /// Calendar day the task is due. Time of day is never tracked.
    pub due_date: Option<NaiveDate>,
    pub recurring: bool,
    created_at: DateTime<Utc>,
    pub priority: Option<Priority>,
    pub tags: Vec<String>,
    pub description: Option<String>,
}

impl Task {
    /// Creates a pending task with a generated id.
    ///
    /// The title is trimmed before it is stored.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    pub fn new(
        title: &str,
        dimension: Dimension,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, dimension, created_at)
    }

    /// Creates a pending task with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyTitle` when the trimmed title is empty.
    pub fn with_id(
        id: TaskId,
        title: &str,
        dimension: Dimension,
        created_at: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.trim().to_string(),
            completed: false,
            dimension,
            due_date: None,
            recurring: false,
            created_at,
            priority: None,
            tags: Vec::new(),
            description: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Sets the due date, builder style.
    pub fn due_on(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    /// Marks the task recurring, builder style.
    pub fn recurring(mut self, recurring: bool) -> Self {
        self.recurring = recurring;
        self
    }

    /// Dimension the task belongs to.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Checks identity and title invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Unchecked wire shape; converted through `Task::validate`.
#[derive(Deserialize)]
struct TaskRecord {
    id: TaskId,
    title: String,
    #[serde(default)]
    completed: bool,
    dimension: Dimension,
    #[serde(default)]
    due_date: Option<NaiveDate>,
    #[serde(default)]
    recurring: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    priority: Option<Priority>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let task = Task {
            id: record.id,
            title: record.title,
            completed: record.completed,
            dimension: record.dimension,
            due_date: record.due_date,
            recurring: record.recurring,
            created_at: record.created_at,
            priority: record.priority,
            tags: record.tags,
            description: record.description,
        };
        task.validate()?;
        Ok(task)
    }
}
