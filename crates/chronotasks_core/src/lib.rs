//! Core domain logic for ChronoTasks.
//! This crate is the single source of truth for task and dimension invariants.

pub mod achievement;
pub mod clock;
pub mod config;
pub mod filter;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod transition;

pub use achievement::{AchievementProgress, AchievementTracker, DEFAULT_ACHIEVEMENT_THRESHOLD};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, CoreConfig};
pub use filter::{bucket_for, day_offset, select_visible, UPCOMING_MIN_DAYS_AHEAD};
pub use logging::{
    default_log_level, flush as flush_logs, init_logging, logging_status, LogTarget, LoggingError,
};
pub use model::dimension::{
    dimension_info_by_id, Dimension, DimensionInfo, ParseDimensionError, DIMENSIONS,
};
pub use model::task::{Priority, Task, TaskId, TaskValidationError};
pub use model::time_filter::{ParseTimeFilterError, TimeFilter};
pub use notify::{LogSink, Notification, NotificationSink, Notifier, NotifyError, QueueSink};
pub use service::task_store::{StoreError, StoreResult, StoreView, TaskStore};
pub use transition::{DimensionTransition, TransitionState, DEFAULT_TRANSITION_DELAY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
