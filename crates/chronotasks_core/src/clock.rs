//! Time sources for the store.
//!
//! # Responsibility
//! - Provide wall-clock, calendar-day and monotonic readings behind one trait.
//! - Keep tests and scripted drivers deterministic via `ManualClock`.

use chrono::{DateTime, Local, NaiveDate, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Time source consumed by `TaskStore`.
pub trait Clock {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;
    /// Current calendar day used for due dates and filtering.
    fn today(&self) -> NaiveDate;
    /// Monotonic reading used for transition deadlines.
    fn monotonic(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn monotonic(&self) -> Instant {
        (**self).monotonic()
    }
}

/// Process clock. Calendar days follow the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn monotonic(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
///
/// Calendar days are taken from the UTC wall time.
#[derive(Debug)]
pub struct ManualClock {
    state: Mutex<ManualState>,
}

#[derive(Debug, Clone, Copy)]
struct ManualState {
    wall: DateTime<Utc>,
    instant: Instant,
}

impl ManualClock {
    pub fn new(wall: DateTime<Utc>) -> Self {
        Self {
            state: Mutex::new(ManualState {
                wall,
                instant: Instant::now(),
            }),
        }
    }

    /// Moves wall and monotonic time forward together.
    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.instant += by;
        state.wall += chrono::Duration::from_std(by).unwrap_or(chrono::Duration::zero());
    }

    /// Jumps the wall clock without touching monotonic time.
    pub fn set_wall(&self, wall: DateTime<Utc>) {
        self.lock().wall = wall;
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.lock().wall
    }

    fn today(&self) -> NaiveDate {
        self.lock().wall.date_naive()
    }

    fn monotonic(&self) -> Instant {
        self.lock().instant
    }
}
