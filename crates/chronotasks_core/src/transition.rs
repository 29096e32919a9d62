//! Timed dimension transition.
//!
//! # Responsibility
//! - Gate active-dimension changes behind a fixed delay.
//! - Keep the pending change cancelable and owned by its holder.
//!
//! # Invariants
//! - At most one transition is in flight; later requests are ignored.
//! - A transition applies only through `poll` after its deadline.
//! - `cancel` discards a pending transition without applying it.

use crate::model::dimension::Dimension;
use std::time::{Duration, Instant};

/// Default transition delay.
pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    Transitioning { target: Dimension, deadline: Instant },
}

#[derive(Debug, Clone)]
pub struct DimensionTransition {
    delay: Duration,
    state: TransitionState,
}

impl DimensionTransition {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            state: TransitionState::Idle,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    /// Target of the in-flight transition, if any.
    pub fn target(&self) -> Option<Dimension> {
        match self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { target, .. } => Some(target),
        }
    }

    /// Time left until the in-flight transition is due.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            TransitionState::Idle => None,
            TransitionState::Transitioning { deadline, .. } => {
                Some(deadline.saturating_duration_since(now))
            }
        }
    }

    /// Starts a transition from `active` to `target`.
    ///
    /// Returns `false` without changing state when `target == active` or a
    /// transition is already in flight.
    pub fn request_change(&mut self, active: Dimension, target: Dimension, now: Instant) -> bool {
        if target == active || self.is_transitioning() {
            return false;
        }
        self.state = TransitionState::Transitioning {
            target,
            deadline: now + self.delay,
        };
        true
    }

    /// Completes a due transition and returns its target.
    pub fn poll(&mut self, now: Instant) -> Option<Dimension> {
        match self.state {
            TransitionState::Transitioning { target, deadline } if now >= deadline => {
                self.state = TransitionState::Idle;
                Some(target)
            }
            _ => None,
        }
    }

    /// Discards the in-flight transition and returns its target.
    pub fn cancel(&mut self) -> Option<Dimension> {
        let target = self.target();
        self.state = TransitionState::Idle;
        target
    }
}

impl Default for DimensionTransition {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_DELAY)
    }
}
