//! Completion achievement tracking.
//!
//! # Responsibility
//! - Count qualifying completions and fire a one-shot unlock at the threshold.
//! - Track whether the unlock modal is still waiting for dismissal.
//!
//! # Invariants
//! - `count` is always below `threshold`.
//! - Reaching the threshold resets `count` to zero.
//! - Dismissal never touches `count`.

/// Default number of qualifying completions per unlock.
pub const DEFAULT_ACHIEVEMENT_THRESHOLD: u32 = 5;

/// Result of recording one qualifying completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementProgress {
    /// Counter advanced and sits at the given value.
    Below(u32),
    /// Threshold reached; counter was reset for the next cycle.
    Reached,
}

#[derive(Debug, Clone)]
pub struct AchievementTracker {
    threshold: u32,
    count: u32,
    open: bool,
}

impl AchievementTracker {
    /// Creates a tracker; a zero threshold is clamped to one.
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            count: 0,
            open: false,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether an unlock is waiting to be dismissed.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Records one qualifying completion.
    pub fn record_completion(&mut self) -> AchievementProgress {
        let next = self.count + 1;
        if next >= self.threshold {
            self.count = 0;
            self.open = true;
            AchievementProgress::Reached
        } else {
            self.count = next;
            AchievementProgress::Below(next)
        }
    }

    /// Closes the unlock modal.
    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new(DEFAULT_ACHIEVEMENT_THRESHOLD)
    }
}
