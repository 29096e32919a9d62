//! Domain model for tasks, dimensions and view selection.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep presentation-only lookups (display names, headings) static.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Every task belongs to exactly one `Dimension` for its lifetime.

pub mod dimension;
pub mod task;
pub mod time_filter;
