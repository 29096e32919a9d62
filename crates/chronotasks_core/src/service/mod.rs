//! Core use-case services.
//!
//! # Responsibility
//! - Own mutable task and selection state behind explicit entry points.
//! - Keep presentation layers decoupled from mutation details.

pub mod seed;
pub mod task_store;
