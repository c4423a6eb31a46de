//! # jarvis-core
//!
//! Core types, ID generation, and error types for Jarvis.
//!
//! This crate provides the foundational types shared across all Jarvis crates:
//! - Entity structs for the two domain objects (tasks and chat messages)
//! - Closed-set enums for task status, task priority, and message sender
//! - ID synthesis and timestamp helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;

pub use entities::{ChatMessage, Task};
pub use enums::{Priority, Sender, TaskStatus};
pub use errors::CoreError;
