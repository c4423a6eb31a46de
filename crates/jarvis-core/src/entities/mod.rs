//! Entity structs for all Jarvis domain objects.

mod message;
mod task;

pub use message::ChatMessage;
pub use task::Task;
