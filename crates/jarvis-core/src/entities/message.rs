use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Sender;
use crate::ids::{gen_message_id, now_iso};

/// One turn in the conversation log. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: String,
}

impl ChatMessage {
    /// A new message stamped with a fresh ID and the current time.
    #[must_use]
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: gen_message_id(),
            text: text.into(),
            sender,
            timestamp: now_iso(),
        }
    }

    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text)
    }

    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text)
    }
}
