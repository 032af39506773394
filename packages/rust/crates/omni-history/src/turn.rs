//! Single turn in a chat conversation.

use serde::{Deserialize, Serialize};

/// Role tag for user-authored turns.
pub const ROLE_USER: &str = "user";
/// Role tag for model-authored turns. The only role merged by [`crate::normalize_history`].
pub const ROLE_ASSISTANT: &str = "assistant";

/// One message in OpenAI-compatible `{role, content}` form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Turn {
    /// Role: "user", "assistant", or any other tag (treated as non-assistant).
    pub role: String,
    /// Message text.
    pub content: String,
}

impl Turn {
    /// Build a turn from role and content.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Build a `"user"` turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    /// Build an `"assistant"` turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }

    /// True when the role is exactly `"assistant"`.
    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.role == ROLE_ASSISTANT
    }
}
