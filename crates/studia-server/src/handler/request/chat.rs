//! Chat request types and prompt composition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// One message of a chat conversation.
///
/// Roles other than `user` are accepted and ignored during composition, so
/// clients can replay full conversation transcripts.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ChatMessage {
    /// Author role (`user`, `assistant`, `system`, ...).
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Returns true if this message was authored by the end user.
    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Request body for `POST /deepseek`.
#[derive(Debug, Clone, Deserialize, Validate, JsonSchema)]
pub struct SendChat {
    /// The conversation messages, oldest first.
    #[validate(custom(function = "has_user_content"))]
    pub messages: Vec<ChatMessage>,
}

impl SendChat {
    /// Combines the content of every `user`-role message, in list order,
    /// separated by a newline, into the single prompt the generator runs on.
    pub fn combined_prompt(&self) -> String {
        self.messages
            .iter()
            .filter(|message| message.is_user())
            .map(|message| message.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The post-filtering emptiness rule: after dropping non-`user` roles, at
/// least one message with non-empty content must remain.
fn has_user_content(messages: &[ChatMessage]) -> Result<(), ValidationError> {
    let has_content = messages
        .iter()
        .any(|message| message.is_user() && !message.content.is_empty());

    if has_content {
        Ok(())
    } else {
        let mut error = ValidationError::new("messages");
        error.message = Some("Provide at least one user message".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn combines_user_messages_in_order() {
        let request = SendChat {
            messages: vec![
                message("user", "A"),
                message("assistant", "B"),
                message("user", "C"),
            ],
        };
        assert_eq!(request.combined_prompt(), "A\nC");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_message_list_fails_validation() {
        let request = SendChat {
            messages: Vec::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn assistant_only_conversation_fails_validation() {
        let request = SendChat {
            messages: vec![message("assistant", "hello"), message("system", "rules")],
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn empty_user_content_fails_validation() {
        let request = SendChat {
            messages: vec![message("user", "")],
        };
        assert!(request.validate().is_err());
    }
}
