//! Conversation domain entities

use serde::{Deserialize, Serialize};

/// Role of a turn in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single message in a conversation (Entity)
///
/// Turns are immutable once created. Ordering is owned by the caller:
/// a history is a time-ascending slice of turns, and the orchestrator
/// never reorders or mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    /// Model that authored this turn, for assistant turns that carry
    /// attribution. `None` for user and system turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            model: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            model: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            model: None,
        }
    }

    /// An assistant turn with model attribution.
    pub fn assistant_from(content: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            model: Some(model.into()),
        }
    }
}

/// Map a stored message record onto a [`Turn`].
///
/// Conversation stores tag messages with a free-form type string
/// (`"user"`, `"assistant"`, `"system"`) plus an optional model name.
/// Unknown tags map to `User`, matching the store's own default.
pub fn turn_from_record(message_type: &str, content: &str, model_name: Option<&str>) -> Turn {
    let role = match message_type {
        "assistant" => Role::Assistant,
        "system" => Role::System,
        _ => Role::User,
    };
    Turn {
        role,
        content: content.to_string(),
        model: match role {
            Role::Assistant => model_name
                .filter(|m| !m.is_empty())
                .map(|m| m.to_string()),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_message_types() {
        let turn = turn_from_record("assistant", "hello", Some("gpt-4o"));
        assert_eq!(turn.role, Role::Assistant);
        assert_eq!(turn.content, "hello");
        assert_eq!(turn.model.as_deref(), Some("gpt-4o"));

        let turn = turn_from_record("user", "hi", None);
        assert_eq!(turn.role, Role::User);
        assert!(turn.model.is_none());

        let turn = turn_from_record("system", "policy", None);
        assert_eq!(turn.role, Role::System);
    }

    #[test]
    fn unknown_type_defaults_to_user() {
        let turn = turn_from_record("bot", "hello", Some("gpt-4o"));
        assert_eq!(turn.role, Role::User);
        // Attribution only makes sense on assistant turns
        assert!(turn.model.is_none());
    }

    #[test]
    fn empty_model_name_is_dropped() {
        let turn = turn_from_record("assistant", "hello", Some(""));
        assert!(turn.model.is_none());
    }
}
