//! Wire types for the chat completions API.

use serde::{Deserialize, Serialize};

/// Role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A message sent to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    /// System message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// User message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<Message>,
}

/// Response body from the completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// One completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Reply,
}

/// The assistant message inside a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Reply {
    /// Text content. Providers may send `null` for tool-only replies.
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Trimmed text of the first choice, if any.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
    }
}
