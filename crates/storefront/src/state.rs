//! Application state shared across handlers.

use std::sync::Arc;

use crate::chat::{ChatClient, ChatError};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    chat: ChatClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns `ChatError` if the chat client cannot be built from the
    /// configuration.
    pub fn new(config: StorefrontConfig) -> Result<Self, ChatError> {
        let chat = ChatClient::new(&config.chat)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, chat }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the chat completion client.
    #[must_use]
    pub fn chat(&self) -> &ChatClient {
        &self.inner.chat
    }
}
