//! Chatbot relay to an OpenAI-compatible chat completion API.
//!
//! Each `/chat` request becomes exactly one completion call carrying the
//! store persona as the system message and the visitor's text as the user
//! message. Nothing is remembered between calls; there is no retry and no
//! streaming.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::ChatClient;
pub use error::ChatError;
