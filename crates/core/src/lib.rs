//! Core logic including the conversation store, model client and chat
//! sessions.

#![deny(missing_docs)]
#![deny(clippy::missing_safety_doc)]

#[macro_use]
extern crate tracing;

mod chat;
pub mod conversation;
mod model_client;
mod reply;

pub use chat::{ChatError, ChatSession, ChatSessionBuilder};
pub use conversation::Conversation;
pub use reply::ReplyPolicy;
