//! An abstraction layer for chat-completion backends.
//!
//! This crate establishes an unified protocol for a chat session to talk
//! to various supported backends, so that the session can seamlessly
//! switch between them without modifying the core codebase.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod message;
mod provider;
mod request;

pub use error::*;
pub use message::*;
pub use provider::*;
pub use request::*;
