//! Ready-made chat sessions for the terminal front ends: a general chat
//! and a cricket tactical assistant.
//!
//! The crate includes a CLI tool for using in the terminal. And you can
//! also use the presets as a library to embed them into your own apps.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod presets;

pub use crease_core::{ChatError, ChatSession, ChatSessionBuilder};
