//! # Conversation Feature
//!
//! Per-session response engine: history, intent cascade and persona-templated replies.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod engine;

pub use engine::{classify_intent, ChatEngine, Intent};
