//! # Topics Feature
//!
//! Keyword-driven topic detection and the per-topic fact pools that feed
//! topical comebacks.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod classifier;
pub mod pool;

pub use classifier::{detect_topic, Topic, TOPIC_KEYWORDS};
pub use pool::FactPools;
