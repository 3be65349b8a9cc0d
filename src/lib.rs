// Core layer - configuration and text utilities
pub mod core;

// Features layer - personas, topics and the conversation engine
pub mod features;

pub use crate::core::Config;

pub use features::{
    // Conversation
    classify_intent, ChatEngine, Intent,
    // Personas
    guttermuse, Persona,
    // Topics
    detect_topic, FactPools, Topic,
};
