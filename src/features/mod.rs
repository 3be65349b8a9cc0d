//! # Features
//!
//! - `personas`: persona data and validation
//! - `topics`: topic classifier and fact pools
//! - `conversation`: the per-session response engine

pub mod conversation;
pub mod personas;
pub mod topics;

pub use conversation::{classify_intent, ChatEngine, Intent};
pub use personas::{guttermuse, Persona};
pub use topics::{detect_topic, FactPools, Topic};
