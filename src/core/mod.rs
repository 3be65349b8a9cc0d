//! # Core Module
//!
//! Configuration and the text primitives (normalization, keyword matching,
//! template rendering) the features build on.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod config;
pub mod text;

// Re-export commonly used items
pub use config::Config;
pub use text::{contains_any, normalize, render_template};
