//! # Personas Feature
//!
//! Persona data: identity, greeting/comeback/exit templates and topic facts.
//! Ships one bundled persona (GutterMuse) and loads others from YAML.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod persona;

pub use persona::{guttermuse, Persona};
