//! Runtime configuration loaded from environment variables
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};
use std::env;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default env_logger filter when RUST_LOG is unset
    pub log_level: String,
    /// YAML persona file; the bundled persona is used when absent
    pub persona_path: Option<String>,
    /// Fixed RNG seed for reproducible sessions
    pub rng_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            persona_path: None,
            rng_seed: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, tests, ...)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = non_empty("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let persona_path = non_empty("PERSONA_PATH");
        let rng_seed = match non_empty("BOT_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| anyhow!("BOT_SEED must be an unsigned integer, got '{raw}': {e}"))?,
            ),
            None => None,
        };

        Ok(Config {
            log_level,
            persona_path,
            rng_seed,
        })
    }
}
