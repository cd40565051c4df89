//! Error types for the game core.
//!
//! Nothing in the per-tick simulation can fail; these errors only surface when
//! a host hands the core configuration or names it has to parse.

/// Configuration could not be loaded.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// A difficulty name did not match any preset.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DifficultyError {
    #[error("Unknown difficulty: {0}")]
    Unknown(String),
}
