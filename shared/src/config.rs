//! Configuration management for Lambda functions.

use std::env;

/// Application configuration loaded from environment variables.
///
/// The document composer takes these options explicitly rather than reading
/// ambient globals, so rendering stays a pure function of its inputs.
#[derive(Debug, Clone)]
pub struct Config {
    /// Currency symbol prefixed to all monetary amounts
    pub currency_symbol: String,
    /// Jurisdiction named in the governing-law clause
    pub governing_law: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// platform defaults.
    pub fn from_env() -> Self {
        Self {
            currency_symbol: env::var("CONTRACT_CURRENCY_SYMBOL")
                .unwrap_or_else(|_| "$".to_string()),
            governing_law: env::var("CONTRACT_GOVERNING_LAW")
                .unwrap_or_else(|_| "the State of California".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            governing_law: "the State of California".to_string(),
        }
    }
}
