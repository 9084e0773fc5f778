//! Walkthrough configuration loaded from environment variables.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkthrough::config::WalkthroughConfig;
//!
//! let config = WalkthroughConfig::from_env()?;
//! println!("Keys: {:?}", config.keys);
//! ```

use std::env;
use std::num::ParseIntError;

/// Default keys inserted when `WALKTHROUGH_KEYS` is unset.
pub const DEFAULT_KEYS: &str = "20,15,25,10,5,30,35";

/// Default keys deleted when `WALKTHROUGH_DELETE` is unset.
pub const DEFAULT_DELETE: &str = "25";

/// Configuration error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnvVar(key) => {
                write!(formatter, "Missing environment variable: {key}")
            }
            Self::InvalidValue { key, message } => {
                write!(formatter, "Invalid value for {key}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Keys to insert and keys to delete afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Keys inserted in order.
    pub keys: Vec<i64>,
    /// Keys deleted in order once every insert has run.
    pub delete: Vec<i64>,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            keys: vec![20, 15, 25, 10, 5, 30, 35],
            delete: vec![25],
        }
    }
}

impl WalkthroughConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WALKTHROUGH_KEYS`: comma-separated keys to insert (optional,
    ///   default: `20,15,25,10,5,30,35`)
    /// - `WALKTHROUGH_DELETE`: comma-separated keys to delete (optional,
    ///   default: `25`)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is not a
    /// comma-separated list of integers.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, such as a map in tests.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = get_optional_keys(&lookup, "WALKTHROUGH_KEYS", DEFAULT_KEYS)?;
        let delete = get_optional_keys(&lookup, "WALKTHROUGH_DELETE", DEFAULT_DELETE)?;
        Ok(Self { keys, delete })
    }
}

fn get_optional_keys<F>(lookup: &F, key: &str, default: &str) -> Result<Vec<i64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    parse_keys(&value).map_err(|error| ConfigError::InvalidValue {
        key: key.to_string(),
        message: error.to_string(),
    })
}

/// Parses a comma-separated key list. Blank entries are skipped, so an
/// empty string yields no keys.
///
/// # Errors
///
/// Returns the first entry that is not an integer.
pub fn parse_keys(value: &str) -> Result<Vec<i64>, ParseIntError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::parse)
        .collect()
}
