//! Environment variable loading utilities
//!
//! Helpers behind `ResolverConfig::from_env`, reading and parsing
//! environment variables into `ChainError` results.

use crate::{ChainError, Result};
use std::env;
use std::str::FromStr;

/// Load an environment variable as a string
///
/// # Returns
///
/// * `Ok(Some(value))` if variable exists
/// * `Ok(None)` if variable doesn't exist
/// * `Err` if variable exists but has invalid UTF-8
pub(crate) fn get_env(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ChainError::Config(format!(
            "Environment variable {} contains invalid UTF-8",
            key
        ))),
    }
}

/// Load and parse an environment variable
///
/// Surrounding whitespace is ignored.
///
/// ```rust,ignore
/// let depth: Option<usize> = get_env_parse("CAUSE_CHAIN_MAX_DEPTH")?;
/// ```
pub(crate) fn get_env_parse<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env(key)? {
        Some(val) => {
            let parsed = val.trim().parse::<T>().map_err(|e| {
                ChainError::Config(format!(
                    "Failed to parse environment variable {}: {}",
                    key, e
                ))
            })?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Load a boolean environment variable
///
/// Recognizes "true", "1", "yes", "on" as true and "false", "0", "no",
/// "off" as false (case-insensitive). Anything else is an error.
pub(crate) fn get_env_bool(key: &str) -> Result<Option<bool>> {
    match get_env(key)? {
        Some(val) => match val.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ChainError::Config(format!(
                "Invalid boolean value for {}: {}",
                key, val
            ))),
        },
        None => Ok(None),
    }
}

/// Build a prefixed environment variable name
///
/// ```rust,ignore
/// let key = build_env_key("CAUSE_CHAIN_", "max_depth"); // "CAUSE_CHAIN_MAX_DEPTH"
/// ```
pub(crate) fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
