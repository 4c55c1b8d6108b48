//! Resolver configuration
//!
//! The only knob is how many causes a resolver may follow before it gives
//! up and reports the chain as malformed. A cyclic chain never reaches its
//! end, so the default keeps a bound in place.
//!
//! # Example
//!
//! ```rust,ignore
//! use cause_chain::config::{ConfigBuilder, ResolverConfig};
//!
//! // CAUSE_CHAIN_MAX_DEPTH=64
//! let config = ResolverConfig::from_env_with_defaults(ResolverConfig::ENV_PREFIX)?;
//! assert_eq!(config.max_depth, Some(64));
//! ```

mod builder;
mod env;

pub use builder::ConfigBuilder;
use env::{build_env_key, get_env_bool, get_env_parse};

use crate::{ChainError, Result};
use serde::{Deserialize, Serialize};

/// Number of causes followed by default before a chain is considered malformed
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Configuration for [`RootCauseResolver`](crate::RootCauseResolver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of causes to follow; `None` walks until the chain ends
    pub max_depth: Option<usize>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ResolverConfig {
    /// Default environment variable prefix
    pub const ENV_PREFIX: &'static str = "CAUSE_CHAIN_";

    /// Create a new resolver configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of causes to follow
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Follow causes without a bound
    ///
    /// A cyclic chain then never resolves.
    pub fn unbounded(mut self) -> Self {
        self.max_depth = None;
        self
    }
}

impl ConfigBuilder for ResolverConfig {
    fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(ChainError::Config(
                "max_depth must be at least 1; use unbounded() to remove the limit".into(),
            ));
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        if let Some(max_depth) = get_env_parse(&build_env_key(prefix, "max_depth"))? {
            config.max_depth = Some(max_depth);
        }
        if get_env_bool(&build_env_key(prefix, "unbounded"))? == Some(true) {
            config.max_depth = None;
        }

        Ok(config)
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        self.max_depth = other.max_depth;
        self
    }
}
