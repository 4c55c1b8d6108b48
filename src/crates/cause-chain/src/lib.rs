//! Root cause resolution for error cause chains
//!
//! Given an error that wraps an underlying error (which may itself wrap
//! another, and so on), this crate picks the single most useful failure
//! to surface: the first element of the chain matching a caller-supplied
//! marker kind or, when nothing matches, the end of the chain.
//!
//! # Modules
//!
//! - `failure` - The `Failure` capability and the borrowing `Chain` iterator
//! - `marker` - Marker kinds used to short-circuit resolution
//! - `resolve` - The root cause resolver
//! - `error` - Chain formatting, lookup and context helpers for `std::error::Error`
//! - `config` - Resolver configuration with environment variable loading
//!
//! # Example
//!
//! ```rust
//! use cause_chain::error::ErrorContext;
//! use cause_chain::marker::instance_of;
//! use cause_chain::resolve_root_cause;
//!
//! let err = Err::<(), _>(std::io::Error::other("disk on fire"))
//!     .context("Failed to flush journal")
//!     .unwrap_err();
//!
//! let root = resolve_root_cause(&*err, &instance_of::<std::io::Error>()).unwrap();
//! assert_eq!(root.to_string(), "disk on fire");
//! ```

pub mod config;
pub mod error;
pub mod failure;
pub mod marker;
pub mod resolve;

use thiserror::Error;

pub use config::ResolverConfig;
pub use failure::{Chain, DynError, Failure};
pub use marker::MarkerKind;
pub use resolve::{
    resolve_root_cause, try_resolve_root_cause, Resolution, RootCauseResolver, Termination,
};

/// Errors that can occur while resolving a cause chain
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// A required argument was absent
    #[error("Invalid argument: {0} must not be absent")]
    InvalidArgument(&'static str),

    /// The chain did not terminate within the configured depth
    #[error("Malformed cause chain: more than {max_depth} causes followed")]
    MalformedChain { max_depth: usize },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChainError {
    /// Get the canonical error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "E_INVALID_ARGUMENT",
            Self::MalformedChain { .. } => "E_MALFORMED_CHAIN",
            Self::Config(_) => "E_CONFIG",
        }
    }
}

/// Result type for cause chain operations
pub type Result<T> = std::result::Result<T, ChainError>;

/// Initialize the crate
pub fn init() -> Result<()> {
    tracing::debug!("Initializing cause-chain {}", version());
    Ok(())
}

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
