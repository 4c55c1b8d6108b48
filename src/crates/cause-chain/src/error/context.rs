//! Error context utilities
//!
//! Wraps errors in a context layer so that callers can build the chains
//! the resolver walks.

use std::error::Error as StdError;
use std::fmt;

/// Boxed error produced by [`ErrorContext`]
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Trait for adding context to errors
///
/// # Example
///
/// ```rust
/// use cause_chain::error::{chain, ErrorContext};
///
/// let err = std::fs::read_to_string("/definitely/not/here")
///     .context("Failed to load reservation snapshot")
///     .unwrap_err();
///
/// assert_eq!(err.to_string(), "Failed to load reservation snapshot");
/// assert_eq!(chain(&*err).count(), 2);
/// ```
pub trait ErrorContext<T> {
    /// Wrap the error with a context message
    fn context(self, msg: impl Into<String>) -> Result<T, BoxError>;

    /// Wrap the error with a lazily built context message
    ///
    /// The closure only runs if the result is an error.
    fn with_context<F>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> Result<T, BoxError> {
        self.map_err(|e| ContextError::new(msg, e).into())
    }

    fn with_context<F>(self, f: F) -> Result<T, BoxError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ContextError::new(f(), e).into())
    }
}

/// Error with a context message wrapping its cause
#[derive(Debug)]
pub struct ContextError {
    message: String,
    source: BoxError,
}

impl ContextError {
    /// Wrap `source` with `message`
    pub fn new(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for ContextError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.source as &(dyn StdError + 'static))
    }
}
