//! Error chain inspection
//!
//! Helpers for walking `std::error::Error` chains via `source()`.

use crate::failure::{Chain, DynError, Failure};
use std::error::Error as StdError;

/// Iterate an error followed by each of its sources
pub fn chain(error: &DynError) -> Chain<'_, DynError> {
    error.chain()
}

/// Format an error chain as a multi-line string
///
/// The head is printed as `Error: ...`, each source on its own line as
/// `Caused by: ...`, indented two spaces per level.
///
/// # Example
///
/// ```rust
/// use cause_chain::error::{format_error_chain, ErrorContext};
///
/// let err = Err::<(), _>(std::fmt::Error)
///     .context("Failed to render report")
///     .unwrap_err();
///
/// assert_eq!(
///     format_error_chain(&*err),
///     "Error: Failed to render report\n  Caused by: an error occurred when formatting an argument"
/// );
/// ```
pub fn format_error_chain(error: &DynError) -> String {
    let mut result = format!("Error: {}", error);

    for (level, source) in chain(error).enumerate().skip(1) {
        result.push_str(&format!(
            "\n{:indent$}Caused by: {}",
            "",
            source,
            indent = level * 2
        ));
    }

    result
}

/// Get the last error in the chain, ignoring any marker
pub fn root_cause(error: &DynError) -> &DynError {
    chain(error).last().unwrap_or(error)
}

/// Count the errors in a chain (minimum 1)
pub fn error_chain_length(error: &DynError) -> usize {
    chain(error).count()
}

/// Find the first error in the chain, starting at `error`, of type `T`
pub fn find_cause<T: StdError + 'static>(error: &DynError) -> Option<&T> {
    chain(error).find_map(|e| e.downcast_ref::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoxError, ContextError, ErrorContext};
    use crate::ChainError;
    use std::io;

    fn inner_operation() -> Result<(), io::Error> {
        Err(io::Error::new(io::ErrorKind::NotFound, "File not found"))
    }

    fn middle_operation() -> Result<(), BoxError> {
        inner_operation().context("Failed to read configuration")
    }

    fn outer_operation() -> Result<(), BoxError> {
        middle_operation().map_err(|e| {
            ContextError::new("Application initialization failed", e).into()
        })
    }

    #[test]
    fn test_format_error_chain() {
        let error = outer_operation().unwrap_err();
        let formatted = format_error_chain(&*error);

        assert_eq!(
            formatted,
            "Error: Application initialization failed\n  \
             Caused by: Failed to read configuration\n    \
             Caused by: File not found"
        );
    }

    #[test]
    fn test_root_cause() {
        let error = outer_operation().unwrap_err();
        assert_eq!(root_cause(&*error).to_string(), "File not found");
    }

    #[test]
    fn test_error_chain_length() {
        let error = outer_operation().unwrap_err();
        assert_eq!(error_chain_length(&*error), 3);
    }

    #[test]
    fn test_find_cause() {
        let error = outer_operation().unwrap_err();

        let io_err = find_cause::<io::Error>(&*error).unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(find_cause::<ChainError>(&*error).is_none());
    }

    #[test]
    fn test_find_cause_includes_head() {
        let error = ChainError::MalformedChain { max_depth: 4 };
        let found = find_cause::<ChainError>(&error).unwrap();
        assert_eq!(found, &error);
    }

    #[test]
    fn test_single_error_chain() {
        let error = ChainError::Config("single error".to_string());

        assert_eq!(
            format_error_chain(&error),
            "Error: Configuration error: single error"
        );
        assert_eq!(error_chain_length(&error), 1);
        assert_eq!(
            root_cause(&error).to_string(),
            "Configuration error: single error"
        );
    }
}
