//! Root cause resolution
//!
//! Walks a cause chain from its head and stops at the first failure the
//! marker matches, or at the end of the chain when nothing does. The marker
//! is checked before the end-of-chain test at every step, so a terminal
//! failure that also matches is reported as a marker match.
//!
//! # Example
//!
//! ```rust
//! use cause_chain::error::ErrorContext;
//! use cause_chain::marker::instance_of;
//! use cause_chain::{resolve_root_cause, DynError};
//!
//! #[derive(Debug)]
//! struct QuotaExceeded;
//!
//! impl std::fmt::Display for QuotaExceeded {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("quota exceeded")
//!     }
//! }
//!
//! impl std::error::Error for QuotaExceeded {}
//!
//! let err = Err::<(), _>(QuotaExceeded)
//!     .context("Reservation rejected")
//!     .unwrap_err();
//! let head: &DynError = &*err;
//!
//! let root = resolve_root_cause(head, &instance_of::<QuotaExceeded>()).unwrap();
//! assert!(root.is::<QuotaExceeded>());
//! ```

use crate::config::{ConfigBuilder, ResolverConfig};
use crate::failure::{DynError, Failure};
use crate::marker::MarkerKind;
use crate::{ChainError, Result};
use tracing::{debug, trace};

/// Which stopping rule ended a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The marker matched the selected failure
    Marker,
    /// The selected failure has no cause and the marker did not match it
    Terminus,
}

/// The failure selected by a resolver, with how it was reached
#[derive(Debug)]
pub struct Resolution<'a, F: ?Sized> {
    failure: &'a F,
    depth: usize,
    termination: Termination,
}

impl<'a, F: ?Sized> Resolution<'a, F> {
    /// The selected failure
    pub fn failure(&self) -> &'a F {
        self.failure
    }

    /// Number of causes followed from the head to reach the failure
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Which stopping rule selected the failure
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Whether the marker matched, as opposed to the chain running out
    pub fn is_marker_match(&self) -> bool {
        self.termination == Termination::Marker
    }
}

impl<F: ?Sized> Clone for Resolution<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for Resolution<'_, F> {}

/// Selects a representative failure from a cause chain
///
/// The resolver holds no state besides its configuration and never keeps a
/// reference into a chain past the call that received it.
#[derive(Debug, Clone, Default)]
pub struct RootCauseResolver {
    config: ResolverConfig,
}

impl RootCauseResolver {
    /// Create a resolver with the default depth bound
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with an explicit configuration
    ///
    /// # Errors
    ///
    /// [`ChainError::Config`] when the configuration fails validation.
    pub fn with_config(config: ResolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this resolver was built with
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the root cause of `initial`
    ///
    /// Returns the first failure, starting at `initial` itself, that `marker`
    /// matches. If none does, returns the last failure of the chain.
    ///
    /// # Errors
    ///
    /// [`ChainError::MalformedChain`] when more than `max_depth` causes would
    /// have to be followed.
    pub fn resolve<'a, F, M>(&self, initial: &'a F, marker: &M) -> Result<&'a F>
    where
        F: Failure + ?Sized,
        M: MarkerKind<F> + ?Sized,
    {
        self.resolve_detailed(initial, marker)
            .map(|resolution| resolution.failure)
    }

    /// Like [`resolve`](Self::resolve), for callers whose inputs may be absent
    ///
    /// # Errors
    ///
    /// [`ChainError::InvalidArgument`] naming the absent input, before any
    /// part of the chain is read.
    pub fn try_resolve<'a, F, M>(
        &self,
        initial: Option<&'a F>,
        marker: Option<&M>,
    ) -> Result<&'a F>
    where
        F: Failure + ?Sized,
        M: MarkerKind<F> + ?Sized,
    {
        let initial = initial.ok_or(ChainError::InvalidArgument("initial"))?;
        let marker = marker.ok_or(ChainError::InvalidArgument("marker"))?;
        self.resolve(initial, marker)
    }

    /// Resolve and report which stopping rule selected the failure
    pub fn resolve_detailed<'a, F, M>(
        &self,
        initial: &'a F,
        marker: &M,
    ) -> Result<Resolution<'a, F>>
    where
        F: Failure + ?Sized,
        M: MarkerKind<F> + ?Sized,
    {
        let mut current = initial;
        let mut depth = 0usize;

        loop {
            if marker.matches(current) {
                trace!(depth, branch = "marker", "Resolved root cause");
                return Ok(Resolution {
                    failure: current,
                    depth,
                    termination: Termination::Marker,
                });
            }

            let Some(cause) = current.caused_by() else {
                trace!(depth, branch = "terminus", "Resolved root cause");
                return Ok(Resolution {
                    failure: current,
                    depth,
                    termination: Termination::Terminus,
                });
            };

            if let Some(max_depth) = self.config.max_depth {
                if depth >= max_depth {
                    debug!(max_depth, "Cause chain exceeded depth bound");
                    return Err(ChainError::MalformedChain { max_depth });
                }
            }

            current = cause;
            depth += 1;
        }
    }
}

/// Resolve the root cause of a std error chain with the default configuration
///
/// ```rust
/// use cause_chain::marker::instance_of;
/// use cause_chain::resolve_root_cause;
///
/// let err = std::io::Error::other("connection reset");
/// let root = resolve_root_cause(&err, &instance_of::<std::fmt::Error>()).unwrap();
/// assert_eq!(root.to_string(), "connection reset");
/// ```
pub fn resolve_root_cause<'a, M>(initial: &'a DynError, marker: &M) -> Result<&'a DynError>
where
    M: MarkerKind<DynError> + ?Sized,
{
    RootCauseResolver::new().resolve(initial, marker)
}

/// Resolve the root cause of a std error chain whose inputs may be absent
///
/// Fails with [`ChainError::InvalidArgument`] if either input is `None`.
pub fn try_resolve_root_cause<'a, M>(
    initial: Option<&'a DynError>,
    marker: Option<&M>,
) -> Result<&'a DynError>
where
    M: MarkerKind<DynError> + ?Sized,
{
    RootCauseResolver::new().try_resolve(initial, marker)
}
