//! Marker kinds
//!
//! A marker kind decides whether a failure is the one the caller asked for.
//! Resolution stops at the first failure a marker matches.
//!
//! # Example
//!
//! ```rust
//! use cause_chain::marker::{any_of, instance_of, MarkerKind};
//! use cause_chain::DynError;
//!
//! let io = std::io::Error::other("broken pipe");
//! let failure: &DynError = &io;
//!
//! assert!(instance_of::<std::io::Error>().matches(failure));
//!
//! let either = any_of()
//!     .or(instance_of::<std::fmt::Error>())
//!     .or(|e: &DynError| e.to_string().contains("pipe"));
//! assert!(either.matches(failure));
//! ```

use crate::failure::DynError;
use std::any::type_name;
use std::error::Error as StdError;
use std::fmt;
use std::marker::PhantomData;

/// Predicate selecting the failure to report
pub trait MarkerKind<F: ?Sized> {
    /// Whether `failure` is of this kind
    fn matches(&self, failure: &F) -> bool;
}

impl<F, P> MarkerKind<F> for P
where
    F: ?Sized,
    P: Fn(&F) -> bool,
{
    fn matches(&self, failure: &F) -> bool {
        self(failure)
    }
}

/// Matches errors whose concrete type is `T`
pub struct InstanceOf<T> {
    _kind: PhantomData<fn() -> T>,
}

/// Marker for errors of concrete type `T`
pub fn instance_of<T: StdError + 'static>() -> InstanceOf<T> {
    InstanceOf { _kind: PhantomData }
}

impl<T: StdError + 'static> MarkerKind<DynError> for InstanceOf<T> {
    fn matches(&self, failure: &DynError) -> bool {
        failure.is::<T>()
    }
}

impl<T> Clone for InstanceOf<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for InstanceOf<T> {}

impl<T> fmt::Debug for InstanceOf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceOf<{}>", type_name::<T>())
    }
}

/// Matches when any contained marker matches
///
/// An empty `AnyOf` matches nothing, so resolving with it always lands on
/// the end of the chain.
pub struct AnyOf<F: ?Sized> {
    markers: Vec<Box<dyn MarkerKind<F> + Send + Sync>>,
}

/// Start an empty `AnyOf` combinator
pub fn any_of<F: ?Sized>() -> AnyOf<F> {
    AnyOf {
        markers: Vec::new(),
    }
}

impl<F: ?Sized> AnyOf<F> {
    /// Add another alternative
    pub fn or<M>(mut self, marker: M) -> Self
    where
        M: MarkerKind<F> + Send + Sync + 'static,
    {
        self.markers.push(Box::new(marker));
        self
    }

    /// Number of alternatives
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether no alternative has been added
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl<F: ?Sized> MarkerKind<F> for AnyOf<F> {
    fn matches(&self, failure: &F) -> bool {
        self.markers.iter().any(|marker| marker.matches(failure))
    }
}

impl<F: ?Sized> fmt::Debug for AnyOf<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("markers", &self.markers.len())
            .finish()
    }
}
