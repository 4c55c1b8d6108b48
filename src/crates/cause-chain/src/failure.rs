//! The failure capability and cause chain traversal
//!
//! A failure is anything that can point at the failure it wraps. Trait
//! objects of `std::error::Error` get this through `source()`; callers
//! with their own error representation implement [`Failure`] directly.

use std::error::Error as StdError;
use std::iter::FusedIterator;

/// A `'static` error trait object, the element type of std error chains
pub type DynError = dyn StdError + 'static;

/// A value that may wrap another failure of the same type
///
/// # Example
///
/// ```rust
/// use cause_chain::Failure;
///
/// enum Fault {
///     Timeout,
///     Wrapped(&'static str, Box<Fault>),
/// }
///
/// impl Failure for Fault {
///     fn caused_by(&self) -> Option<&Self> {
///         match self {
///             Fault::Timeout => None,
///             Fault::Wrapped(_, inner) => Some(&**inner),
///         }
///     }
/// }
///
/// let fault = Fault::Wrapped("rpc", Box::new(Fault::Timeout));
/// assert_eq!(fault.chain().count(), 2);
/// ```
pub trait Failure {
    /// The failure this one wraps, if any
    fn caused_by(&self) -> Option<&Self>;

    /// Iterate this failure followed by each of its causes
    fn chain(&self) -> Chain<'_, Self> {
        Chain::new(self)
    }
}

impl Failure for DynError {
    fn caused_by(&self) -> Option<&Self> {
        self.source()
    }
}

/// Borrowing iterator over a cause chain, head first
///
/// The iterator never looks past the element it is about to yield, so a
/// cyclic chain yields forever. Bound it with `take` when the chain is not
/// trusted.
#[derive(Debug)]
pub struct Chain<'a, F: ?Sized> {
    next: Option<&'a F>,
}

impl<'a, F: ?Sized> Chain<'a, F> {
    /// Start a chain at `head`
    pub fn new(head: &'a F) -> Self {
        Self { next: Some(head) }
    }
}

impl<F: ?Sized> Clone for Chain<'_, F> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, F: Failure + ?Sized> Iterator for Chain<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.caused_by();
        Some(current)
    }
}

impl<F: Failure + ?Sized> FusedIterator for Chain<'_, F> {}
