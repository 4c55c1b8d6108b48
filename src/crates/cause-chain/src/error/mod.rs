//! Error chain utilities
//!
//! Helpers for building and inspecting `std::error::Error` chains.
//!
//! # Features
//!
//! - `ErrorContext` trait for wrapping errors in a context layer
//! - Chain iteration, formatting and length
//! - Plain root cause (the end of the chain) and typed cause lookup
//!
//! For selecting a cause by kind, see [`resolve_root_cause`](crate::resolve_root_cause).
//!
//! # Example
//!
//! ```rust,ignore
//! use cause_chain::error::{format_error_chain, root_cause, ErrorContext};
//!
//! match load_reservations(path).context("Failed to restore state") {
//!     Err(e) => {
//!         eprintln!("{}", format_error_chain(&*e));
//!         eprintln!("Root cause: {}", root_cause(&*e));
//!     }
//!     Ok(_) => {}
//! }
//! ```

mod chain;
mod context;

pub use chain::{chain, error_chain_length, find_cause, format_error_chain, root_cause};
pub use context::{BoxError, ContextError, ErrorContext};
