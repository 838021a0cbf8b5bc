//! Shared utilities for the UPI deep-link service.

pub mod consts;
pub mod errors;
pub mod pii;

pub use errors::ValidationError;

/// The shared result type used across the workspace, wrapping errors in an
/// [`error_stack::Report`].
pub type CustomResult<T, E> = error_stack::Result<T, E>;
