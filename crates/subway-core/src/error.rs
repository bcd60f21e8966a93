//! Core error type.
//!
//! Sub-crates define their own error enums; the ones that build on core
//! values wrap `CoreError` through a `#[from]` variant.

use thiserror::Error;

/// Errors raised while constructing core values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("segment distance must be positive")]
    ZeroDistance,
}

/// Shorthand result type for `subway-core`.
pub type CoreResult<T> = Result<T, CoreError>;
