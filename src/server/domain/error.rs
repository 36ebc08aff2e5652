//! Error types for server domain validation.

use thiserror::Error;

/// Errors returned while constructing server domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerDomainError {
    /// An address set was built from no endpoints.
    #[error("address set must contain at least one server address")]
    EmptyAddressSet,

    /// The endpoint host is empty after trimming.
    #[error("server host must not be empty")]
    EmptyHost,

    /// The endpoint port is outside the usable range.
    #[error("invalid server port: {0}")]
    InvalidPort(u16),
}
