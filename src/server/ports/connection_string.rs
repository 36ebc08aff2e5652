//! Connection string parsing port.

use crate::server::domain::{ParsedConnectionString, ServerDomainError};
use thiserror::Error;

/// Turns a connection string into addresses, credentials and a database name.
pub trait ConnectionStringParser: Send + Sync {
    /// Parses `input`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionStringError`] when the input is malformed.
    fn parse(&self, input: &str) -> Result<ParsedConnectionString, ConnectionStringError>;
}

/// Errors returned by connection string parsers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConnectionStringError {
    /// The input is empty after trimming.
    #[error("connection string must not be empty")]
    Empty,

    /// The input names a scheme other than `mongodb`.
    #[error("unsupported connection string scheme: {0}")]
    UnsupportedScheme(String),

    /// The input lists no hosts.
    #[error("connection string contains no hosts")]
    NoHosts,

    /// A host entry in the list is empty.
    #[error("empty host in host list: {0}")]
    EmptyHost(String),

    /// A host entry cannot be split into host and port.
    #[error("malformed host entry: {0}")]
    InvalidHost(String),

    /// A host entry has a port that is not a number in `1..=65535`.
    #[error("invalid port in host entry: {0}")]
    InvalidPort(String),

    /// The credentials section has no username.
    #[error("connection string credentials must include a username")]
    EmptyUsername,

    /// A parsed value was rejected by domain validation.
    #[error(transparent)]
    Address(#[from] ServerDomainError),
}
