//! Connection string resolution service.
//!
//! Glues a [`ConnectionStringParser`] to a [`ServerRegistry`].

use super::registry::{ServerRegistry, ServerRegistryError};
use crate::server::{
    adapters::UriConnectionStringParser,
    domain::ServerHandle,
    ports::{ConnectionStringError, ConnectionStringParser},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for connection string resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerResolverError {
    /// The connection string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ConnectionStringError),
    /// The registry rejected the parsed connection string.
    #[error(transparent)]
    Registry(#[from] ServerRegistryError),
}

/// Result type for connection string resolution.
pub type ServerResolverResult<T> = Result<T, ServerResolverError>;

/// Resolves connection strings to server handles.
pub struct ServerResolver<P>
where
    P: ConnectionStringParser,
{
    parser: Arc<P>,
    registry: Arc<ServerRegistry>,
}

impl<P> Clone for ServerResolver<P>
where
    P: ConnectionStringParser,
{
    fn clone(&self) -> Self {
        Self {
            parser: Arc::clone(&self.parser),
            registry: Arc::clone(&self.registry),
        }
    }
}

impl ServerResolver<UriConnectionStringParser> {
    /// Creates a resolver using the default URI parser.
    #[must_use]
    pub fn with_uri_parser(registry: Arc<ServerRegistry>) -> Self {
        Self::new(Arc::new(UriConnectionStringParser::new()), registry)
    }
}

impl<P> ServerResolver<P>
where
    P: ConnectionStringParser,
{
    /// Creates a resolver from a parser and a registry.
    #[must_use]
    pub const fn new(parser: Arc<P>, registry: Arc<ServerRegistry>) -> Self {
        Self { parser, registry }
    }

    /// Returns the registry this resolver populates.
    #[must_use]
    pub fn registry(&self) -> &ServerRegistry {
        &self.registry
    }

    /// Parses `connection_string` and resolves the server it names.
    ///
    /// # Errors
    ///
    /// Returns [`ServerResolverError::Parse`] when parsing fails, or
    /// [`ServerResolverError::Registry`] when the registry rejects the
    /// parsed credentials.
    pub fn resolve(&self, connection_string: &str) -> ServerResolverResult<ServerHandle> {
        let parsed = self.parser.parse(connection_string)?;
        Ok(self.registry.resolve_from_connection_string(&parsed)?)
    }
}
