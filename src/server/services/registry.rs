//! Process-wide cache of server handles keyed by address sequence.
//!
//! [`ServerRegistry`] guarantees that resolving equal address sequences
//! yields the same [`ServerHandle`], and applies connection string
//! credentials to the database they name.

use super::config::{IncompleteCredentialsPolicy, RegistryConfig};
use crate::server::domain::{AddressSet, ParsedConnectionString, ServerHandle};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use thiserror::Error;

static GLOBAL: OnceLock<Arc<ServerRegistry>> = OnceLock::new();

/// Errors returned by registry resolution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServerRegistryError {
    /// Only one of username and password was supplied and the registry is
    /// configured with [`IncompleteCredentialsPolicy::Reject`].
    #[error("incomplete credentials (username: {has_username}, password: {has_password})")]
    IncompleteCredentials {
        /// Whether a username was supplied.
        has_username: bool,
        /// Whether a password was supplied.
        has_password: bool,
    },
}

/// Result type for registry resolution.
pub type ServerRegistryResult<T> = Result<T, ServerRegistryError>;

#[derive(Default)]
struct RegistryState {
    servers: Vec<ServerHandle>,
    index: HashMap<AddressSet, ServerHandle>,
}

/// Cache mapping each distinct address sequence to one server handle.
///
/// Entries are never evicted; handles live as long as the registry.
pub struct ServerRegistry {
    config: RegistryConfig,
    state: RwLock<RegistryState>,
}

impl Default for ServerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerRegistry {
    /// Creates an empty registry with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with custom settings.
    #[must_use]
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Returns the process-wide registry, creating it on first use with
    /// default settings.
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new())))
    }

    /// Returns the registry settings.
    #[must_use]
    pub const fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Returns the handle for `addresses`, creating it if this sequence has
    /// not been seen before.
    ///
    /// Order matters: `[a, b]` and `[b, a]` resolve to different handles.
    #[must_use]
    pub fn resolve(&self, addresses: AddressSet) -> ServerHandle {
        let cached = self
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .index
            .get(&addresses)
            .cloned();
        if let Some(existing) = cached {
            return existing;
        }

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = state.index.get(&addresses) {
            return existing.clone();
        }

        let handle = ServerHandle::new(addresses.clone());
        tracing::debug!(
            server_id = %handle.id(),
            addresses = %addresses,
            "created server handle"
        );
        state.index.insert(addresses, handle.clone());
        state.servers.push(handle.clone());
        handle
    }

    /// Resolves the server named by a parsed connection string.
    ///
    /// When both username and password are present, they become the default
    /// credentials of the database named in the string, or of
    /// [`RegistryConfig::default_database`] when none is named, replacing any
    /// earlier value. The server handle is returned whether or not
    /// credentials were present.
    ///
    /// # Errors
    ///
    /// Returns [`ServerRegistryError::IncompleteCredentials`] when only one of
    /// username and password is present and the registry is configured with
    /// [`IncompleteCredentialsPolicy::Reject`]. No server is created in that
    /// case.
    pub fn resolve_from_connection_string(
        &self,
        parsed: &ParsedConnectionString,
    ) -> ServerRegistryResult<ServerHandle> {
        if parsed.has_incomplete_credentials() {
            let has_username = parsed.username().is_some();
            let has_password = parsed.password().is_some();
            match self.config.incomplete_credentials {
                IncompleteCredentialsPolicy::Reject => {
                    tracing::warn!(
                        has_username,
                        has_password,
                        "rejecting connection string with incomplete credentials"
                    );
                    return Err(ServerRegistryError::IncompleteCredentials {
                        has_username,
                        has_password,
                    });
                }
                IncompleteCredentialsPolicy::Ignore => {
                    tracing::debug!(
                        has_username,
                        has_password,
                        "ignoring incomplete connection string credentials"
                    );
                }
            }
        }

        let server = self.resolve(parsed.addresses().clone());
        if let Some(credentials) = parsed.credentials() {
            let database = parsed
                .database()
                .unwrap_or(self.config.default_database.as_str());
            tracing::debug!(
                server_id = %server.id(),
                database,
                username = credentials.username(),
                "applying default credentials from connection string"
            );
            server.database(database).set_default_credentials(credentials);
        }
        Ok(server)
    }

    /// Returns `true` when a handle exists for exactly this sequence.
    #[must_use]
    pub fn contains(&self, addresses: &AddressSet) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .index
            .contains_key(addresses)
    }

    /// Returns every handle in creation order.
    #[must_use]
    pub fn servers(&self) -> Vec<ServerHandle> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .servers
            .clone()
    }

    /// Returns the number of distinct servers resolved so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .servers
            .len()
    }

    /// Returns `true` when nothing has been resolved yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
