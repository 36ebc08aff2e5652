//! Lazily created handle for one named database on a server.

use super::server_handle::ServerState;
use super::{Credentials, ServerHandle};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

struct DatabaseState {
    owner: Weak<ServerState>,
    name: String,
    default_credentials: RwLock<Option<Credentials>>,
}

/// Shared handle to one database on one server.
///
/// Obtained through [`ServerHandle::database`]. Clones share the default
/// credentials slot, so a value set through one clone is seen by all of them.
/// The handle does not keep its server alive.
#[derive(Clone)]
pub struct DatabaseHandle(Arc<DatabaseState>);

impl DatabaseHandle {
    pub(super) fn new(owner: Weak<ServerState>, name: &str) -> Self {
        Self(Arc::new(DatabaseState {
            owner,
            name: name.to_owned(),
            default_credentials: RwLock::new(None),
        }))
    }

    /// Returns the database name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Returns the owning server.
    ///
    /// Returns `None` only after every handle to the server, including the
    /// registry's, has been dropped.
    #[must_use]
    pub fn server(&self) -> Option<ServerHandle> {
        self.0.owner.upgrade().map(ServerHandle::from_state)
    }

    /// Replaces the default credentials.
    pub fn set_default_credentials(&self, credentials: Credentials) {
        *self
            .0
            .default_credentials
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(credentials);
    }

    /// Returns the default credentials, if any have been set.
    #[must_use]
    pub fn default_credentials(&self) -> Option<Credentials> {
        self.0
            .default_credentials
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` when both handles refer to the same database.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for DatabaseHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for DatabaseHandle {}

impl fmt::Debug for DatabaseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseHandle")
            .field("name", &self.0.name)
            .field("default_credentials", &self.default_credentials())
            .finish_non_exhaustive()
    }
}
