//! Identity-stable handle for one logical server.

use super::{AddressSet, DatabaseHandle, ServerId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

pub(super) struct ServerState {
    id: ServerId,
    addresses: AddressSet,
    databases: RwLock<HashMap<String, DatabaseHandle>>,
}

/// Shared handle to one logical server.
///
/// Handles are cheap to clone; every clone refers to the same server.
/// Equality is identity: two handles are equal only when they were handed out
/// for the same registry entry. Handles are created by
/// [`ServerRegistry::resolve`](crate::server::services::ServerRegistry::resolve)
/// and cannot be constructed directly.
#[derive(Clone)]
pub struct ServerHandle(Arc<ServerState>);

impl ServerHandle {
    pub(crate) fn new(addresses: AddressSet) -> Self {
        Self(Arc::new(ServerState {
            id: ServerId::new(),
            addresses,
            databases: RwLock::new(HashMap::new()),
        }))
    }

    pub(super) const fn from_state(state: Arc<ServerState>) -> Self {
        Self(state)
    }

    /// Returns the diagnostic identifier of this handle.
    #[must_use]
    pub fn id(&self) -> ServerId {
        self.0.id
    }

    /// Returns the address sequence backing this handle's identity.
    #[must_use]
    pub fn addresses(&self) -> &AddressSet {
        &self.0.addresses
    }

    /// Returns the host of the first address.
    #[must_use]
    pub fn primary_host(&self) -> &str {
        self.0.addresses.primary().host()
    }

    /// Returns the port of the first address.
    #[must_use]
    pub fn primary_port(&self) -> u16 {
        self.0.addresses.primary().port()
    }

    /// Returns the handle for the named database, creating it on first use.
    ///
    /// Repeated calls with the same name return the same instance. A newly
    /// created handle carries no default credentials.
    #[must_use]
    pub fn database(&self, name: &str) -> DatabaseHandle {
        let cached = self
            .0
            .databases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned();
        if let Some(existing) = cached {
            return existing;
        }

        let mut databases = self
            .0
            .databases
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        databases
            .entry(name.to_owned())
            .or_insert_with(|| {
                tracing::debug!(server_id = %self.0.id, database = name, "created database handle");
                DatabaseHandle::new(Arc::downgrade(&self.0), name)
            })
            .clone()
    }

    /// Alias for [`ServerHandle::database`].
    #[must_use]
    pub fn get_database(&self, name: &str) -> DatabaseHandle {
        self.database(name)
    }

    /// Returns the names of databases accessed so far, sorted.
    #[must_use]
    pub fn database_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .0
            .databases
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort_unstable();
        names
    }

    /// Returns `true` when both handles refer to the same server.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ServerHandle {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl Eq for ServerHandle {}

impl fmt::Debug for ServerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerHandle")
            .field("id", &self.0.id)
            .field("addresses", &self.0.addresses.to_string())
            .finish_non_exhaustive()
    }
}
