//! Shared world state for server resolution BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use server_registry::server::{
    adapters::UriConnectionStringParser,
    domain::ServerHandle,
    services::{ServerRegistry, ServerResolver},
};

/// Resolver type used by the BDD world.
pub type TestResolver = ServerResolver<UriConnectionStringParser>;

/// Scenario world for server resolution behaviour tests.
pub struct ResolutionWorld {
    /// The registry under test.
    pub registry: Arc<ServerRegistry>,
    /// Connection string resolver over [`ResolutionWorld::registry`].
    pub resolver: TestResolver,
    /// Servers returned by each resolution, in order.
    pub resolved: Vec<ServerHandle>,
}

impl ResolutionWorld {
    /// Creates a world with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        let registry = Arc::new(ServerRegistry::new());
        let resolver = ServerResolver::with_uri_parser(Arc::clone(&registry));
        Self {
            registry,
            resolver,
            resolved: Vec::new(),
        }
    }

    /// Returns the most recently resolved server.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing has been resolved in this scenario.
    pub fn last_server(&self) -> Result<&ServerHandle, eyre::Report> {
        self.resolved
            .last()
            .ok_or_else(|| eyre::eyre!("no server resolved in scenario world"))
    }

    /// Returns the first two resolved servers.
    ///
    /// # Errors
    ///
    /// Returns an error when fewer than two servers have been resolved.
    pub fn first_two(&self) -> Result<(&ServerHandle, &ServerHandle), eyre::Report> {
        match self.resolved.as_slice() {
            [first, second, ..] => Ok((first, second)),
            _ => Err(eyre::eyre!(
                "expected two resolutions, found {}",
                self.resolved.len()
            )),
        }
    }
}

impl Default for ResolutionWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ResolutionWorld {
    ResolutionWorld::default()
}
