//! Shared test helpers for in-memory registry integration tests.

use rstest::fixture;
use server_registry::server::{
    adapters::UriConnectionStringParser,
    domain::{AddressSet, ServerAddress},
    services::{ServerRegistry, ServerResolver},
};
use std::sync::Arc;

/// Resolver type used by the integration tests.
pub type TestResolver = ServerResolver<UriConnectionStringParser>;

/// Provides a fresh registry for each test.
#[fixture]
pub fn registry() -> Arc<ServerRegistry> {
    Arc::new(ServerRegistry::new())
}

/// Provides a URI resolver over a fresh registry.
#[fixture]
pub fn resolver() -> TestResolver {
    ServerResolver::with_uri_parser(Arc::new(ServerRegistry::new()))
}

/// Builds an address set from `(host, port)` pairs in order.
///
/// # Panics
///
/// Panics when `entries` is empty or holds an invalid address.
#[must_use]
pub fn addresses(entries: &[(&str, u16)]) -> AddressSet {
    AddressSet::new(
        entries
            .iter()
            .map(|&(host, port)| ServerAddress::new(host, port).expect("valid address")),
    )
    .expect("non-empty address set")
}
