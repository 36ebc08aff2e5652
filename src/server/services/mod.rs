//! Application services for server resolution.

mod config;
mod registry;
mod resolver;

pub use config::{DEFAULT_DATABASE, IncompleteCredentialsPolicy, RegistryConfig};
pub use registry::{ServerRegistry, ServerRegistryError, ServerRegistryResult};
pub use resolver::{ServerResolver, ServerResolverError, ServerResolverResult};
