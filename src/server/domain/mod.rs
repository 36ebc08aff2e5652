//! Domain model for server and database identity.
//!
//! Address value objects, credentials, and the identity-stable handles that
//! the registry hands out. Handles use interior locking so they can be shared
//! across threads; nothing in this module performs I/O.

mod address;
mod connection_string;
mod credentials;
mod database_handle;
mod error;
mod ids;
mod server_handle;

pub use address::{AddressSet, DEFAULT_PORT, ServerAddress};
pub use connection_string::ParsedConnectionString;
pub use credentials::Credentials;
pub use database_handle::DatabaseHandle;
pub use error::ServerDomainError;
pub use ids::ServerId;
pub use server_handle::ServerHandle;
