//! Server registry: client-side server and database identity for a
//! document-database driver.
//!
//! This crate decides which server handle a caller receives for a set of
//! network addresses, and which database handle it receives for a name on
//! that server. Equal address sequences always resolve to the same handle,
//! database handles are created lazily and cached per server, and default
//! credentials from a connection string are scoped to the database they name.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Addresses, credentials, and identity-stable handles
//! - **Ports**: The connection string parser contract
//! - **Adapters**: A `mongodb://` URI parser
//! - **Services**: The registry and the connection string resolver
//!
//! Wire protocol, pooling, and authentication handshakes live outside this
//! crate and obtain server identity only through the registry.
//!
//! # Modules
//!
//! - [`server`]: Server resolution and database handle caching

pub mod server;
