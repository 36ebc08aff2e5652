//! Server and database identity registry.
//!
//! Maps ordered server address sequences to identity-stable server handles,
//! and server handles to lazily created database handles carrying default
//! credentials. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
