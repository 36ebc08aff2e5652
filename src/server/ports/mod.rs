//! Port contracts for the server registry.
//!
//! Connection string parsing is owned by an external collaborator; the
//! registry only depends on the contract defined here.

pub mod connection_string;

pub use connection_string::{ConnectionStringError, ConnectionStringParser};
