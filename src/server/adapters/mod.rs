//! Adapter implementations for server registry ports.

pub mod uri;

pub use uri::{ParserConfig, UriConnectionStringParser};
