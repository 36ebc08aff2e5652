//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Database that receives connection string credentials when the string
/// names no database.
pub const DEFAULT_DATABASE: &str = "admin";

/// How a connection string with only a username or only a password is
/// handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteCredentialsPolicy {
    /// Treat the string as carrying no credentials.
    #[default]
    Ignore,
    /// Fail resolution with
    /// [`ServerRegistryError::IncompleteCredentials`](super::ServerRegistryError::IncompleteCredentials).
    Reject,
}

/// Server registry settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Database whose default credentials are set when a connection string
    /// carries credentials but no database name.
    pub default_database: String,
    /// Handling of half-specified credentials.
    pub incomplete_credentials: IncompleteCredentialsPolicy,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_database: DEFAULT_DATABASE.to_owned(),
            incomplete_credentials: IncompleteCredentialsPolicy::Ignore,
        }
    }
}

impl RegistryConfig {
    /// Creates a configuration that rejects half-specified credentials.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            incomplete_credentials: IncompleteCredentialsPolicy::Reject,
            ..Self::default()
        }
    }

    /// Replaces the default database name.
    #[must_use]
    pub fn with_default_database(mut self, name: impl Into<String>) -> Self {
        self.default_database = name.into();
        self
    }
}
