//! Parsed connection string value object.

use super::{AddressSet, Credentials};

/// Output of a connection string parser.
///
/// The registry treats this as an opaque value: it reads the addresses, the
/// optional username and password, and the optional default database name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConnectionString {
    addresses: AddressSet,
    username: Option<String>,
    password: Option<String>,
    database: Option<String>,
}

impl ParsedConnectionString {
    /// Creates a parsed connection string with no credentials or database.
    #[must_use]
    pub const fn new(addresses: AddressSet) -> Self {
        Self {
            addresses,
            username: None,
            password: None,
            database: None,
        }
    }

    /// Sets the username.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the default database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Returns the server addresses.
    #[must_use]
    pub const fn addresses(&self) -> &AddressSet {
        &self.addresses
    }

    /// Returns the username, if one was given.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the password, if one was given.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the default database name, if one was given.
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Returns credentials only when both username and password are present.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                Some(Credentials::new(username.as_str(), password.as_str()))
            }
            _ => None,
        }
    }

    /// Returns `true` when exactly one of username and password is present.
    #[must_use]
    pub const fn has_incomplete_credentials(&self) -> bool {
        self.username.is_some() != self.password.is_some()
    }
}
