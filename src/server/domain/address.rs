//! Server endpoint value objects.

use super::ServerDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port assumed when an endpoint is given without one.
pub const DEFAULT_PORT: u16 = 27017;

/// A single `host:port` network endpoint.
///
/// The host is trimmed on construction and compared verbatim, so
/// `Example.com` and `example.com` are distinct endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawServerAddress")]
pub struct ServerAddress {
    host: String,
    port: u16,
}

#[derive(Deserialize)]
struct RawServerAddress {
    host: String,
    #[serde(default = "default_port")]
    port: u16,
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

impl TryFrom<RawServerAddress> for ServerAddress {
    type Error = ServerDomainError;

    fn try_from(raw: RawServerAddress) -> Result<Self, Self::Error> {
        Self::new(raw.host, raw.port)
    }
}

impl ServerAddress {
    /// Creates a validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyHost`] when the host is empty after
    /// trimming, or [`ServerDomainError::InvalidPort`] when `port` is zero.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, ServerDomainError> {
        let normalized = host.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(ServerDomainError::EmptyHost);
        }
        if port == 0 {
            return Err(ServerDomainError::InvalidPort(port));
        }
        Ok(Self {
            host: normalized,
            port,
        })
    }

    /// Creates an endpoint on [`DEFAULT_PORT`].
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyHost`] when the host is empty after
    /// trimming.
    pub fn with_default_port(host: impl Into<String>) -> Result<Self, ServerDomainError> {
        Self::new(host, DEFAULT_PORT)
    }

    /// Returns the host name or IP literal.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the TCP port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

/// Ordered, non-empty sequence of endpoints identifying one logical server.
///
/// Equality and hashing follow the sequence: the same endpoints in a
/// different order form a different set. The first endpoint is stored apart
/// from the rest so that an empty set cannot be represented.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ServerAddress>", into = "Vec<ServerAddress>")]
pub struct AddressSet {
    primary: ServerAddress,
    others: Vec<ServerAddress>,
}

impl AddressSet {
    /// Creates an address set from endpoints in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`ServerDomainError::EmptyAddressSet`] when no endpoints are
    /// supplied.
    pub fn new(
        addresses: impl IntoIterator<Item = ServerAddress>,
    ) -> Result<Self, ServerDomainError> {
        let mut iter = addresses.into_iter();
        let primary = iter.next().ok_or(ServerDomainError::EmptyAddressSet)?;
        Ok(Self {
            primary,
            others: iter.collect(),
        })
    }

    /// Creates an address set holding a single endpoint.
    #[must_use]
    pub const fn single(address: ServerAddress) -> Self {
        Self {
            primary: address,
            others: Vec::new(),
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub const fn primary(&self) -> &ServerAddress {
        &self.primary
    }

    /// Returns the number of endpoints. Always at least one.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.others.len() + 1
    }

    /// Always `false`; present for API symmetry with collections.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the endpoints in order.
    pub fn iter(&self) -> impl Iterator<Item = &ServerAddress> {
        std::iter::once(&self.primary).chain(self.others.iter())
    }

    /// Copies the endpoints into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<ServerAddress> {
        self.iter().cloned().collect()
    }
}

impl From<ServerAddress> for AddressSet {
    fn from(address: ServerAddress) -> Self {
        Self::single(address)
    }
}

impl TryFrom<Vec<ServerAddress>> for AddressSet {
    type Error = ServerDomainError;

    fn try_from(addresses: Vec<ServerAddress>) -> Result<Self, Self::Error> {
        Self::new(addresses)
    }
}

impl From<AddressSet> for Vec<ServerAddress> {
    fn from(set: AddressSet) -> Self {
        let mut addresses = Self::with_capacity(set.len());
        addresses.push(set.primary);
        addresses.extend(set.others);
        addresses
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        for address in &self.others {
            write!(f, ",{address}")?;
        }
        Ok(())
    }
}
