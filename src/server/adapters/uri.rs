//! Default connection string parser for `mongodb://` style URIs.

use crate::server::{
    domain::{AddressSet, DEFAULT_PORT, ParsedConnectionString, ServerAddress},
    ports::{ConnectionStringError, ConnectionStringParser},
};
use serde::{Deserialize, Serialize};

const SCHEME: &str = "mongodb";

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Port used for host entries that do not name one.
    pub default_port: u16,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_port: DEFAULT_PORT,
        }
    }
}

/// Parses `[mongodb://][user[:password]@]host[:port][,host[:port]...][/database][?options]`.
///
/// Host order is preserved. Options are accepted and ignored; they belong to
/// the connection pool. Credentials are taken verbatim, so they cannot
/// contain `/`.
#[derive(Debug, Clone, Default)]
pub struct UriConnectionStringParser {
    config: ParserConfig,
}

impl UriConnectionStringParser {
    /// Creates a parser with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom settings.
    #[must_use]
    pub const fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser settings.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn parse_hosts(&self, hosts: &str) -> Result<AddressSet, ConnectionStringError> {
        if hosts.trim().is_empty() {
            return Err(ConnectionStringError::NoHosts);
        }

        let addresses = hosts
            .split(',')
            .map(|entry| self.parse_host_entry(entry.trim(), hosts))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AddressSet::new(addresses)?)
    }

    fn parse_host_entry(
        &self,
        entry: &str,
        hosts: &str,
    ) -> Result<ServerAddress, ConnectionStringError> {
        if entry.is_empty() {
            return Err(ConnectionStringError::EmptyHost(hosts.to_owned()));
        }

        let (host, port) = if let Some(bracketed) = entry.strip_prefix('[') {
            let (literal, after) = bracketed
                .split_once(']')
                .ok_or_else(|| ConnectionStringError::InvalidHost(entry.to_owned()))?;
            let port = match after.strip_prefix(':') {
                Some(raw_port) => parse_port(raw_port, entry)?,
                None if after.is_empty() => self.config.default_port,
                None => return Err(ConnectionStringError::InvalidHost(entry.to_owned())),
            };
            (literal, port)
        } else {
            match entry.split_once(':') {
                Some((_, raw_port)) if raw_port.contains(':') => {
                    return Err(ConnectionStringError::InvalidHost(entry.to_owned()));
                }
                Some((name, raw_port)) => (name, parse_port(raw_port, entry)?),
                None => (entry, self.config.default_port),
            }
        };

        if host.trim().is_empty() {
            return Err(ConnectionStringError::EmptyHost(entry.to_owned()));
        }
        Ok(ServerAddress::new(host, port)?)
    }
}

impl ConnectionStringParser for UriConnectionStringParser {
    fn parse(&self, input: &str) -> Result<ParsedConnectionString, ConnectionStringError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConnectionStringError::Empty);
        }

        let without_scheme = strip_scheme(trimmed)?;
        let (location, options) = without_scheme
            .split_once('?')
            .unwrap_or((without_scheme, ""));
        if !options.is_empty() {
            tracing::debug!(options, "ignoring connection string options");
        }

        // The first `/` ends the authority; `@` in the database path is literal.
        let (authority, database) = location
            .split_once('/')
            .map_or((location, None), |(head, name)| {
                (head, Some(name).filter(|db| !db.is_empty()))
            });
        let (userinfo, hosts) = authority
            .rsplit_once('@')
            .map_or((None, authority), |(info, host_list)| (Some(info), host_list));

        let mut parsed = ParsedConnectionString::new(self.parse_hosts(hosts)?);
        if let Some(info) = userinfo {
            let (username, password) = info
                .split_once(':')
                .map_or((info, None), |(user, secret)| (user, Some(secret)));
            if username.is_empty() {
                return Err(ConnectionStringError::EmptyUsername);
            }
            parsed = parsed.with_username(username);
            if let Some(secret) = password {
                parsed = parsed.with_password(secret);
            }
        }
        if let Some(name) = database {
            parsed = parsed.with_database(name);
        }
        Ok(parsed)
    }
}

fn strip_scheme(input: &str) -> Result<&str, ConnectionStringError> {
    match input.split_once("://") {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case(SCHEME) => Ok(rest),
        Some((scheme, _)) if is_scheme(scheme) => {
            Err(ConnectionStringError::UnsupportedScheme(scheme.to_owned()))
        }
        _ => Ok(input),
    }
}

/// URI scheme token: `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`.
fn is_scheme(candidate: &str) -> bool {
    candidate
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

fn parse_port(raw: &str, entry: &str) -> Result<u16, ConnectionStringError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConnectionStringError::InvalidPort(entry.to_owned())),
    }
}
