//! Server configuration parsed from environment variables.

use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Error returned by [`ServerConfig::from_env`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{value}': {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("invalid HOST '{value}': {source}")]
    InvalidHost { value: String, source: AddrParseError },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Build config from raw values; `None` or blank selects the default.
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { host: parse_host(host)?, port: parse_port(port)? })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_host(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let value = non_blank(raw).unwrap_or(DEFAULT_HOST);
    value
        .parse()
        .map_err(|source| ConfigError::InvalidHost { value: value.to_owned(), source })
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|source| ConfigError::InvalidPort { value: value.to_owned(), source }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
