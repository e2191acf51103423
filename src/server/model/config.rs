use std::env;
use std::net::SocketAddrV4;
use std::num::NonZeroUsize;
use std::str::FromStr;
use derive_more::{Display, Error};

pub(crate) const DEFAULT_HOST_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ConfigError {
    #[display("failed to parse HOST={_0}")]
    InvalidHost(#[error(not(source))] String),
    #[display("failed to parse WORKERS={_0}")]
    InvalidWorkers(#[error(not(source))] String),
}

/// Server configs
#[derive(Debug, PartialEq)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// actix worker count, framework default when absent
    pub workers: Option<NonZeroUsize>,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, workers: Option<NonZeroUsize>) -> Self {
        Self {
            addr,
            workers,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from HOST and WORKERS as returned by `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or(DEFAULT_HOST_ADDR.to_string());
        let addr = SocketAddrV4::from_str(&host).map_err(|_| ConfigError::InvalidHost(host))?;
        let workers = match lookup("WORKERS") {
            Some(v) => Some(v.parse().map_err(|_| ConfigError::InvalidWorkers(v))?),
            None => None,
        };
        Ok(Self::new(addr, workers))
    }
}
