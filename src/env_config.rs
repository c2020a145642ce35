//! Environment configuration for the server binary.
//!
//! Reads `TABREC_HOST` (default `0.0.0.0`) and `TABREC_PORT` (default 8080).
//! Unset variables fall back to the defaults; set but unparseable ones are
//! an error.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use log::info;

pub const HOST_VAR: &str = "TABREC_HOST";
pub const PORT_VAR: &str = "TABREC_PORT";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid TABREC_PORT value: {0:?}")]
    InvalidPort(String),
    #[error("invalid TABREC_HOST value: {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Self::from_lookup(|key| std::env::var(key).ok())?;
        info!("{}={} {}={}", HOST_VAR, cfg.host, PORT_VAR, cfg.port);
        Ok(cfg)
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(HOST_VAR) {
            cfg.host = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw.clone()))?;
        }
        if let Some(raw) = lookup(PORT_VAR) {
            cfg.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        Ok(cfg)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
