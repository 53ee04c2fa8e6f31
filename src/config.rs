//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Static assets: theme stylesheets, gallery images.
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PUBLIC_DIR`: default `public/` next to the manifest
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddr(raw))?,
            None => DEFAULT_BIND_ADDR,
        };
        let public_dir = lookup("PUBLIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_public_dir, PathBuf::from);

        Ok(Self { bind_addr, port, public_dir })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
