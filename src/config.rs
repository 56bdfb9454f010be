//! Host configuration parsed from environment variables.
//!
//! Only the listener and HTTP policy live here. Leptos build settings
//! (site root, output name) come from `get_configuration`, and the external
//! API base URL is compiled into the client from `API_URL`.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Allow any origin. Useful when the app is embedded from another host.
    pub cors_allow_any: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, cors_allow_any: false }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `CORS_ALLOW_ANY`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error when a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let bind_addr = parse_bind_addr(lookup("BIND_ADDR").as_deref())?;
        let cors_allow_any = match lookup("CORS_ALLOW_ANY") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "CORS_ALLOW_ANY", value: raw })?,
            None => false,
        };
        Ok(Self { bind_addr, port, cors_allow_any })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(value.to_owned())),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
