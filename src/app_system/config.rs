use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 9000;
const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
    #[error("Cannot resolve {host}:{port}")]
    Unresolvable { host: String, port: u16 },
}

/// Runtime settings read from the environment (and a `.env` file, if present).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Request queue depth of each resource actor.
    pub channel_buffer: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `CHANNEL_BUFFER`, falling back to defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = lookup("HOST").map(|h| h.trim().to_string()).unwrap_or(defaults.host);
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid { key: "HOST", value: host });
        }
        let port = parse_or(&lookup, "PORT", defaults.port)?;
        let channel_buffer = parse_or(&lookup, "CHANNEL_BUFFER", defaults.channel_buffer)?;
        if channel_buffer == 0 {
            return Err(ConfigError::Invalid { key: "CHANNEL_BUFFER", value: "0".to_string() });
        }
        Ok(Self { host, port, channel_buffer })
    }

    /// Resolves `host:port` to the address to bind. `HOST` may be a name such as `localhost`.
    pub async fn resolve_addr(&self) -> Result<SocketAddr, ConfigError> {
        let unresolvable = || ConfigError::Unresolvable { host: self.host.clone(), port: self.port };
        tokio::net::lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(|_| unresolvable())?
            .next()
            .ok_or_else(unresolvable)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[tokio::test]
    async fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        let addr = config.resolve_addr().await.unwrap();
        assert!(addr.ip().is_unspecified());
        assert_eq!(addr.port(), 9000);
    }

    #[tokio::test]
    async fn host_names_are_resolved() {
        let config = Config::from_lookup(lookup(&[("HOST", "localhost"), ("PORT", "8081")])).unwrap();
        let addr = config.resolve_addr().await.unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 8081);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let config = Config::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080"), ("CHANNEL_BUFFER", "8")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn bad_values_fail_startup() {
        assert!(Config::from_lookup(lookup(&[("PORT", "ninety")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CHANNEL_BUFFER", "0")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOST", "not a host")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HOST", "  ")])).is_err());
    }
}
