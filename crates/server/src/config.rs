//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Invalid environment variable value
#[derive(Debug, Error)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address (`PRECIS_ADDR`, default `0.0.0.0:8080`)
    pub addr: SocketAddr,
    /// Input is truncated to this many characters (`PRECIS_MAX_CHARS`, default 50000)
    pub max_chars: usize,
    /// Trimmed input shorter than this is rejected (`PRECIS_MIN_CHARS`, default 50)
    pub min_chars: usize,
    /// Whole-request timeout (`PRECIS_TIMEOUT_SECS`, default 30)
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            max_chars: 50_000,
            min_chars: 50,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            addr: parse_or(&lookup, "PRECIS_ADDR", defaults.addr)?,
            max_chars: parse_or(&lookup, "PRECIS_MAX_CHARS", defaults.max_chars)?,
            min_chars: parse_or(&lookup, "PRECIS_MIN_CHARS", defaults.min_chars)?,
            timeout: parse_or(&lookup, "PRECIS_TIMEOUT_SECS", defaults.timeout.as_secs()).map(Duration::from_secs)?,
        })
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError { key, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.max_chars, 50_000);
        assert_eq!(config.min_chars, 50);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PRECIS_ADDR", "127.0.0.1:9000"),
            ("PRECIS_MAX_CHARS", "1000"),
            ("PRECIS_MIN_CHARS", " 10 "),
            ("PRECIS_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.max_chars, 1000);
        assert_eq!(config.min_chars, 10);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_value() {
        let err = ServerConfig::from_lookup(lookup(&[("PRECIS_MAX_CHARS", "lots")])).unwrap_err();
        assert_eq!(err.key, "PRECIS_MAX_CHARS");
        assert!(err.to_string().contains("lots"));
    }
}
