//! Environment-derived runtime configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Reserved for the metrics listener of the deployment environment
    pub metrics_port: u16,
    pub version: String,
}

impl Config {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 3000)?,
            metrics_port: parse_or(&get, "METRICS_PORT", 9090)?,
            version: get("APP_VERSION").unwrap_or_else(|| "1.0.0".to_string()),
        })
    }

    /// Socket address the agent server binds to
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_or(get: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> Result<u16> {
    match get(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a port number, got '{}'", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.metrics_port, 9090);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("METRICS_PORT", "9191"),
            ("APP_VERSION", "2.1.0"),
        ]))
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.metrics_port, 9191);
        assert_eq!(config.version, "2.1.0");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup(&[("PORT", "not-a-port")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::from_lookup(lookup(&[("HOST", "127.0.0.1")])).unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
    }
}
