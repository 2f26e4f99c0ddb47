//! Runtime configuration read from the environment

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Largest request text accepted by the parse and import endpoints.
    pub max_input_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

impl Config {
    /// Read `HOST`, `PORT` and `MAX_INPUT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value,
                reason: "expected a port number",
            })?,
            None => defaults.port,
        };

        let max_input_bytes = match lookup("MAX_INPUT_BYTES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "MAX_INPUT_BYTES",
                    value,
                    reason: "expected a positive byte count",
                })?,
            None => defaults.max_input_bytes,
        };

        Ok(Self {
            host,
            port,
            max_input_bytes,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_input_bytes, 65536);
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_INPUT_BYTES", "1024"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.max_input_bytes, 1024);
    }

    #[test]
    fn test_invalid_port() {
        let err = config_from(&[("PORT", "70000")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid PORT: \"70000\" (expected a port number)"
        );
    }

    #[test]
    fn test_zero_max_input_rejected() {
        assert!(config_from(&[("MAX_INPUT_BYTES", "0")]).is_err());
        assert!(config_from(&[("MAX_INPUT_BYTES", "lots")]).is_err());
    }
}
