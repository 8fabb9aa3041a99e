// src/config.rs
use std::{path::PathBuf, time::Duration};

use thiserror::Error;

use crate::services::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL, GeminiConfig};

pub const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub static_dir: PathBuf,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => v.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                expected: "a port number",
                value: v,
            })?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match get("GEMINI_TIMEOUT_SECS") {
            Some(v) => match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "GEMINI_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value: v,
                    });
                }
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            gemini: GeminiConfig {
                api_key: get("GEMINI_API_KEY").unwrap_or_default(),
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.api_base, DEFAULT_API_BASE);
        assert_eq!(config.gemini.timeout, Duration::from_secs(60));
        assert!(config.gemini.api_key.is_empty());
    }

    #[test]
    fn values_override_defaults() {
        let config = load(&[
            ("PORT", "8080"),
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_TIMEOUT_SECS", "5"),
            ("STATIC_DIR", "site"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.gemini.api_key, "secret");
        assert_eq!(config.gemini.model, "gemini-1.5-pro");
        assert_eq!(config.gemini.timeout, Duration::from_secs(5));
        assert_eq!(config.static_dir, PathBuf::from("site"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = load(&[("PORT", ""), ("GEMINI_MODEL", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
    }

    #[test]
    fn invalid_numbers_are_rejected() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("GEMINI_TIMEOUT_SECS", "0")]).is_err());
        assert!(load(&[("GEMINI_TIMEOUT_SECS", "soon")]).is_err());
    }
}
