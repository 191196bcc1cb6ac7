// Runtime configuration read from the process environment.
//
// A `.env` file in the working directory is loaded first by the binary, so every key
// below can live there instead. Unset keys fall back to the defaults.

use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_EVENTS_FILE: &str = "Data/events.json";
pub const DEFAULT_REGISTRATIONS_FILE: &str = "Data/registration.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub events_file: PathBuf,
    pub registrations_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            events_file: PathBuf::from(DEFAULT_EVENTS_FILE),
            registrations_file: PathBuf::from(DEFAULT_REGISTRATIONS_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = match vars.get("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            host: vars.get("HOST").cloned().unwrap_or(defaults.host),
            port,
            events_file: vars
                .get("EVENTS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.events_file),
            registrations_file: vars
                .get("REGISTRATIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.registrations_file),
        })
    }

    /// `host:port`, resolved by the listener so host names work as well as IPs.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
