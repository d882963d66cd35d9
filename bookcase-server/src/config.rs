//! Process configuration from the environment.

use std::env;
use std::net::SocketAddr;

use bookcase_core::activity::DEFAULT_CAPACITY;
use thiserror::Error;

/// Startup configuration, read once by the process entry point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search service.
    pub elastic_url: String,
    /// Connection info for the activity history store.
    pub redis_url: String,
    /// Index holding the catalog.
    pub books_index: String,
    /// Records kept per user key.
    pub activity_capacity: usize,
    /// Listen address.
    pub bind_addr: SocketAddr,
}

/// Error raised for a malformed configuration value.
///
/// Raised at startup; a bad value never travels into a handler.
#[derive(Debug, Error)]
#[error("invalid value for {name}: '{value}'")]
pub struct ConfigError {
    /// Name of the offending environment variable.
    pub name: &'static str,
    /// The rejected value.
    pub value: String,
}

impl Config {
    /// Read configuration from the environment, with defaults suitable for
    /// local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        let activity_capacity = match env::var("ACTIVITY_CAPACITY") {
            Ok(value) => value
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity >= 1)
                .ok_or(ConfigError {
                    name: "ACTIVITY_CAPACITY",
                    value,
                })?,
            Err(_) => DEFAULT_CAPACITY,
        };

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(value) => value.parse().map_err(|_| ConfigError {
                name: "BIND_ADDR",
                value,
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        Ok(Self {
            elastic_url: var_or("ELASTIC_URL", "http://127.0.0.1:9200"),
            redis_url: var_or("REDIS_URL", "redis://127.0.0.1/"),
            books_index: var_or("BOOKS_INDEX", "books"),
            activity_capacity,
            bind_addr,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}
