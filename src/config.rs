use std::{env, time::Duration};

use anyhow::{Context, Result};

use crate::store::DEFAULT_DELAY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            delay: DEFAULT_DELAY,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads `APP_HOST`, `APP_PORT` and `RECORD_DELAY_MS` through `lookup`,
    /// falling back to the defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let host = lookup("APP_HOST").unwrap_or(defaults.host);

        let port = match lookup("APP_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("APP_PORT must be a valid u16")?,
            None => defaults.port,
        };

        let delay = match lookup("RECORD_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .context("RECORD_DELAY_MS must be a whole number of milliseconds")?,
            None => defaults.delay,
        };

        Ok(Self { host, port, delay })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
