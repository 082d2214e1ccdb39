//! Runtime configuration
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary). Every key has a default so the shop runs with no
//! configuration at all.

use crate::error::ConfigError;
use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};
use tracing::Level;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PAYMENT_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the HTML pages and the css/images/js assets.
    pub public_dir: PathBuf,
    /// How long a simulated payment takes before the cart is cleared.
    pub payment_delay: Duration,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            public_dir: locate_public_directory(&current_dir),
            payment_delay: DEFAULT_PAYMENT_DELAY,
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT`, `PUBLIC_DIR`, `PAYMENT_DELAY_MS` and `LOG_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = parse_var(&lookup, "PORT")? {
            config.port = port;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            config.public_dir = PathBuf::from(dir);
        }
        if let Some(millis) = parse_var::<u64>(&lookup, "PAYMENT_DELAY_MS")? {
            config.payment_delay = Duration::from_millis(millis);
        }
        if let Some(level) = parse_var(&lookup, "LOG_LEVEL")? {
            config.log_level = level;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Looks for `public/` next to the working directory, then one level up,
/// falling back to the relative path.
fn locate_public_directory(current_dir: &Path) -> PathBuf {
    if current_dir.join("public").exists() {
        return current_dir.join("public");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("public").exists() {
            return parent.join("public");
        }
    }

    PathBuf::from("public")
}
