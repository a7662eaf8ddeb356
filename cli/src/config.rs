//! Service configuration (TOML)
//!
//! Every section is optional:
//!
//! ```toml
//! [server]
//! listen_addr = "127.0.0.1:8080"
//! admin_token = "change-me"
//!
//! [storage]
//! data_file = "data/campaigns.json"
//!
//! [display]
//! currency = "idr"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Context, Result};
use economics::CurrencyFormat;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "agrofund.toml";

/// Overrides `server.admin_token`
pub const ADMIN_TOKEN_ENV: &str = "AGROFUND_ADMIN_TOKEN";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    pub admin_token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            admin_token: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON snapshot of all campaigns and reservations; in-memory only if unset
    pub data_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "idr".to_string(),
        }
    }
}

impl DisplayConfig {
    pub fn currency_format(&self) -> Result<CurrencyFormat> {
        CurrencyFormat::preset(&self.currency)
            .ok_or_else(|| anyhow!("unknown currency preset '{}'", self.currency))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid configuration")
    }

    /// An explicit path must exist. Without one, `agrofund.toml` is used if
    /// present and defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::read(fallback)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(token) = std::env::var(ADMIN_TOKEN_ENV) {
            if !token.is_empty() {
                config.server.admin_token = Some(token);
            }
        }

        Ok(config)
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();

        assert_eq!(config.server.listen_addr.port(), 8080);
        assert!(config.server.admin_token.is_none());
        assert!(config.storage.data_file.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.display.currency_format().unwrap(),
            CurrencyFormat::idr()
        );
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"
            [server]
            listen_addr = "0.0.0.0:9000"
            admin_token = "s3cret"

            [storage]
            data_file = "/var/lib/agrofund/campaigns.json"

            [display]
            currency = "usd"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr.to_string(), "0.0.0.0:9000");
        assert_eq!(config.server.admin_token.as_deref(), Some("s3cret"));
        assert_eq!(
            config.storage.data_file,
            Some(PathBuf::from("/var/lib/agrofund/campaigns.json"))
        );
        assert_eq!(
            config.display.currency_format().unwrap(),
            CurrencyFormat::usd()
        );
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_unknown_currency() {
        let config = Config::parse("[display]\ncurrency = \"eur\"").unwrap();
        assert!(config.display.currency_format().is_err());
    }

    #[test]
    fn test_bad_listen_addr() {
        assert!(Config::parse("[server]\nlisten_addr = \"nowhere\"").is_err());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());

        let path = dir.path().join("agrofund.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap().logging.level, "warn");
    }
}
