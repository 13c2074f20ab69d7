//! Configuration types and loading
//!
//! Config precedence: explicit path > `VIDAAS_CONFIG` env var > `vidaas.toml`.
//! `Config::load` resolves the client secret from the `VIDAAS_CLIENT_SECRET`
//! env var or `client_secret_file`. It is never stored in the TOML directly.

use std::path::{Path, PathBuf};

use common::Secret;
use serde::Deserialize;
use tracing::debug;

use crate::client::StatusPolicy;
use crate::credentials::ClientCredentials;

/// Env var holding the client secret
pub const CLIENT_SECRET_ENV: &str = "VIDAAS_CLIENT_SECRET";

/// Env var holding the config file path
pub const CONFIG_PATH_ENV: &str = "VIDAAS_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "vidaas.toml";

/// Root configuration
#[derive(Debug, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
}

/// Provider endpoint and transport settings
#[derive(Debug, Deserialize)]
pub struct ProviderConfig {
    pub base_uri: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub status_policy: StatusPolicy,
}

/// Registered application identity
#[derive(Debug, Deserialize)]
pub struct CredentialsConfig {
    pub client_id: String,
    #[serde(skip)]
    pub client_secret: Option<Secret<String>>,
    #[serde(default)]
    pub client_secret_file: Option<PathBuf>,
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file, then resolve the client secret.
    ///
    /// Secret resolution order:
    /// 1. `VIDAAS_CLIENT_SECRET` env var, when set and non-empty
    /// 2. `client_secret_file` path from config, trimmed; an empty file leaves
    ///    the secret unset
    pub fn load(path: &Path) -> common::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.resolve_client_secret()?;
        debug!(
            path = %path.display(),
            base_uri = %config.provider.base_uri,
            "loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    ///
    /// Reads neither the environment nor the filesystem, so the client
    /// secret is left unset. Use [`Config::load`] to get a resolved secret.
    pub fn parse(contents: &str) -> common::Result<Self> {
        let config: Config = toml::from_str(contents)?;

        if !config.provider.base_uri.starts_with("http://")
            && !config.provider.base_uri.starts_with("https://")
        {
            return Err(common::Error::Config(format!(
                "base_uri must start with http:// or https://, got: {}",
                config.provider.base_uri
            )));
        }

        if config.provider.timeout_secs == 0 {
            return Err(common::Error::Config(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(config)
    }

    fn resolve_client_secret(&mut self) -> common::Result<()> {
        let Some(credentials) = self.credentials.as_mut() else {
            return Ok(());
        };

        if let Some(secret) = std::env::var(CLIENT_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty())
        {
            debug!("client secret taken from {CLIENT_SECRET_ENV}");
            credentials.client_secret = Some(Secret::new(secret));
        } else if let Some(ref secret_file) = credentials.client_secret_file {
            let secret = std::fs::read_to_string(secret_file).map_err(|e| {
                common::Error::Config(format!(
                    "failed to read client_secret_file {}: {e}",
                    secret_file.display()
                ))
            })?;
            let secret = secret.trim().to_owned();
            if !secret.is_empty() {
                credentials.client_secret = Some(Secret::new(secret));
            }
        }

        Ok(())
    }

    /// Resolve config file path from an explicit argument or `VIDAAS_CONFIG`.
    pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
        if let Some(p) = explicit {
            return PathBuf::from(p);
        }
        if let Ok(p) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(p);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Client credentials, when both the id and a resolved secret are present.
    pub fn credentials(&self) -> Option<ClientCredentials> {
        let credentials = self.credentials.as_ref()?;
        let secret = credentials.client_secret.as_ref()?;
        Some(ClientCredentials {
            client_id: credentials.client_id.clone(),
            client_secret: secret.clone(),
        })
    }
}
