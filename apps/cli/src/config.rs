//! Client configuration.
//!
//! Configuration is stored as TOML:
//! - Linux: `~/.config/gigapdf/config.toml`
//! - Windows: `%APPDATA%/gigapdf/config.toml`
//!
//! A missing file is created with defaults. Command-line flags override
//! whatever the file says.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use gigapdf_protocol::UploadOptions;
use gigapdf_protocol::constants::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT};
use gigapdf_upload::{UploadConfig, Url};
use serde::{Deserialize, Serialize};

/// Client configuration.
///
/// Upload options sit at the top level of the file under their wire names
/// (`chunkSize`, `maxFileSize`, `acceptedMimeType`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Chunk upload endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds. Covers the final chunk, which waits
    /// for the whole document to be summarized.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(flatten)]
    pub options: UploadOptions,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.into()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_secs: default_request_timeout(),
            options: UploadOptions::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Loads configuration from `path`, or creates a default there if not found.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Saves the configuration to `path`.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        chunk_size: Option<u64>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(chunk_size) = chunk_size {
            self.options.chunk_size = chunk_size;
        }
        if let Some(timeout) = timeout_secs {
            self.request_timeout_secs = timeout;
        }
        self
    }

    pub fn endpoint_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.endpoint).with_context(|| format!("invalid endpoint {:?}", self.endpoint))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn upload_config(&self) -> anyhow::Result<UploadConfig> {
        Ok(UploadConfig::new(self.endpoint_url()?, self.options.clone()))
    }
}

/// Returns the platform-specific configuration file path.
pub fn config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        let appdata =
            std::env::var("APPDATA").unwrap_or_else(|_| "C:\\Users\\Default\\AppData".into());
        PathBuf::from(appdata).join("gigapdf").join("config.toml")
    }

    #[cfg(not(target_os = "windows"))]
    {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        PathBuf::from(home)
            .join(".config")
            .join("gigapdf")
            .join("config.toml")
    }
}
