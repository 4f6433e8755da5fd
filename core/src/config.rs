/// Configuration for the Merchdesk dashboard.
/// Handles loading and parsing of .merchdesk/dashboard.toml
use crate::errors::{AdsApiError, AdsApiResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Top-level configuration structure for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Meta Graph API settings
    #[serde(default)]
    pub api: GraphApiConfig,

    /// Ads Manager screen settings
    #[serde(default)]
    pub ads: AdsScreenConfig,

    /// Logging and observability settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: GraphApiConfig::default(),
            ads: AdsScreenConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Meta Graph API endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphApiConfig {
    /// Base URL of the Graph API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API version path segment
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Ad account id, `act_` prefix included
    #[serde(default)]
    pub ad_account_id: String,

    /// Environment variable holding the access token
    #[serde(default = "default_token_env")]
    pub access_token_env: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://graph.facebook.com".to_string()
}

fn default_api_version() -> String {
    "v21.0".to_string()
}

fn default_token_env() -> String {
    "META_ACCESS_TOKEN".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for GraphApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_version: default_api_version(),
            ad_account_id: String::new(),
            access_token_env: default_token_env(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Ads Manager screen settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdsScreenConfig {
    /// Page size requested per entity level
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Snapshot refresh interval in seconds
    #[serde(default = "default_refresh_secs")]
    pub refresh_interval_secs: u64,
}

fn default_page_size() -> u32 {
    200
}

fn default_refresh_secs() -> u64 {
    60
}

impl Default for AdsScreenConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            refresh_interval_secs: default_refresh_secs(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// tracing env-filter directive
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "merchdesk_gui=debug,info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl DashboardConfig {
    /// Default config path: `<config dir>/.merchdesk/dashboard.toml`, falling
    /// back to the current directory when no config dir can be resolved.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".merchdesk")
            .join("dashboard.toml")
    }

    /// Load from an explicit path.
    pub fn load(path: &Path) -> AdsApiResult<Self> {
        debug!("Loading dashboard config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default path, or fall back to defaults when the file
    /// does not exist.
    pub fn load_or_default() -> AdsApiResult<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            info!("No dashboard config found, using defaults");
            Ok(Self::default())
        }
    }

    fn validate(&self) -> AdsApiResult<()> {
        if self.api.base_url.is_empty() {
            return Err(AdsApiError::ConfigError("api.base_url is empty".into()));
        }
        if self.ads.page_size == 0 {
            return Err(AdsApiError::ConfigError("ads.page_size must be > 0".into()));
        }
        Ok(())
    }
}
