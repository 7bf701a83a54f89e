use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Image analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Website fetching settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// HTTP server settings
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to listen on (overridden by BIND_ADDR)
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

/// Image analysis settings
#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// Uploaded images are resampled to size x size before counting colors
    #[serde(default = "default_analysis_size")]
    pub size: u32,

    /// Number of dominant colors returned when the request does not say
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Largest accepted upload in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Largest accepted canvas (width x height), checked before decoding
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            size: default_analysis_size(),
            top_n: default_top_n(),
            max_upload_bytes: default_max_upload_bytes(),
            max_pixels: default_max_pixels(),
        }
    }
}

fn default_analysis_size() -> u32 {
    100
}

fn default_top_n() -> usize {
    color_engine::DEFAULT_TOP_N
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

fn default_max_pixels() -> u64 {
    crate::services::image_decoder::DEFAULT_MAX_PIXELS
}

/// Website fetching settings
#[derive(Debug, Deserialize, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with page requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of distinct colors taken from one page
    #[serde(default = "default_max_colors")]
    pub max_colors: usize,

    /// Largest page body read, in bytes
    #[serde(default = "default_max_page_bytes")]
    pub max_page_bytes: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_colors: default_max_colors(),
            max_page_bytes: default_max_page_bytes(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("hueguard/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_max_colors() -> usize {
    50
}

fn default_max_page_bytes() -> usize {
    2 * 1024 * 1024 // 2 MiB
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        bind_addr = %config.server.bind_addr,
                        analysis_size = config.analysis.size,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from CONFIG_FILE and apply the BIND_ADDR override
    pub fn from_env() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
        let mut config = Self::load(config_file.as_deref());
        if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
            config.server.bind_addr = bind_addr;
        }
        config
    }
}
