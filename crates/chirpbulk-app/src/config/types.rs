//! Configuration types for chirpbulk
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `ServerSettings` - ChirpStack endpoint
//! - `ImportSettings` - CSV file browser behavior

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use chirpbulk_api::DEFAULT_SERVER_ADDRESS;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub import: ImportSettings,
}

/// ChirpStack endpoint settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// gRPC address as host:port, dialed without TLS
    #[serde(default = "default_address")]
    pub address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            address: default_address(),
        }
    }
}

fn default_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

/// File browser settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ImportSettings {
    /// Directory the file browser opens in (defaults to the home directory)
    #[serde(default)]
    pub start_dir: Option<PathBuf>,

    /// Show dot-files in the file browser
    #[serde(default)]
    pub show_hidden: bool,
}

impl ImportSettings {
    /// Start directory with fallbacks: configured dir, home, current dir
    pub fn resolved_start_dir(&self) -> PathBuf {
        self.start_dir
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
