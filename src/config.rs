//! Configuration management for Fingermark

use crate::{Error, Result};
use serde::Deserialize;
use std::env;

/// Agent configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Path of the JSON state file holding the persisted fingerprint ID
    pub state_path: String,

    /// Endpoint the agent binary sends its tagged smoke request to
    pub endpoint: String,

    /// User agent advertised in the signal set and on outbound requests
    pub user_agent: Option<String>,

    /// Declared screen dimensions, "WIDTHxHEIGHT"
    pub screen: Option<String>,

    /// Declared color depth in bits
    pub color_depth: Option<u32>,

    /// Path of an image file used as the canvas rendering snapshot
    pub canvas_snapshot_path: Option<String>,

    /// Declared WebGL vendor string
    pub webgl_vendor: Option<String>,

    /// Declared WebGL renderer string
    pub webgl_renderer: Option<String>,

    /// Whether injected headers replace caller-set headers of the same name
    pub overwrite_headers: bool,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_path: ".fingermark/state.json".to_string(),
            endpoint: "http://127.0.0.1:8080/ping".to_string(),
            user_agent: None,
            screen: None,
            color_depth: None,
            canvas_snapshot_path: None,
            webgl_vendor: None,
            webgl_renderer: None,
            overwrite_headers: true,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(state_path) = env::var("FINGERMARK_STATE_PATH") {
            config.state_path = state_path;
        }

        if let Ok(endpoint) = env::var("FINGERMARK_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(user_agent) = env::var("FINGERMARK_USER_AGENT") {
            config.user_agent = Some(user_agent);
        }

        if let Ok(screen) = env::var("FINGERMARK_SCREEN") {
            config.screen = Some(screen);
        }

        if let Ok(depth) = env::var("FINGERMARK_COLOR_DEPTH") {
            config.color_depth = Some(
                depth
                    .parse()
                    .map_err(|_| Error::configuration("Invalid FINGERMARK_COLOR_DEPTH"))?,
            );
        }

        if let Ok(path) = env::var("FINGERMARK_CANVAS_SNAPSHOT") {
            config.canvas_snapshot_path = Some(path);
        }

        if let Ok(vendor) = env::var("FINGERMARK_WEBGL_VENDOR") {
            config.webgl_vendor = Some(vendor);
        }

        if let Ok(renderer) = env::var("FINGERMARK_WEBGL_RENDERER") {
            config.webgl_renderer = Some(renderer);
        }

        if let Ok(overwrite) = env::var("FINGERMARK_OVERWRITE_HEADERS") {
            config.overwrite_headers = overwrite
                .parse()
                .map_err(|_| Error::configuration("Invalid FINGERMARK_OVERWRITE_HEADERS"))?;
        }

        if let Ok(log_level) = env::var("FINGERMARK_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }
}
