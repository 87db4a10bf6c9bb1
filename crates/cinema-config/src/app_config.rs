//! Application configuration
//!
//! Configuration loaded from .cinema.toml, with environment overrides.

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`AppConfig::api_base_url`]
pub const API_URL_ENV: &str = "CINEMA_API_URL";

/// Application configuration loaded from .cinema.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long a popup stays visible before it hides itself
    #[serde(default = "default_popup_duration_ms")]
    pub popup_duration_ms: u64,

    /// Path the router navigates to when no other path is given
    #[serde(default = "default_start_path")]
    pub start_path: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_popup_duration_ms() -> u64 {
    2500
}

fn default_start_path() -> String {
    "/".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            popup_duration_ms: default_popup_duration_ms(),
            start_path: default_start_path(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    ///
    /// `CINEMA_API_URL` wins over whatever the file says.
    pub fn load() -> Self {
        let config = match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        };
        config.with_env_overrides()
    }

    fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                log::info!("Using API base URL from {}: {}", API_URL_ENV, url);
                self.api_base_url = url;
            }
        }
        self
    }
}
