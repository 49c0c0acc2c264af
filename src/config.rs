use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";
pub const DEFAULT_GREETING: &str = "Hello! I am the Q&A bot. Try: start guided Q&A";
pub const DEFAULT_GREETING_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default = "default_greeting_delay_ms")]
    pub greeting_delay_ms: u64,
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_greeting_delay_ms() -> u64 {
    DEFAULT_GREETING_DELAY_MS
}

fn default_window_title() -> String {
    "Rust Q&A Chat".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            greeting: default_greeting(),
            greeting_delay_ms: default_greeting_delay_ms(),
            window_title: default_window_title(),
        }
    }
}

impl AppConfig {
    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }

    /// Parses `endpoint`, rejecting anything that is not http(s).
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(self.endpoint.trim())
            .map_err(|err| AppError::Config(format!("invalid endpoint `{}`: {err}", self.endpoint)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::Config(format!(
                "endpoint `{}` must use http or https, not `{other}`",
                self.endpoint
            ))),
        }
    }
}

/// Đọc file cấu hình; thiếu file hoặc lỗi parse thì dùng mặc định.
pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No config at {}; using defaults", path.display());
            return AppConfig::default();
        }
        Err(err) => {
            log::warn!("Cannot read config {} ({err}); using defaults", path.display());
            return AppConfig::default();
        }
    };

    serde_json::from_str::<AppConfig>(&content).unwrap_or_else(|err| {
        log::warn!("Invalid config {} ({err}); using defaults", path.display());
        AppConfig::default()
    })
}

/// Ghi cấu hình ra file JSON, tạo thư mục cha nếu chưa có.
pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}
