use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LogConfig {
    /// Log file path, if not set, logs will be printed to stdout
    pub file: Option<String>,
    /// Log level, default is "info"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

/// todosheet configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// HTTP listening address
    #[serde(default = "default_server_addr")]
    pub server_addr: String,

    /// Path of the workbook file holding the todo list
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Directory the browser client is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Base URL, used only for the startup log line
    #[serde(default)]
    pub base_url: Option<String>,

    /// Log configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_server_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_data_file() -> String {
    "todolist.xlsx".to_string()
}

fn default_static_dir() -> String {
    "static".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: default_server_addr(),
            data_file: default_data_file(),
            static_dir: default_static_dir(),
            base_url: None,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file '{}'", path))?;

        Ok(config)
    }

    /// URL announced in the startup log line. Falls back to localhost plus
    /// the configured port when no base_url is set.
    pub fn startup_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => {
                let port = self
                    .server_addr
                    .rsplit(':')
                    .next()
                    .unwrap_or("3000");
                format!("http://localhost:{}", port)
            }
        }
    }
}
