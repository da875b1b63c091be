use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "script-browser";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Development,
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "production" | "prod" => Ok(Environment::Production),
            "development" | "dev" => Ok(Environment::Development),
            _ => bail!("invalid environment: {} (expected production or development)", s),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub environment: Environment,
    #[serde(default = "default_production_base_path")]
    pub production_base_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://community-scripts.github.io".to_string()
}

fn default_production_base_path() -> String {
    "/ProxmoxVE".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            environment: Environment::default(),
            production_base_path: default_production_base_path(),
            request_timeout_secs: None,
        }
    }
}

impl SourceConfig {
    pub fn base_path(&self) -> &str {
        match self.environment {
            Environment::Production => &self.production_base_path,
            Environment::Development => "",
        }
    }

    /// Site root that routes and API paths hang off.
    pub fn site_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.base_path())
    }

    pub fn categories_url(&self) -> String {
        format!("{}/api/categories", self.site_url())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigatorKind {
    #[default]
    Browser,
    Print,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub navigator: NavigatorKind,
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            navigator: NavigatorKind::default(),
            color: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LogConfig {
    pub fn file_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| Config::data_dir().join("script-browser.log"))
    }
}

impl Config {
    pub const KEYS: &'static [&'static str] = &[
        "source.base_url",
        "source.environment",
        "source.production_base_path",
        "source.request_timeout_secs",
        "ui.navigator",
        "ui.color",
        "log.level",
        "log.file",
    ];

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Updates one dotted key. Empty values clear optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "source.base_url" => self.source.base_url = value.to_string(),
            "source.environment" => self.source.environment = value.parse()?,
            "source.production_base_path" => self.source.production_base_path = value.to_string(),
            "source.request_timeout_secs" => {
                self.source.request_timeout_secs = if value.is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                }
            }
            "ui.navigator" => {
                self.ui.navigator = match value {
                    "browser" => NavigatorKind::Browser,
                    "print" => NavigatorKind::Print,
                    _ => bail!("invalid navigator: {} (expected browser or print)", value),
                }
            }
            "ui.color" => self.ui.color = value.parse()?,
            "log.level" => self.log.level = value.to_string(),
            "log.file" => {
                self.log.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            _ => bail!(
                "unknown key: {} (available keys: {})",
                key,
                Self::KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
