use crate::domain::error::FetchError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_true")]
    pub numbered: bool,
    #[serde(default = "default_true")]
    pub enable_emoji: bool,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub paths: Paths,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Paths {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_missing")]
    pub missing: PathBuf,
    #[serde(default = "default_img_dir")]
    pub img_dir: PathBuf,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            missing: default_missing(),
            img_dir: default_img_dir(),
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            delay_ms: default_delay_ms(),
            numbered: true,
            enable_emoji: true,
            user_agent: default_user_agent(),
            paths: Paths::default(),
            logging: Logging::default(),
        }
    }
}

impl Logging {
    /// Filter directive for the configured level, e.g. `WARN` -> `warn`.
    pub fn directive(&self) -> String {
        match self.level.trim() {
            "" => "warn".to_string(),
            level => level.to_lowercase(),
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

// Defaults
fn default_base_url() -> String {
    "https://api.aanime.tv".to_string()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_delay_ms() -> u64 {
    200
}
fn default_true() -> bool {
    true
}
fn default_user_agent() -> String {
    format!("kanji-fetch/{}", env!("CARGO_PKG_VERSION"))
}
fn default_input() -> PathBuf {
    PathBuf::from("2136kanji.json")
}
fn default_output() -> PathBuf {
    PathBuf::from("output.json")
}
fn default_missing() -> PathBuf {
    PathBuf::from("missing.json")
}
fn default_img_dir() -> PathBuf {
    PathBuf::from("img")
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("kanji-fetch").join("config.toml"))
}

pub fn parse_config(content: &str) -> Result<Config, FetchError> {
    Ok(toml::from_str::<Config>(content)?)
}

/// Load the configuration.
///
/// An explicitly requested file must exist and parse. The default location is
/// optional and falls back to defaults with a warning when it is broken.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, FetchError> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|e| {
            FetchError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;
        return parse_config(&content);
    }

    if let Some(path) = get_config_path() {
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            match parse_config(&content) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    eprintln!(
                        "Warning: Failed to parse config file: {}. Using defaults.",
                        e
                    );
                }
            }
        }
    }

    Ok(Config::default())
}

pub fn generate_config_sample() -> Result<(), FetchError> {
    let path = get_config_path().ok_or_else(|| {
        FetchError::Config("Cannot determine config directory".to_string())
    })?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let toml_content = toml::to_string_pretty(&Config::default())
        .map_err(|e| FetchError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(&path, toml_content)
        .map_err(|e| FetchError::Config(format!("Failed to write config file: {}", e)))?;
    println!("Generated config file at: {}", path.display());

    Ok(())
}
