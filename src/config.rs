use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default)]
    pub state: StateConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    /// Root URL of the DocChat backend, e.g. http://localhost:8000
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request client timeout; also bounds how long the elapsed-time
    /// display can keep running on a request that never resolves
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UploadConfig {
    /// Maximum size of a single uploaded file, in megabytes
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// File extensions the backend accepts (with leading dot)
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

fn default_max_file_size_mb() -> u64 {
    50
}

fn default_allowed_types() -> Vec<String> {
    vec![
        ".txt".to_string(),
        ".pdf".to_string(),
        ".docx".to_string(),
        ".md".to_string(),
    ]
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            allowed_types: default_allowed_types(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateConfig {
    /// Optional override for state directory (for testing)
    pub state_dir_override: Option<PathBuf>,
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("Backend base_url must not be empty");
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "Backend base_url '{}' must start with http:// or https://",
                self.base_url
            );
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("Backend timeout_secs must be greater than 0");
        }
        Ok(())
    }
}

impl UploadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size_mb == 0 {
            anyhow::bail!("Upload max_file_size_mb must be greater than 0");
        }
        if self.allowed_types.is_empty() {
            anyhow::bail!("Upload allowed_types must not be empty");
        }
        for ext in &self.allowed_types {
            if !ext.starts_with('.') {
                anyhow::bail!("Allowed type '{}' must start with a dot", ext);
            }
        }
        Ok(())
    }

    /// Maximum upload size in bytes.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.backend.validate()?;
        self.upload.validate()?;
        Ok(())
    }
}

/// Canonical config file location: ~/.docchat/config.toml
pub fn config_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".docchat");
    Ok(config_dir.join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    let config = load_from_path(&config_path)?;

    // Validate configuration
    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
