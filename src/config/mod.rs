//! Application configuration, loaded once at process start and validated
//! eagerly so a misconfigured deployment fails before serving traffic.

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::DomainError;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub gemini: GeminiConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Gemini API settings. The key may come from `APP__GEMINI__API_KEY` or,
/// matching the original deployment convention, plain `GEMINI_API_KEY`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
    /// Override for tests and proxies; defaults to the public endpoint.
    pub base_url: Option<String>,
}

/// Locations and suffix filters for the read-only content directories.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub chapters_dir: PathBuf,
    pub chapter_suffix: String,
    pub images_dir: PathBuf,
    pub image_suffix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash".to_string(),
            timeout_secs: 60,
            base_url: None,
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            chapters_dir: PathBuf::from("chapters"),
            chapter_suffix: "_extracted.txt".to_string(),
            images_dir: PathBuf::from("images"),
            image_suffix: ".png".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: AppConfig = config.try_deserialize()?;

        if config.gemini.api_key.is_empty() {
            if let Ok(key) = std::env::var("GEMINI_API_KEY") {
                config.gemini.api_key = key;
            }
        }

        Ok(config)
    }

    /// Fail fast on anything that would make every request fail anyway:
    /// missing API key, missing content directories.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.gemini.api_key.is_empty() {
            return Err(DomainError::configuration(
                "GEMINI_API_KEY is not configured. Create a .env file and add the key.",
            ));
        }

        if !self.corpus.chapters_dir.is_dir() {
            return Err(DomainError::configuration(format!(
                "Chapters directory does not exist: {}",
                self.corpus.chapters_dir.display()
            )));
        }

        if !self.corpus.images_dir.is_dir() {
            return Err(DomainError::configuration(format!(
                "Images directory does not exist: {}",
                self.corpus.images_dir.display()
            )));
        }

        Ok(())
    }
}
