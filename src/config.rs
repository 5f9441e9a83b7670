use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable consulted when the config file leaves `ui.delay_ms` unset.
pub const DELAY_ENV_VAR: &str = "SQL_RISK_DELAY_MS";

/// Config file looked up in the current directory.
pub const CONFIG_FILE: &str = ".sql-risk.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration loaded from .sql-risk.toml.
/// All fields are optional; the tool works with zero config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Interactive presentation settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Report output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Cosmetic pause before analysis, in milliseconds.
    pub delay_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Default stdout format when --format is not given.
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable report
    #[default]
    Terminal,
    /// Pretty-printed JSON
    Json,
}

impl Config {
    /// Load configuration from .sql-risk.toml in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Config, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load from a specific path (useful for testing).
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Effective pre-analysis delay: config file value, then
    /// SQL_RISK_DELAY_MS, then zero.
    pub fn delay(&self) -> Duration {
        resolve_delay(self.ui.delay_ms, std::env::var(DELAY_ENV_VAR).ok())
    }

    pub fn format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }
}

fn resolve_delay(configured: Option<u64>, env_value: Option<String>) -> Duration {
    let millis = configured
        .or_else(|| {
            let raw = env_value?;
            match raw.trim().parse() {
                Ok(ms) => Some(ms),
                Err(err) => {
                    warn!(var = DELAY_ENV_VAR, value = %raw, error = %err, "ignoring unparsable delay");
                    None
                }
            }
        })
        .unwrap_or(0);
    Duration::from_millis(millis)
}
