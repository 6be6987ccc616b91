use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{ForgeError, Result};
use crate::scoring::ScoringTables;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    pub analyzer: AnalyzerConfig,
    pub generator: GeneratorConfig,
    pub scoring: ScoringTables,
    pub service: HttpServiceConfig,
}

impl ForgeConfig {
    pub async fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join("config.toml");
        let config = if config_path.exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub async fn save(&self, config_dir: &Path) -> Result<()> {
        self.validate()?;
        fs::create_dir_all(config_dir).await?;
        let config_path = config_dir.join("config.toml");
        let content =
            toml::to_string_pretty(self).map_err(|e| ForgeError::Config(e.to_string()))?;
        fs::write(&config_path, content).await?;
        Ok(())
    }

    /// Validate configuration values for consistency and safety.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        // Analyzer validation
        if self.analyzer.max_scan_chars == 0 {
            errors.push("analyzer.max_scan_chars must be greater than 0".to_string());
        }
        if self.analyzer.max_advantages == 0 {
            errors.push("analyzer.max_advantages must be greater than 0".to_string());
        }
        if self.analyzer.max_advantage_chars == 0 {
            errors.push("analyzer.max_advantage_chars must be greater than 0".to_string());
        }
        if self.analyzer.max_matches_per_pattern == 0 {
            errors.push("analyzer.max_matches_per_pattern must be greater than 0".to_string());
        }

        // Generator validation
        if self.generator.request_timeout_secs == 0 {
            errors.push("generator.request_timeout_secs must be greater than 0".to_string());
        }

        // Service validation
        if self.service.endpoint.trim().is_empty() {
            errors.push("service.endpoint must not be empty".to_string());
        }
        if self.service.connect_timeout_secs == 0 {
            errors.push("service.connect_timeout_secs must be greater than 0".to_string());
        }

        // Scoring table validation
        errors.extend(self.scoring.validate());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ForgeError::Config(format!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Upper bound on the characters scanned for keywords and patterns.
    pub max_scan_chars: usize,
    /// Maximum extracted competitive advantages per description.
    pub max_advantages: usize,
    /// Each advantage entry is clipped to this many characters.
    pub max_advantage_chars: usize,
    /// Matches taken per advantage pattern before moving on.
    pub max_matches_per_pattern: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_scan_chars: 5000,
            max_advantages: 10,
            max_advantage_chars: 100,
            max_matches_per_pattern: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Per-variant timeout in seconds; an expired call yields a fallback
    /// candidate instead of failing the batch (default: 120).
    pub request_timeout_secs: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpServiceConfig {
    /// Generation endpoint receiving the JSON request body.
    pub endpoint: String,
    /// TCP connect timeout in seconds (default: 10).
    pub connect_timeout_secs: u64,
}

impl Default for HttpServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://127.0.0.1:8787/generate"),
            connect_timeout_secs: 10,
        }
    }
}
