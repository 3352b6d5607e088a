use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "medimetrics.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // How successful conversions are rendered
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Decimal places in the formatted result
    #[serde(default = "default_precision")]
    pub precision: usize,

    // Text placed before the formatted value
    #[serde(default = "default_label")]
    pub label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            label: default_label(),
        }
    }
}

fn default_precision() -> usize {
    4
}

fn default_label() -> String {
    "Result: ".to_string()
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load an explicitly requested file, or fall back to `medimetrics.toml`
    /// in `dir` when present. A broken fallback file is skipped with a warning.
    pub fn discover<P: AsRef<Path>>(
        explicit: Option<&Path>,
        dir: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = explicit {
            return Self::load_from_file(path)
                .map_err(|e| format!("Failed to load config {}: {}", path.display(), e).into());
        }

        let fallback = dir.as_ref().join(DEFAULT_CONFIG_FILE);
        if !fallback.exists() {
            return Ok(Self::empty());
        }

        match Self::load_from_file(&fallback) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("Ignoring {}: {}", fallback.display(), e);
                Ok(Self::empty())
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}
