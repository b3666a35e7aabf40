//! # CLI Configuration
//!
//! Optional YAML file supplying defaults for output flags. Every field is
//! optional; command-line flags win over the file.
//!
//! ```yaml
//! formatted: false
//! count: 5
//! json: true
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Defaults loaded from `--config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Print generated documents with punctuation.
    pub formatted: bool,
    /// Number of documents `generate` prints.
    pub count: usize,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            formatted: true,
            count: 1,
            json: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("invalid YAML in {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from YAML text. An empty document yields the
    /// defaults.
    pub fn parse(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
