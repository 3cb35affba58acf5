use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::constants::output::DEFAULT_DIR_NAME;
use crate::constants::sizes::{DEFAULT_SIZES, MAX_SIZE, MIN_SIZE};

/// What to generate and where
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_DIR_NAME)
}

fn default_sizes() -> Vec<u32> {
    DEFAULT_SIZES.to_vec()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_dir: default_output_dir(),
            sizes: default_sizes(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        GeneratorConfig {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)
            .context("Failed to parse generator config")?;

        config.validate()?;

        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize generator config")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.as_os_str().is_empty() {
            bail!("output_dir cannot be empty");
        }

        if self.sizes.is_empty() {
            bail!("at least one icon size is required");
        }

        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
                bail!("icon size {} must be between {} and {}", size, MIN_SIZE, MAX_SIZE);
            }
            if !seen.insert(size) {
                bail!("icon size {} is listed more than once", size);
            }
        }

        Ok(())
    }
}
