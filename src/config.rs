use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::DEFAULT_PARALLEL_THRESHOLD;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Worker-thread override; `None` means use available parallelism.
    #[serde(default)]
    pub threads: Option<usize>,

    /// Inputs smaller than this many bytes are scanned single-threaded.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(threads: Option<usize>, parallel_threshold: Option<usize>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellmark.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if threads.is_some() {
            config.threads = threads;
        }
        if let Some(threshold) = parallel_threshold {
            config.parallel_threshold = threshold;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.parallel_threshold != default_parallel_threshold() {
            self.parallel_threshold = other.parallel_threshold;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellmark").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
