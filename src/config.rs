use crate::Convention;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".caseconv.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Conventions printed when no `--to` is given; empty means all of them
    pub default_targets: Vec<Convention>,

    pub remember_last_input: bool,

    pub show_detection: bool,

    pub show_tokens: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_targets: Vec::new(),
            remember_last_input: true,
            show_detection: true,
            show_tokens: false,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_targets: Vec<Convention>, show_tokens: bool, no_cache: bool) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!("Loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            tracing::debug!("Loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(&local_path)?);
        }

        if !cli_targets.is_empty() {
            config.default_targets = cli_targets;
        }
        if show_tokens {
            config.show_tokens = true;
        }
        if no_cache {
            config.remember_last_input = false;
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // other's values override self's if they differ from defaults
        let defaults = Self::default();
        if !other.default_targets.is_empty() {
            self.default_targets = other.default_targets;
        }
        if other.remember_last_input != defaults.remember_last_input {
            self.remember_last_input = other.remember_last_input;
        }
        if other.show_detection != defaults.show_detection {
            self.show_detection = other.show_detection;
        }
        if other.show_tokens != defaults.show_tokens {
            self.show_tokens = other.show_tokens;
        }
        self
    }

    /// Targets to render, falling back to every known convention.
    pub fn targets(&self) -> Vec<Convention> {
        if self.default_targets.is_empty() {
            Convention::ALL.to_vec()
        } else {
            self.default_targets.clone()
        }
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn cache_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "caseconv").map(|dirs| dirs.cache_dir().to_path_buf())
    }
}
