use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Overrides the cache directory, mostly for tests and sandboxes.
pub const CACHE_DIR_ENV: &str = "CASECONV_CACHE_DIR";

const LAST_INPUT_FILE: &str = "last_input.txt";

/// On-disk slot holding the most recent input.
pub struct LastInput {
    path: PathBuf,
}

impl LastInput {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under `$CASECONV_CACHE_DIR` or the platform cache directory.
    pub fn open_default() -> Result<Self> {
        let dir = match std::env::var_os(CACHE_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => Config::cache_dir().context("Failed to get cache directory")?,
        };
        Ok(Self::new(dir.join(LAST_INPUT_FILE)))
    }

    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let input = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read cached input: {}", self.path.display()))?;
        tracing::debug!("Loaded last input from {}", self.path.display());
        Ok(Some(input))
    }

    pub fn save(&self, input: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create cache directory")?;
        }
        fs::write(&self.path, input)
            .with_context(|| format!("Failed to write cached input: {}", self.path.display()))?;
        tracing::debug!("Saved last input to {}", self.path.display());
        Ok(())
    }
}
