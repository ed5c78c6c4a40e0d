use super::BenchConfig;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "narwhal-bench.toml";

pub struct ConfigLoader {
    working_dir: PathBuf,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
        }
    }

    /// Load `explicit` if given (it must exist), otherwise the default file
    /// when present, otherwise built-in defaults. Environment overrides are
    /// applied last.
    pub fn load(&self, explicit: Option<&Path>) -> Result<BenchConfig> {
        let mut config = match explicit {
            Some(path) => Self::load_file(&self.working_dir.join(path))?,
            None => {
                let default_path = self.working_dir.join(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load_file(&default_path)?
                } else {
                    debug!("No config file found, using defaults");
                    BenchConfig::default()
                }
            }
        };

        config.merge_env_vars();
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<BenchConfig> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: BenchConfig = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}
