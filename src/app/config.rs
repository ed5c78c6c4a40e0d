//! Application configuration
//!
//! Settings that shape how the binary runs, as opposed to what it builds.

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Directory config files are resolved against
    pub working_dir: PathBuf,
    /// Explicit config file, if any
    pub config_file: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            config_file: None,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_config_file(mut self, file: Option<PathBuf>) -> Self {
        self.config_file = file;
        self
    }

    /// Get the log filter based on verbosity. Stdout carries the generated
    /// command, so the quiet default only lets warnings through.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            config_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_follows_verbosity() {
        let levels: Vec<_> = (0..5)
            .map(|verbose| AppConfig { verbose, ..AppConfig::default() }.log_level())
            .collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_working_dir(PathBuf::from("/tmp/bench"))
            .with_config_file(Some(PathBuf::from("bench.toml")));
        assert_eq!(config.working_dir, PathBuf::from("/tmp/bench"));
        assert_eq!(config.config_file, Some(PathBuf::from("bench.toml")));
    }
}
