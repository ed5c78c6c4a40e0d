use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};

pub const ENV_JWT_SECRET: &str = "NARWHAL_BENCH_JWT_SECRET";
pub const ENV_MNEMONIC: &str = "NARWHAL_BENCH_MNEMONIC";

/// Defaults for the values the command line does not spell out.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BenchConfig {
    pub client: ClientConfig,
    pub rpc: RpcConfig,
    pub binaries: BinariesConfig,
}

/// Load generator workload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// Transaction size in bytes
    pub size: i64,
    /// Transactions sent back to back per tick
    pub burst: i64,
    /// Transactions per second
    pub rate: i64,
    /// Addresses the client waits for before sending
    pub nodes: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            size: 512,
            burst: 50,
            rate: 50_000,
            nodes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RpcConfig {
    pub jwt_secret: Option<String>,
    pub mnemonic: Option<String>,
    pub transactions: i64,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            mnemonic: None,
            transactions: 1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BinariesConfig {
    /// Directory holding the release binaries to alias
    pub origin: Option<PathBuf>,
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_env_with(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn merge_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(secret) = lookup(ENV_JWT_SECRET) {
            self.rpc.jwt_secret = Some(secret);
        }

        if let Some(mnemonic) = lookup(ENV_MNEMONIC) {
            self.rpc.mnemonic = Some(mnemonic);
        }
    }

    pub fn binary_origin(&self) -> PathBuf {
        self.binaries
            .origin
            .clone()
            .unwrap_or_else(crate::commands::PathMaker::binary_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::new();
        assert_eq!(config.client.size, 512);
        assert_eq!(config.client.burst, 50);
        assert_eq!(config.client.rate, 50_000);
        assert!(config.client.nodes.is_empty());
        assert_eq!(config.rpc.transactions, 1_000);
        assert_eq!(config.binary_origin(), PathBuf::from("../target/release"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: BenchConfig = toml::from_str(
            r#"
            [client]
            rate = 1000
            "#,
        )
        .unwrap();

        assert_eq!(config.client.rate, 1000);
        assert_eq!(config.client.size, 512);
        assert_eq!(config.rpc, RpcConfig::default());
    }

    #[test]
    fn test_env_overrides_file_credentials() {
        let mut config: BenchConfig = toml::from_str(
            r#"
            [rpc]
            jwt_secret = "from-file"
            mnemonic = "file words"
            "#,
        )
        .unwrap();

        config.merge_env_with(|key| (key == ENV_JWT_SECRET).then(|| "from-env".to_string()));

        assert_eq!(config.rpc.jwt_secret.as_deref(), Some("from-env"));
        assert_eq!(config.rpc.mnemonic.as_deref(), Some("file words"));
    }

    #[test]
    fn test_binary_origin_from_file() {
        let config: BenchConfig = toml::from_str(
            r#"
            [binaries]
            origin = "/opt/narwhal/release"
            "#,
        )
        .unwrap();
        assert_eq!(config.binary_origin(), PathBuf::from("/opt/narwhal/release"));
    }
}
