use std::env;
use std::path::PathBuf;

use serde::Deserialize;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Snapshot storage settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "booking_system=debug".to_string()),
            },
            storage: StorageConfig {
                data_file: env::var("DATA_FILE")
                    .unwrap_or_else(|_| "./.data".to_string())
                    .into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let config = Config::from_env();
        if env::var("DATA_FILE").is_err() {
            assert_eq!(config.storage.data_file, PathBuf::from("./.data"));
        }
        if env::var("RUST_LOG").is_err() {
            assert_eq!(config.app.rust_log, "booking_system=debug");
        }
    }
}
