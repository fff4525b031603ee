use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: CREDITKARMA_TOKEN is not set")]
    MissingToken,
    #[error("Config error: {key} has an invalid numeric value [{value}]")]
    InvalidNumber {
        key: &'static str,
        value: String
    },
    #[error("Config error: {key} must be greater than zero")]
    ZeroLimit {
        key: &'static str
    },
    #[error("Config error: {} could not be read: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error
    }
}
