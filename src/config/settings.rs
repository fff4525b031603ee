use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::config::errors::ConfigError;
use crate::config::{DEFAULT_API_URL, DEFAULT_HELP_MESSAGE, ENV_FILE, TRANSACTIONS_QUERY};

const TOKEN: &str = "CREDITKARMA_TOKEN";
const START_CURSOR: &str = "CREDITKARMA_START_CURSOR";
const HELP_MESSAGE: &str = "CREDITKARMA_HELP_MESSAGE";
const API_URL: &str = "CREDITKARMA_API_URL";
const OUTPUT_DIR: &str = "CREDITKARMA_OUTPUT_DIR";
const MAX_PAGES: &str = "CREDITKARMA_MAX_PAGES";
const DEADLINE_SECS: &str = "CREDITKARMA_DEADLINE_SECS";
const TIMEOUT_SECS: &str = "CREDITKARMA_TIMEOUT_SECS";

/// Run configuration, resolved once at start-up and handed to the fetcher and the driver.
#[derive(Debug, Clone)]
pub struct Settings {
    /// GraphQL endpoint receiving the page requests.
    pub api_url: String,
    /// Bearer access token.
    pub token: String,
    /// Cursor to resume from. `None` starts at the first page.
    pub start_cursor: Option<String>,
    /// Guidance appended to authentication diagnostics.
    pub help_message: String,
    /// Directory holding the CSV and JSON outputs.
    pub output_dir: PathBuf,
    /// Stop after this many pages.
    pub max_pages: Option<usize>,
    /// Stop once this much wall-clock time has elapsed.
    pub deadline: Option<Duration>,
    /// Per-request HTTP timeout.
    pub request_timeout: Option<Duration>,
    /// GraphQL document for the transactions page.
    pub query: &'static str
}

impl Settings {
    /// Reads the settings from the process environment, falling back to `.env` in the working directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup_and_file(|key| std::env::var(key).ok(), Path::new(ENV_FILE))
    }

    /// Reads the settings through `lookup` first and the dotenv file at `path` second.
    ///
    /// A missing file is the same as an empty one.
    pub fn from_lookup_and_file<F>(lookup: F, path: &Path) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_values = read_env_file(path)?;

        Self::from_lookup(|key| lookup(key).or_else(|| file_values.get(key).cloned()))
    }

    /// Reads the settings through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = read(TOKEN).ok_or(ConfigError::MissingToken)?;

        Ok(Self {
            api_url: read(API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token,
            start_cursor: read(START_CURSOR),
            help_message: read(HELP_MESSAGE).unwrap_or_else(|| DEFAULT_HELP_MESSAGE.to_string()),
            output_dir: read(OUTPUT_DIR).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(".")),
            max_pages: parse_limit::<usize>(MAX_PAGES, read(MAX_PAGES))?,
            deadline: parse_limit::<u64>(DEADLINE_SECS, read(DEADLINE_SECS))?.map(Duration::from_secs),
            request_timeout: parse_limit::<u64>(TIMEOUT_SECS, read(TIMEOUT_SECS))?.map(Duration::from_secs),
            query: TRANSACTIONS_QUERY
        })
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(error) if error.not_found() => return Ok(HashMap::new()),
        Err(source) => return Err(ConfigError::EnvFile { path: path.to_path_buf(), source })
    };

    let values = entries.collect::<Result<HashMap<String, String>, _>>()
        .map_err(|source| ConfigError::EnvFile { path: path.to_path_buf(), source })?;

    debug!("Loaded {} settings from {}", values.len(), path.display());

    Ok(values)
}

fn parse_limit<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr + PartialEq + Default,
{
    let Some(value) = value else {
        return Ok(None)
    };

    let parsed = value.parse::<T>()
        .map_err(|_| ConfigError::InvalidNumber { key, value: value.clone() })?;

    if parsed == T::default() {
        return Err(ConfigError::ZeroLimit { key })
    }

    Ok(Some(parsed))
}
