use super::{ConfigError, Settings, DEFAULT_API_URL, DEFAULT_HELP_MESSAGE};

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tempfile::tempdir;

fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings, ConfigError> {
    let values: HashMap<String, String> = pairs.iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    Settings::from_lookup(|key| values.get(key).cloned())
}

#[test]
fn test_settings_apply_defaults_when_only_token_is_set() -> Result<()> {
    let settings = settings_from(&[("CREDITKARMA_TOKEN", "abc123")])?;

    assert_eq!(settings.token, "abc123");
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.help_message, DEFAULT_HELP_MESSAGE);
    assert_eq!(settings.output_dir, PathBuf::from("."));
    assert!(settings.start_cursor.is_none());
    assert!(settings.max_pages.is_none());
    assert!(settings.deadline.is_none());
    assert!(settings.request_timeout.is_none());
    assert!(settings.query.contains("transactionPage"));

    Ok(())
}

#[test]
fn test_settings_fail_without_token() {
    assert!(matches!(settings_from(&[]), Err(ConfigError::MissingToken)));
    assert!(matches!(settings_from(&[("CREDITKARMA_TOKEN", "   ")]), Err(ConfigError::MissingToken)));
}

#[test]
fn test_settings_read_every_optional_value() -> Result<()> {
    let settings = settings_from(&[
        ("CREDITKARMA_TOKEN", "abc123"),
        ("CREDITKARMA_START_CURSOR", "cursor-7"),
        ("CREDITKARMA_HELP_MESSAGE", "refresh the token"),
        ("CREDITKARMA_API_URL", "http://localhost:9000/graphql"),
        ("CREDITKARMA_OUTPUT_DIR", "/tmp/exports"),
        ("CREDITKARMA_MAX_PAGES", "5"),
        ("CREDITKARMA_DEADLINE_SECS", "90"),
        ("CREDITKARMA_TIMEOUT_SECS", "15")
    ])?;

    assert_eq!(settings.start_cursor.as_deref(), Some("cursor-7"));
    assert_eq!(settings.help_message, "refresh the token");
    assert_eq!(settings.api_url, "http://localhost:9000/graphql");
    assert_eq!(settings.output_dir, PathBuf::from("/tmp/exports"));
    assert_eq!(settings.max_pages, Some(5));
    assert_eq!(settings.deadline, Some(Duration::from_secs(90)));
    assert_eq!(settings.request_timeout, Some(Duration::from_secs(15)));

    Ok(())
}

#[test]
fn test_settings_reject_invalid_limits() {
    let invalid = settings_from(&[("CREDITKARMA_TOKEN", "abc123"), ("CREDITKARMA_MAX_PAGES", "many")]);
    assert!(matches!(invalid, Err(ConfigError::InvalidNumber { key: "CREDITKARMA_MAX_PAGES", .. })));

    let zero = settings_from(&[("CREDITKARMA_TOKEN", "abc123"), ("CREDITKARMA_DEADLINE_SECS", "0")]);
    assert!(matches!(zero, Err(ConfigError::ZeroLimit { key: "CREDITKARMA_DEADLINE_SECS" })));
}

#[test]
fn test_settings_read_dotenv_file_under_environment() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join(".env");
    fs::write(&path, "CREDITKARMA_TOKEN=file-token\nCREDITKARMA_MAX_PAGES=3\n# comment\nCREDITKARMA_HELP_MESSAGE=\"from file\"\n")?;

    let settings = Settings::from_lookup_and_file(|key| match key {
        "CREDITKARMA_MAX_PAGES" => Some("7".to_string()),
        _ => None
    }, &path)?;

    assert_eq!(settings.token, "file-token");
    assert_eq!(settings.help_message, "from file");
    assert_eq!(settings.max_pages, Some(7));

    Ok(())
}

#[test]
fn test_settings_treat_missing_dotenv_file_as_empty() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join(".env");

    let settings = Settings::from_lookup_and_file(|key| (key == "CREDITKARMA_TOKEN").then(|| "env-token".to_string()), &path)?;
    assert_eq!(settings.token, "env-token");

    assert!(matches!(Settings::from_lookup_and_file(|_| None, &path), Err(ConfigError::MissingToken)));

    Ok(())
}

#[test]
fn test_settings_reject_malformed_dotenv_file() -> Result<()> {
    let directory = tempdir()?;
    let path = directory.path().join(".env");
    fs::write(&path, "CREDITKARMA_TOKEN='unterminated\n")?;

    let result = Settings::from_lookup_and_file(|_| None, &path);

    assert!(matches!(result, Err(ConfigError::EnvFile { .. })));

    Ok(())
}
