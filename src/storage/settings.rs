//! Settings storage
//!
//! Reads the client configuration from `settings.json` in the data directory.
//! The file is optional and never written by the application.

use crate::storage::{get_data_dir, StorageError};
use crate::types::config::ClientConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the settings file path
pub fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load the client configuration
///
/// Returns defaults if the file doesn't exist or is corrupted
pub fn load_config() -> ClientConfig {
    match get_settings_path().and_then(|path| load_config_from(&path)) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            ClientConfig::default()
        }
    }
}

/// Load the configuration from an explicit path
pub fn load_config_from(path: &Path) -> Result<ClientConfig, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(ClientConfig::default());
    }

    let json = fs::read_to_string(path)?;
    let mut config: ClientConfig = serde_json::from_str(&json)?;
    config.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::DEFAULT_API_BASE_URL;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_load_and_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"api_base_url": "http://10.0.0.2:8000/api/v1/", "request_timeout_secs": 45}"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_base_url, "http://10.0.0.2:8000/api/v1");
        assert_eq!(config.request_timeout_secs, Some(45));
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }

    #[test]
    fn test_empty_object_uses_default_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{}").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
