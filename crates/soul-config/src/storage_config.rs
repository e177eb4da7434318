use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PREFERENCES_KEY, DEFAULT_STORAGE_DIR,
    DEFAULT_STORAGE_KEY,
};

use std::path::Path;

use serde::Deserialize;

/// Where the session identity and preferences are mirrored on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory relative to the config directory
    pub dir: String,
    /// Namespaced key; the mirror file is `<key>.json`
    pub key: String,
    /// Key of the onboarding preferences mirror
    pub preferences_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_STORAGE_DIR),
            key: String::from(DEFAULT_STORAGE_KEY),
            preferences_key: String::from(DEFAULT_PREFERENCES_KEY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::storage(
                "storage.dir must be relative and cannot contain '..'",
            ));
        }

        Self::validate_key("storage.key", &self.key)?;
        Self::validate_key("storage.preferences_key", &self.preferences_key)?;

        if self.key == self.preferences_key {
            return Err(ConfigError::storage(format!(
                "storage.key and storage.preferences_key must differ, both are '{}'",
                self.key
            )));
        }

        Ok(())
    }

    fn validate_key(field: &str, key: &str) -> ConfigErrorResult<()> {
        if key.is_empty() {
            return Err(ConfigError::storage(format!("{field} cannot be empty")));
        }

        if key
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'))
        {
            return Err(ConfigError::storage(format!(
                "{field} may only contain letters, digits, '-', '_' and '.', got '{key}'"
            )));
        }

        Ok(())
    }
}
