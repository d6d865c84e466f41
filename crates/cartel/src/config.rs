//! Configuration file loading for cartel.
//!
//! Reads `cartel.config.json` from the current working directory, or from an
//! explicit path. Also provides the JSON Schema for editor autocompletion.

use std::path::{Path, PathBuf};

use cartel_registre::AutoImportPolicy;
use serde::{Deserialize, Serialize};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cartel.config.json";

/// Registry snapshot used when neither the command line nor the config names one.
pub const DEFAULT_REGISTRY_FILE: &str = "cartel.registry.json";

/// Top-level cartel configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartelConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Whether accepted completions should insert imports.
    #[serde(default)]
    pub auto_import: AutoImportPolicy,

    /// Registry snapshot path, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<PathBuf>,

    /// Directory the config was read from.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl CartelConfig {
    /// Registry snapshot to load, preferring `explicit` over the configured path.
    pub fn registry_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        let configured = self
            .registry
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_REGISTRY_FILE));
        self.base_dir.join(configured)
    }
}

/// Load the config file at `path`, or `cartel.config.json` in the CWD if None.
///
/// A missing file yields the defaults. An unreadable or malformed file is
/// reported and also yields the defaults.
pub fn load_config(path: Option<&Path>) -> CartelConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME),
    };
    let base_dir = config_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();

    let default = || CartelConfig {
        base_dir: base_dir.clone(),
        ..CartelConfig::default()
    };

    if !config_path.exists() {
        tracing::debug!("no config at {}", config_path.display());
        return default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match serde_json::from_str::<CartelConfig>(&content) {
            Ok(config) => CartelConfig {
                base_dir: base_dir.clone(),
                ..config
            },
            Err(e) => {
                eprintln!(
                    "\x1b[33mWarning:\x1b[0m Failed to parse {}: {}",
                    config_path.display(),
                    e
                );
                default()
            }
        },
        Err(e) => {
            eprintln!(
                "\x1b[33mWarning:\x1b[0m Failed to read {}: {}",
                config_path.display(),
                e
            );
            default()
        }
    }
}

/// JSON Schema for `cartel.config.json`.
pub const CARTEL_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Cartel Configuration",
  "description": "Configuration file for cartel - Vue component tag and attribute resolution",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "autoImport": {
      "type": "object",
      "description": "Whether accepted completions of unregistered components insert an import",
      "properties": {
        "typescript": {
          "type": "boolean",
          "default": true,
          "description": "Insert imports into TypeScript script blocks"
        },
        "javascript": {
          "type": "boolean",
          "default": true,
          "description": "Insert imports into JavaScript script blocks"
        }
      },
      "additionalProperties": false
    },
    "registry": {
      "type": "string",
      "description": "Path to the registry snapshot, relative to this file",
      "default": "cartel.registry.json"
    }
  },
  "additionalProperties": false
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config.auto_import, AutoImportPolicy::default());
        assert_eq!(
            config.registry_path(None),
            dir.path().join(DEFAULT_REGISTRY_FILE)
        );
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"{ "autoImport": { "typescript": false }, "registry": "out/index.json" }"#,
        )
        .unwrap();

        let config = load_config(Some(&path));
        assert!(!config.auto_import.typescript);
        assert!(config.auto_import.javascript);
        assert_eq!(
            config.registry_path(None),
            dir.path().join("out/index.json")
        );
        assert_eq!(
            config.registry_path(Some(Path::new("other.json"))),
            PathBuf::from("other.json")
        );
    }

    #[test]
    fn test_malformed_config_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        let config = load_config(Some(&path));
        assert!(config.registry.is_none());
        assert_eq!(config.base_dir, dir.path());
    }

    #[test]
    fn test_schema_is_valid_json() {
        let schema: serde_json::Value = serde_json::from_str(CARTEL_CONFIG_SCHEMA).unwrap();
        assert_eq!(schema["title"], "Cartel Configuration");
        assert!(schema["properties"]["autoImport"].is_object());
    }
}
