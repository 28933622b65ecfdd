//! The assembler descriptor read from `<dir>/config.json`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Output format of the assembled program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Generate {
    #[default]
    Binary,
    Ascii,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "BinaryName")]
    pub binary_name: String,
    #[serde(rename = "Generate", default)]
    pub generate: Generate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(rename = "Config")]
    pub config: OutputConfig,
    /// Source files, relative to the config directory, in run order
    #[serde(rename = "Source", default)]
    pub source: Vec<String>,
}

impl Properties {
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let properties: Properties =
            serde_json::from_str(&text).map_err(|source| ConfigError::Json { path, source })?;

        tracing::debug!(
            binary = %properties.config.binary_name,
            sources = properties.source.len(),
            "loaded config"
        );

        Ok(properties)
    }

    pub fn binary_name(&self) -> &str {
        &self.config.binary_name
    }

    pub fn generate(&self) -> Generate {
        self.config.generate
    }

    pub fn files(&self) -> &[String] {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_full_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "Config": { "BinaryName": "out.bin", "Generate": "Ascii" }, "Source": ["a.s", "b.s"] }"#,
        )
        .unwrap();

        let properties = Properties::load(dir.path()).unwrap();

        assert_eq!(properties.binary_name(), "out.bin");
        assert_eq!(properties.generate(), Generate::Ascii);
        assert_eq!(properties.files(), ["a.s".to_string(), "b.s".to_string()]);
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "Config": { "BinaryName": "x" } }"#).unwrap();

        let properties = Properties::load(dir.path()).unwrap();

        assert_eq!(properties.generate(), Generate::Binary);
        assert!(properties.files().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();

        assert!(matches!(Properties::load(dir.path()), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_json() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "{ \"Config\": ").unwrap();

        assert!(matches!(Properties::load(dir.path()), Err(ConfigError::Json { .. })));
    }
}
