use config::{Config as ConfigLoader, ConfigError, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use super::error::Error;

/// Optional configuration file, looked up in the working directory.
pub const CONFIG_FILE: &str = "Bench.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub names_file: String,
    pub data_file: String,
}

impl OutputConfig {
    pub fn names_path(&self) -> PathBuf {
        self.directory.join(&self.names_file)
    }

    pub fn data_path(&self) -> PathBuf {
        self.directory.join(&self.data_file)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Loads `Bench.toml` from the current directory, falling back to defaults.
pub fn load_config() -> Result<Config, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    load_config_from(&base_path.join(CONFIG_FILE))
}

/// Loads configuration from `path`. A missing file leaves every key at its default.
pub fn load_config_from(path: &Path) -> Result<Config, Error> {
    let s = defaults()
        .and_then(|builder| builder.add_source(File::from(path).required(false)).build())
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}

fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    ConfigLoader::builder()
        .set_default("output.directory", ".")?
        .set_default("output.names_file", "bm_names.txt")?
        .set_default("output.data_file", "bm.txt")?
        .set_default("logging.level", "info")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const OVERRIDE_TOML: &str = "\
[output]
directory = \"results\"
data_file = \"layouts.tsv\"

[logging]
level = \"debug\"
";

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = load_config_from(&dir.path().join(CONFIG_FILE)).expect("load failed");

        assert_eq!(config.output.names_path(), Path::new(".").join("bm_names.txt"));
        assert_eq!(config.output.data_path(), Path::new(".").join("bm.txt"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, OVERRIDE_TOML).expect("Failed to write config");

        let config = load_config_from(&path).expect("load failed");

        assert_eq!(config.output.data_path(), Path::new("results").join("layouts.tsv"));
        assert_eq!(config.output.names_path(), Path::new("results").join("bm_names.txt"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[output\ndirectory = ").expect("Failed to write config");

        let result = load_config_from(&path);
        assert!(matches!(result, Err(Error::ConfigLoadError(_))));
    }
}
