use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::types::ConfigFile;

/// Default config filenames checked when no `--config` is provided.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["tankrig.toml", "tankrig.json"];

/// Loads a configuration file from the provided path or default locations.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> ConfigResult<Option<ConfigFile>> {
    if let Some(path) = path {
        let path = PathBuf::from(path);
        return Ok(Some(load_config_file(&path)?));
    }

    for name in DEFAULT_CONFIG_FILES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(Some(load_config_file(&path)?));
        }
    }

    Ok(None)
}

pub(crate) fn load_config_file(path: &Path) -> ConfigResult<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::ReadConfig {
        path: path.to_path_buf(),
        source: err,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|err| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source: err,
        }),
        Some("json") => serde_json::from_str(&content).map_err(|err| ConfigError::ParseJson {
            path: path.to_path_buf(),
            source: err,
        }),
        Some(ext) => Err(ConfigError::UnsupportedExtension {
            ext: ext.to_owned(),
        }),
        None => Err(ConfigError::MissingExtension),
    }
}
