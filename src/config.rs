//! Tool configuration.
//!
//! An optional `images-list.toml` in the base directory can relocate the image
//! root and the output file. Both paths are relative to the base directory
//! (absolute paths are used as-is).
//!
//! ```toml
//! # All options are optional - defaults shown below
//! images_dir = "images"          # Holds the 4/, 6/ and 9/ folders
//! output = "images_list.json"    # Manifest written on every run
//! ```
//!
//! Unknown keys are rejected to catch typos early. Command-line flags take
//! precedence over the file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the base directory.
pub const CONFIG_FILE: &str = "images-list.toml";
pub const DEFAULT_IMAGES_DIR: &str = "images";
pub const DEFAULT_OUTPUT: &str = "images_list.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Image root, containing one folder per category.
    pub images_dir: PathBuf,
    /// Manifest file to overwrite.
    pub output: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ToolConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "images_dir must not be empty".into(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ConfigError::Validation("output must not be empty".into()));
        }
        Ok(())
    }

    pub fn images_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.images_dir)
    }

    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.output)
    }
}

/// Load `images-list.toml` from `base_dir`, falling back to defaults when the
/// file does not exist.
pub fn load_config(base_dir: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = base_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(ToolConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config: ToolConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a commented stock `images-list.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# images-list configuration
# =========================
# Place this file next to images_list.json. Every key is optional and the
# values below are the defaults. Relative paths resolve against this file's
# directory. Unknown keys cause an error.

# Directory holding the 4/, 6/ and 9/ image folders.
images_dir = "images"

# Manifest file, overwritten on every run.
output = "images_list.json"
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, ToolConfig::default());
        assert_eq!(
            config.output_path(tmp.path()),
            tmp.path().join("images_list.json")
        );
        assert_eq!(config.images_root(tmp.path()), tmp.path().join("images"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "output = \"data/list.json\"\n").unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("data/list.json"));
        assert_eq!(config.images_dir, PathBuf::from("images"));
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "outptu = \"x.json\"\n").unwrap();

        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn empty_output_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "output = \"\"\n").unwrap();

        let err = load_config(tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn absolute_output_replaces_base() {
        let tmp = TempDir::new().unwrap();
        let elsewhere = tmp.path().join("elsewhere.json");
        let config = ToolConfig {
            output: elsewhere.clone(),
            ..ToolConfig::default()
        };
        assert_eq!(config.output_path(Path::new("/unrelated")), elsewhere);
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: ToolConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, ToolConfig::default());
    }
}
