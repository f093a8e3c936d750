//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level formforge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormforgeConfig {
    /// Path of the JSON data file forms and responses are stored in.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Directory score reports are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("./formforge-data.json")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./formforge-reports")
}

impl Default for FormforgeConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `formforge.toml` in the current directory
/// 2. `~/.config/formforge/config.toml`
///
/// Falls back to defaults when neither exists.
pub fn load_config() -> Result<FormforgeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<FormforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("formforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<FormforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FormforgeConfig::default(),
    };

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("formforge"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FormforgeConfig::default();
        assert_eq!(config.data_file, PathBuf::from("./formforge-data.json"));
        assert_eq!(config.output_dir, PathBuf::from("./formforge-reports"));
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
data_file = "/tmp/forms.json"
output_dir = "/tmp/reports"
"#;
        let config: FormforgeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/forms.json"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: FormforgeConfig = toml::from_str(r#"data_file = "x.json""#).unwrap();
        assert_eq!(config.data_file, PathBuf::from("x.json"));
        assert_eq!(config.output_dir, PathBuf::from("./formforge-reports"));
    }

    #[test]
    fn explicit_missing_path_fails() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, r#"data_file = "db.json""#).unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.data_file, PathBuf::from("db.json"));
    }
}
