//! CLI subcommand implementations, one module per subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};

use formforge_store::{load_config_from, FormforgeConfig, JsonStore};

pub mod create;
pub mod delete;
pub mod grade;
pub mod init;
pub mod list;
pub mod responses;
pub mod show;
pub mod submit;
pub mod update;
pub mod validate;

/// Load configuration and open the JSON store it points at.
fn open_store(config_path: Option<PathBuf>) -> Result<(FormforgeConfig, JsonStore)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = JsonStore::open(&config.data_file)
        .with_context(|| format!("failed to open store at {}", config.data_file.display()))?;
    Ok((config, store))
}
