//! The `formforge update` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use formforge_core::model::FormPatch;
use formforge_core::traits::FormStore;

pub async fn execute(id: Uuid, patch_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    let content = std::fs::read_to_string(&patch_path)
        .with_context(|| format!("failed to read patch from {}", patch_path.display()))?;
    let patch: FormPatch = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse patch {}", patch_path.display()))?;

    let form = store.update_form(id, patch).await?;
    println!("Updated form {} ({})", form.id, form.title);

    Ok(())
}
