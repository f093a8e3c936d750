//! The `formforge create` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use formforge_core::model::FormDraft;
use formforge_core::traits::FormStore;

pub async fn execute(form_path: PathBuf, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    let content = std::fs::read_to_string(&form_path)
        .with_context(|| format!("failed to read draft from {}", form_path.display()))?;
    let draft: FormDraft = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse draft {}", form_path.display()))?;

    let form = store.create_form(draft).await?;
    println!("Created form {} ({})", form.id, form.title);

    Ok(())
}
