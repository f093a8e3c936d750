//! The `formforge show` command.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use formforge_core::traits::FormStore;

pub async fn execute(id: Uuid, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;
    let form = store.get_form(id).await?;
    println!("{}", serde_json::to_string_pretty(&form)?);
    Ok(())
}
