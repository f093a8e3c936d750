//! The `formforge delete` command.

use std::path::PathBuf;

use anyhow::Result;
use uuid::Uuid;

use formforge_core::traits::FormStore;

pub async fn execute(id: Uuid, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;
    store.delete_form(id).await?;
    println!("Deleted form {id}. Responses are kept.");
    Ok(())
}
