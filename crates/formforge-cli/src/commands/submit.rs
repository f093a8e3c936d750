//! The `formforge submit` command.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

use formforge_core::model::Answer;
use formforge_core::traits::FormStore;

pub async fn execute(
    form_id: Uuid,
    answers_path: PathBuf,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;

    let content = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    let answers: HashMap<Uuid, Answer> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse answers {}", answers_path.display()))?;

    let response = store.submit_response(form_id, answers).await?;
    println!(
        "Recorded response {} for form {}",
        response.id, response.form_id
    );

    Ok(())
}
