//! The `formforge validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use uuid::Uuid;

use formforge_core::model::{Form, FormDraft};
use formforge_core::traits::FormStore;
use formforge_core::validate::validate_form;

/// Validate either a stored form (argument parses as a UUID) or a
/// draft JSON file on disk.
pub async fn execute(form_arg: String, config_path: Option<PathBuf>) -> Result<()> {
    let form = if let Ok(id) = form_arg.parse::<Uuid>() {
        let (_, store) = super::open_store(config_path)?;
        store.get_form(id).await?
    } else {
        let path = PathBuf::from(&form_arg);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read draft from {}", path.display()))?;
        let draft: FormDraft = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse draft {}", path.display()))?;
        Form {
            id: Uuid::nil(),
            title: draft.title,
            description: draft.description,
            header_image: draft.header_image,
            questions: draft.questions,
            created_at: Utc::now(),
            response_count: 0,
        }
    };

    println!("Form: {} ({} questions)", form.title, form.questions.len());

    let warnings = validate_form(&form);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Form is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
