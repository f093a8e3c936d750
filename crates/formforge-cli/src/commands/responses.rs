//! The `formforge responses` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use uuid::Uuid;

use formforge_core::traits::FormStore;

pub async fn execute(form_id: Option<Uuid>, config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;
    let responses = store.list_responses(form_id).await?;

    if responses.is_empty() {
        println!("No responses recorded.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Form", "Answers", "Submitted"]);
    for response in &responses {
        table.add_row(vec![
            Cell::new(response.id),
            Cell::new(response.form_id),
            Cell::new(response.answers.len()),
            Cell::new(response.submitted_at.format("%Y-%m-%d %H:%M")),
        ]);
    }

    println!("{table}");
    Ok(())
}
