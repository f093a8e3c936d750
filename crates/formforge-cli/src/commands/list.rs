//! The `formforge list` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use formforge_core::traits::FormStore;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, store) = super::open_store(config_path)?;
    let forms = store.list_forms().await?;

    if forms.is_empty() {
        println!("No forms in the store.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Questions", "Responses", "Created"]);
    for form in &forms {
        table.add_row(vec![
            Cell::new(form.id),
            Cell::new(&form.title),
            Cell::new(form.questions.len()),
            Cell::new(form.response_count),
            Cell::new(form.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }

    println!("{table}");
    Ok(())
}
