//! The `formforge grade` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use uuid::Uuid;

use formforge_core::grading::GradeDetail;
use formforge_core::report::ScoreReport;
use formforge_core::traits::FormStore;

pub async fn execute(
    form_id: Uuid,
    response_id: Uuid,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let (config, store) = super::open_store(config_path)?;

    let form = store.get_form(form_id).await?;
    let response = store.get_response(response_id).await?;
    anyhow::ensure!(
        response.form_id == form.id,
        "response {} was submitted against form {}, not {}",
        response.id,
        response.form_id,
        form.id
    );

    let report = ScoreReport::new(&form, &response);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // text format
            print_summary(&report);
        }
    }

    let out_dir = output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&out_dir)?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
    let path = out_dir.join(format!("report-{timestamp}.json"));
    report.save_json(&path)?;
    eprintln!("Report saved to: {}", path.display());

    Ok(())
}

fn print_summary(report: &ScoreReport) {
    match report.percentage() {
        Some(pct) => println!(
            "Score: {}/{} correct ({pct:.1}%)",
            report.correct_total(),
            report.graded_total()
        ),
        None => println!("Score: no gradable questions"),
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Kind", "Result"]);
    for (i, grade) in report.grades.iter().enumerate() {
        let kind = match &grade.detail {
            GradeDetail::Categorize { .. } => "categorize",
            GradeDetail::Cloze { .. } => "cloze",
            GradeDetail::Comprehension { .. } => "comprehension",
        };
        let result = match grade.correct {
            Some(true) => "correct",
            Some(false) => "incorrect",
            None => "ungraded",
        };
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(grade.question_id),
            Cell::new(kind),
            Cell::new(result),
        ]);
    }

    println!("\n{table}");
}
