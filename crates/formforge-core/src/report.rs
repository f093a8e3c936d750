//! Score report types with JSON persistence and markdown rendering.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::grading::{grade_response, GradeDetail, QuestionGrade};
use crate::model::{Form, Response};

/// A complete score report for one response against one form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the graded form.
    pub form: FormSummary,
    /// The graded response.
    pub response_id: Uuid,
    /// Per-question grades, in form order.
    pub grades: Vec<QuestionGrade>,
}

/// Summary of a form (without the full question definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSummary {
    pub id: Uuid,
    pub title: String,
    pub question_count: usize,
}

impl ScoreReport {
    /// Grade a response and wrap the result in a report.
    pub fn new(form: &Form, response: &Response) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            form: FormSummary {
                id: form.id,
                title: form.title.clone(),
                question_count: form.questions.len(),
            },
            response_id: response.id,
            grades: grade_response(form, response),
        }
    }

    /// Number of questions that produced a pass/fail verdict.
    pub fn graded_total(&self) -> usize {
        self.grades.iter().filter(|g| g.correct.is_some()).count()
    }

    /// Number of questions graded correct.
    pub fn correct_total(&self) -> usize {
        self.grades
            .iter()
            .filter(|g| g.correct == Some(true))
            .count()
    }

    /// Percentage of graded questions answered correctly, or `None`
    /// when nothing was gradable.
    pub fn percentage(&self) -> Option<f64> {
        let graded = self.graded_total();
        if graded == 0 {
            return None;
        }
        Some(self.correct_total() as f64 / graded as f64 * 100.0)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        match self.percentage() {
            Some(pct) => md.push_str(&format!(
                "**Score:** {}/{} correct ({pct:.1}%)\n\n",
                self.correct_total(),
                self.graded_total()
            )),
            None => md.push_str("**Score:** no gradable questions\n\n"),
        }

        let ungraded = self.grades.len() - self.graded_total();
        if ungraded > 0 {
            md.push_str(&format!("{ungraded} question(s) ungraded (self-assessed)\n\n"));
        }

        md.push_str("| # | Kind | Result |\n");
        md.push_str("|---|------|--------|\n");
        for (i, grade) in self.grades.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} |\n",
                i + 1,
                kind_label(&grade.detail),
                result_label(grade)
            ));
        }

        md
    }
}

fn kind_label(detail: &GradeDetail) -> &'static str {
    match detail {
        GradeDetail::Categorize { .. } => "categorize",
        GradeDetail::Cloze { .. } => "cloze",
        GradeDetail::Comprehension { .. } => "comprehension",
    }
}

fn result_label(grade: &QuestionGrade) -> String {
    match (&grade.correct, &grade.detail) {
        (Some(true), _) => "correct".to_string(),
        (Some(false), _) => "incorrect".to_string(),
        (None, GradeDetail::Categorize { unplaced, complete, .. }) => {
            if *complete {
                "ungraded (all items placed)".to_string()
            } else {
                format!("ungraded ({} item(s) unplaced)", unplaced.len())
            }
        }
        (None, _) => "ungraded".to_string(),
    }
}
