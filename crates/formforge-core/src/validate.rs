//! Form and question validation.
//!
//! Validation reports problems as warnings; it never blocks an edit or
//! a save. Editing may transiently violate these rules, the warnings
//! exist so authors can reconcile before publishing.

use std::collections::HashSet;

use uuid::Uuid;

use crate::model::{blank_marker_count, Form, Question, QuestionPayload};

/// A warning from form or question validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question this warning applies to (if applicable).
    pub question_id: Option<Uuid>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn for_question(question: &Question, message: impl Into<String>) -> Self {
        Self {
            question_id: Some(question.id),
            message: message.into(),
        }
    }
}

/// Validate a single question for common issues.
pub fn validate_question(question: &Question) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    match &question.payload {
        QuestionPayload::Categorize(payload) => {
            if payload.categories.is_empty() {
                warnings.push(ValidationWarning::for_question(
                    question,
                    "categorize question has no categories",
                ));
            }

            let mut seen = HashSet::new();
            for category in &payload.categories {
                if category.trim().is_empty() {
                    warnings.push(ValidationWarning::for_question(
                        question,
                        "category name is empty",
                    ));
                } else if !seen.insert(category.as_str()) {
                    warnings.push(ValidationWarning::for_question(
                        question,
                        format!("duplicate category name: {category}"),
                    ));
                }
            }
        }
        QuestionPayload::Cloze(payload) => {
            let markers = blank_marker_count(&payload.text);
            if markers != payload.blanks.len() {
                warnings.push(ValidationWarning::for_question(
                    question,
                    format!(
                        "text has {markers} blank marker(s) but {} expected answer(s)",
                        payload.blanks.len()
                    ),
                ));
            }
        }
        QuestionPayload::Comprehension(payload) => {
            if payload.sub_questions.is_empty() {
                warnings.push(ValidationWarning::for_question(
                    question,
                    "comprehension question has no sub-questions",
                ));
            }

            for (i, sub) in payload.sub_questions.iter().enumerate() {
                if sub.prompt.trim().is_empty() {
                    warnings.push(ValidationWarning::for_question(
                        question,
                        format!("sub-question {i} has an empty prompt"),
                    ));
                }
                if sub.options.len() < 2 {
                    warnings.push(ValidationWarning::for_question(
                        question,
                        format!(
                            "sub-question {i} has {} option(s), need at least 2",
                            sub.options.len()
                        ),
                    ));
                }
                if sub.correct_index >= sub.options.len() {
                    warnings.push(ValidationWarning::for_question(
                        question,
                        format!(
                            "sub-question {i} correct_index {} out of range (len {})",
                            sub.correct_index,
                            sub.options.len()
                        ),
                    ));
                }
            }
        }
    }

    warnings
}

/// Validate a whole form: form-level issues plus every per-question
/// warning.
pub fn validate_form(form: &Form) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if form.title.trim().is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "form title is empty".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for question in &form.questions {
        if !seen_ids.insert(question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &form.questions {
        warnings.extend(validate_question(question));
    }

    warnings
}
