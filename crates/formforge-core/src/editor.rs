//! Question editor engine.
//!
//! Every operation takes a question by reference and returns a new
//! question with the edit applied; inputs are never mutated. Indexed
//! operations fail with `EditError::IndexOutOfRange`, and kind-specific
//! operations applied to a question of another kind fail with
//! `EditError::KindMismatch`. On failure the input is unchanged.

use crate::error::EditError;
use crate::model::{
    CategorizePayload, ClozePayload, ComprehensionPayload, Question, QuestionKind,
    QuestionPayload, SubQuestion,
};

/// Replace the question title.
pub fn set_title(question: &Question, title: &str) -> Question {
    Question {
        title: title.to_string(),
        ..question.clone()
    }
}

/// Replace or clear the question image URL.
pub fn set_image(question: &Question, image: Option<String>) -> Question {
    Question {
        image,
        ..question.clone()
    }
}

// ---------------------------------------------------------------------------
// Categorize
// ---------------------------------------------------------------------------

/// Append a fresh placeholder category named after the current count.
pub fn append_category(question: &Question) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        p.categories.push(format!("Category {}", p.categories.len() + 1));
        Ok(())
    })
}

/// Append a fresh placeholder item named after the current count.
pub fn append_item(question: &Question) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        p.items.push(format!("Item {}", p.items.len() + 1));
        Ok(())
    })
}

/// Rename the category at `index`.
pub fn rename_category_at(
    question: &Question,
    index: usize,
    name: &str,
) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        check_index("category", index, p.categories.len())?;
        p.categories[index] = name.to_string();
        Ok(())
    })
}

/// Rename the item at `index`.
pub fn rename_item_at(question: &Question, index: usize, name: &str) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        check_index("item", index, p.items.len())?;
        p.items[index] = name.to_string();
        Ok(())
    })
}

/// Remove the category at `index`. Stored answers are never touched.
pub fn remove_category_at(question: &Question, index: usize) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        check_index("category", index, p.categories.len())?;
        p.categories.remove(index);
        Ok(())
    })
}

/// Remove the item at `index`. Stored answers are never touched.
pub fn remove_item_at(question: &Question, index: usize) -> Result<Question, EditError> {
    with_categorize(question, |p| {
        check_index("item", index, p.items.len())?;
        p.items.remove(index);
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Cloze
// ---------------------------------------------------------------------------

/// Replace the cloze text. The expected blanks list is left as-is; a
/// marker/blank count mismatch is a validation warning, not an error.
pub fn set_text(question: &Question, text: &str) -> Result<Question, EditError> {
    with_cloze(question, |p| {
        p.text = text.to_string();
        Ok(())
    })
}

/// Replace the expected blanks from a comma-delimited string.
///
/// Each segment is trimmed; empty segments become empty strings.
pub fn set_blanks_from_delimited(question: &Question, raw: &str) -> Result<Question, EditError> {
    with_cloze(question, |p| {
        p.blanks = raw.split(',').map(|s| s.trim().to_string()).collect();
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Comprehension
// ---------------------------------------------------------------------------

/// Replace the passage text.
pub fn set_passage(question: &Question, passage: &str) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        p.passage = passage.to_string();
        Ok(())
    })
}

/// Append a placeholder sub-question.
pub fn append_sub_question(question: &Question) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        p.sub_questions.push(SubQuestion::placeholder());
        Ok(())
    })
}

/// Remove the sub-question at `index`.
pub fn remove_sub_question_at(question: &Question, index: usize) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        check_index("sub-question", index, p.sub_questions.len())?;
        p.sub_questions.remove(index);
        Ok(())
    })
}

/// Replace the prompt of the sub-question at `index`.
pub fn set_sub_question_prompt(
    question: &Question,
    index: usize,
    prompt: &str,
) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        check_index("sub-question", index, p.sub_questions.len())?;
        p.sub_questions[index].prompt = prompt.to_string();
        Ok(())
    })
}

/// Set which option is correct for the sub-question at `index`.
///
/// The value itself is not range-checked here; an out-of-range
/// `correct_index` is reported by validation.
pub fn set_correct_index(
    question: &Question,
    index: usize,
    correct_index: usize,
) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        check_index("sub-question", index, p.sub_questions.len())?;
        p.sub_questions[index].correct_index = correct_index;
        Ok(())
    })
}

/// Replace one option text. `correct_index` is positional and is never
/// adjusted by option edits.
pub fn set_option_at(
    question: &Question,
    sub_index: usize,
    option_index: usize,
    value: &str,
) -> Result<Question, EditError> {
    with_comprehension(question, |p| {
        check_index("sub-question", sub_index, p.sub_questions.len())?;
        let options = &mut p.sub_questions[sub_index].options;
        check_index("option", option_index, options.len())?;
        options[option_index] = value.to_string();
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_index(what: &'static str, index: usize, len: usize) -> Result<(), EditError> {
    if index >= len {
        return Err(EditError::IndexOutOfRange { what, index, len });
    }
    Ok(())
}

fn with_categorize<F>(question: &Question, edit: F) -> Result<Question, EditError>
where
    F: FnOnce(&mut CategorizePayload) -> Result<(), EditError>,
{
    match &question.payload {
        QuestionPayload::Categorize(payload) => {
            let mut payload = payload.clone();
            edit(&mut payload)?;
            Ok(Question {
                payload: QuestionPayload::Categorize(payload),
                ..question.clone()
            })
        }
        other => Err(EditError::KindMismatch {
            expected: QuestionKind::Categorize,
            actual: other.kind(),
        }),
    }
}

fn with_cloze<F>(question: &Question, edit: F) -> Result<Question, EditError>
where
    F: FnOnce(&mut ClozePayload) -> Result<(), EditError>,
{
    match &question.payload {
        QuestionPayload::Cloze(payload) => {
            let mut payload = payload.clone();
            edit(&mut payload)?;
            Ok(Question {
                payload: QuestionPayload::Cloze(payload),
                ..question.clone()
            })
        }
        other => Err(EditError::KindMismatch {
            expected: QuestionKind::Cloze,
            actual: other.kind(),
        }),
    }
}

fn with_comprehension<F>(question: &Question, edit: F) -> Result<Question, EditError>
where
    F: FnOnce(&mut ComprehensionPayload) -> Result<(), EditError>,
{
    match &question.payload {
        QuestionPayload::Comprehension(payload) => {
            let mut payload = payload.clone();
            edit(&mut payload)?;
            Ok(Question {
                payload: QuestionPayload::Comprehension(payload),
                ..question.clone()
            })
        }
        other => Err(EditError::KindMismatch {
            expected: QuestionKind::Comprehension,
            actual: other.kind(),
        }),
    }
}
