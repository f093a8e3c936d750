//! Grading engine.
//!
//! Grading is a pure fold over a form and one response. A missing
//! answer, or an answer whose variant does not match the question kind,
//! grades as an empty answer of the right variant. Grading never errors
//! on malformed input.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::model::{
    Answer, CategorizePayload, ClozePayload, ComprehensionPayload, Form, Question,
    QuestionPayload, Response,
};

/// Grade for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionGrade {
    /// The graded question.
    pub question_id: Uuid,
    /// `Some(true)` / `Some(false)` for gradable kinds; `None` for
    /// categorize, which has no answer key and is self-assessed.
    pub correct: Option<bool>,
    /// Kind-specific breakdown for partial credit and review.
    pub detail: GradeDetail,
}

/// Kind-specific grade breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GradeDetail {
    Categorize {
        /// Where the respondent placed each item.
        placements: BTreeMap<String, Vec<String>>,
        /// Items from the question that were never placed.
        unplaced: Vec<String>,
        /// Whether every item was placed somewhere.
        complete: bool,
    },
    Cloze {
        /// One entry per expected blank: did the response match.
        blanks: Vec<bool>,
    },
    Comprehension {
        /// One entry per sub-question: did the selection match.
        selections: Vec<bool>,
    },
}

/// Grade one question against an optional answer.
pub fn grade_question(question: &Question, answer: Option<&Answer>) -> QuestionGrade {
    match &question.payload {
        QuestionPayload::Categorize(payload) => {
            let placements = match answer {
                Some(Answer::Categorize(placements)) => placements.clone(),
                Some(other) => mismatched(question, other),
                None => BTreeMap::new(),
            };
            grade_categorize(question.id, payload, placements)
        }
        QuestionPayload::Cloze(payload) => {
            let filled = match answer {
                Some(Answer::Cloze(filled)) => filled.clone(),
                Some(other) => mismatched(question, other),
                None => Vec::new(),
            };
            grade_cloze(question.id, payload, &filled)
        }
        QuestionPayload::Comprehension(payload) => {
            let selections = match answer {
                Some(Answer::Comprehension(selections)) => selections.clone(),
                Some(other) => mismatched(question, other),
                None => BTreeMap::new(),
            };
            grade_comprehension(question.id, payload, &selections)
        }
    }
}

/// Grade every question of a form, in form order.
pub fn grade_response(form: &Form, response: &Response) -> Vec<QuestionGrade> {
    form.questions
        .iter()
        .map(|q| grade_question(q, response.answers.get(&q.id)))
        .collect()
}

fn mismatched<T: Default>(question: &Question, answer: &Answer) -> T {
    warn!(
        question_id = %question.id,
        expected = %question.kind(),
        actual = %answer.kind(),
        "answer variant does not match question kind, grading as empty"
    );
    T::default()
}

fn grade_categorize(
    question_id: Uuid,
    payload: &CategorizePayload,
    placements: BTreeMap<String, Vec<String>>,
) -> QuestionGrade {
    let unplaced: Vec<String> = payload
        .items
        .iter()
        .filter(|item| !placements.values().any(|placed| placed.contains(item)))
        .cloned()
        .collect();
    let complete = unplaced.is_empty();

    QuestionGrade {
        question_id,
        correct: None,
        detail: GradeDetail::Categorize {
            placements,
            unplaced,
            complete,
        },
    }
}

fn grade_cloze(question_id: Uuid, payload: &ClozePayload, filled: &[String]) -> QuestionGrade {
    let blanks: Vec<bool> = payload
        .blanks
        .iter()
        .enumerate()
        .map(|(i, expected)| {
            filled
                .get(i)
                .map(|got| got.trim() == expected)
                .unwrap_or(false)
        })
        .collect();
    let correct = blanks.iter().all(|b| *b);

    QuestionGrade {
        question_id,
        correct: Some(correct),
        detail: GradeDetail::Cloze { blanks },
    }
}

fn grade_comprehension(
    question_id: Uuid,
    payload: &ComprehensionPayload,
    selections: &BTreeMap<usize, usize>,
) -> QuestionGrade {
    let graded: Vec<bool> = payload
        .sub_questions
        .iter()
        .enumerate()
        .map(|(i, sub)| selections.get(&i) == Some(&sub.correct_index))
        .collect();
    let correct = graded.iter().all(|b| *b);

    QuestionGrade {
        question_id,
        correct: Some(correct),
        detail: GradeDetail::Comprehension { selections: graded },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionKind, SubQuestion};
    use chrono::Utc;
    use std::collections::HashMap;

    fn cloze_question(blanks: &[&str]) -> Question {
        Question {
            id: Uuid::new_v4(),
            title: "Fill it in".into(),
            image: None,
            payload: QuestionPayload::Cloze(ClozePayload {
                text: "___ and ___".into(),
                blanks: blanks.iter().map(|s| s.to_string()).collect(),
            }),
        }
    }

    fn comprehension_question(correct: &[usize]) -> Question {
        Question {
            id: Uuid::new_v4(),
            title: "Read and answer".into(),
            image: None,
            payload: QuestionPayload::Comprehension(ComprehensionPayload {
                passage: "A passage.".into(),
                sub_questions: correct
                    .iter()
                    .map(|&c| SubQuestion {
                        prompt: "Pick one".into(),
                        options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                        correct_index: c,
                    })
                    .collect(),
            }),
        }
    }

    #[test]
    fn cloze_exact_match_is_correct() {
        let q = cloze_question(&["fox", "dog"]);
        let answer = Answer::Cloze(vec!["fox".into(), "dog".into()]);
        let grade = grade_question(&q, Some(&answer));
        assert_eq!(grade.correct, Some(true));
        assert_eq!(grade.detail, GradeDetail::Cloze { blanks: vec![true, true] });
    }

    #[test]
    fn cloze_comparison_is_case_sensitive() {
        let q = cloze_question(&["Fox"]);
        let answer = Answer::Cloze(vec!["fox".into()]);
        let grade = grade_question(&q, Some(&answer));
        assert_eq!(grade.correct, Some(false));
    }

    #[test]
    fn cloze_respondent_input_is_trimmed() {
        let q = cloze_question(&["fox"]);
        let answer = Answer::Cloze(vec!["  fox ".into()]);
        let grade = grade_question(&q, Some(&answer));
        assert_eq!(grade.correct, Some(true));
    }

    #[test]
    fn cloze_short_answer_counts_missing_as_wrong() {
        let q = cloze_question(&["fox", "dog"]);
        let answer = Answer::Cloze(vec!["fox".into()]);
        let grade = grade_question(&q, Some(&answer));
        assert_eq!(grade.correct, Some(false));
        assert_eq!(grade.detail, GradeDetail::Cloze { blanks: vec![true, false] });
    }

    #[test]
    fn comprehension_requires_every_selection() {
        let q = comprehension_question(&[1, 2]);
        let mut selections = BTreeMap::new();
        selections.insert(0, 1);
        // Sub-question 1 never answered.
        let grade = grade_question(&q, Some(&Answer::Comprehension(selections)));
        assert_eq!(grade.correct, Some(false));
        assert_eq!(
            grade.detail,
            GradeDetail::Comprehension {
                selections: vec![true, false],
            }
        );
    }

    #[test]
    fn comprehension_all_correct() {
        let q = comprehension_question(&[1, 2]);
        let mut selections = BTreeMap::new();
        selections.insert(0, 1);
        selections.insert(1, 2);
        let grade = grade_question(&q, Some(&Answer::Comprehension(selections)));
        assert_eq!(grade.correct, Some(true));
    }

    #[test]
    fn comprehension_out_of_range_selection_is_wrong() {
        let q = comprehension_question(&[0]);
        let mut selections = BTreeMap::new();
        selections.insert(0, 9);
        let grade = grade_question(&q, Some(&Answer::Comprehension(selections)));
        assert_eq!(grade.correct, Some(false));
    }

    #[test]
    fn categorize_is_ungraded_with_placement_detail() {
        let q = Question::new(QuestionKind::Categorize);
        let mut placements = BTreeMap::new();
        placements.insert("Category 1".to_string(), vec!["Item 1".to_string()]);
        let grade = grade_question(&q, Some(&Answer::Categorize(placements.clone())));

        assert_eq!(grade.correct, None);
        match grade.detail {
            GradeDetail::Categorize {
                placements: got,
                unplaced,
                complete,
            } => {
                assert_eq!(got, placements);
                assert_eq!(unplaced, vec!["Item 2", "Item 3", "Item 4"]);
                assert!(!complete);
            }
            other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn missing_answer_grades_as_empty() {
        let q = cloze_question(&["fox"]);
        let grade = grade_question(&q, None);
        assert_eq!(grade.correct, Some(false));
        assert_eq!(grade.detail, GradeDetail::Cloze { blanks: vec![false] });
    }

    #[test]
    fn mismatched_variant_grades_as_empty() {
        let q = cloze_question(&["fox"]);
        let wrong = Answer::Comprehension(BTreeMap::new());
        let grade = grade_question(&q, Some(&wrong));
        assert_eq!(grade.correct, Some(false));
    }

    #[test]
    fn grade_response_follows_form_order() {
        let q1 = cloze_question(&["fox"]);
        let q2 = comprehension_question(&[0]);
        let form = Form {
            id: Uuid::new_v4(),
            title: "Quiz".into(),
            description: String::new(),
            header_image: None,
            questions: vec![q1.clone(), q2.clone()],
            created_at: Utc::now(),
            response_count: 0,
        };

        let mut answers = HashMap::new();
        answers.insert(q2.id, Answer::Comprehension(BTreeMap::from([(0, 0)])));
        let response = Response {
            id: Uuid::new_v4(),
            form_id: form.id,
            answers,
            submitted_at: Utc::now(),
        };

        let grades = grade_response(&form, &response);
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].question_id, q1.id);
        assert_eq!(grades[0].correct, Some(false));
        assert_eq!(grades[1].question_id, q2.id);
        assert_eq!(grades[1].correct, Some(true));
    }
}
