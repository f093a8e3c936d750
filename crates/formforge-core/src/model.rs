//! Core data model types for formforge.
//!
//! These are the fundamental types the entire formforge system uses to
//! represent forms, questions, answers, and submitted responses.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The literal marker that denotes a blank inside cloze text.
pub const BLANK_MARKER: &str = "___";

/// A complete form as stored in a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    /// Unique identifier, assigned at creation and immutable.
    pub id: Uuid,
    /// Form title shown to respondents.
    pub title: String,
    /// Longer description of the form.
    #[serde(default)]
    pub description: String,
    /// Optional header image URL (opaque string, never fetched).
    #[serde(default)]
    pub header_image: Option<String>,
    /// The questions in this form, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
    /// When the form was created.
    pub created_at: DateTime<Utc>,
    /// Number of responses submitted against this form.
    #[serde(default)]
    pub response_count: u64,
}

/// Author-supplied fields of a form; the store assigns the rest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A shallow-merge patch for updating a form.
///
/// Absent fields leave the stored value untouched. No field-level
/// validation happens on merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

impl Form {
    /// Shallow-merge a patch into this form. Absent patch fields leave
    /// the stored values untouched; no field-level validation happens.
    pub fn apply_patch(&mut self, patch: FormPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(header_image) = patch.header_image {
            self.header_image = Some(header_image);
        }
        if let Some(questions) = patch.questions {
            self.questions = questions;
        }
    }
}

/// A single question inside a form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the owning form. Drafts may omit it;
    /// a fresh id is assigned on deserialization.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Question title shown to respondents.
    pub title: String,
    /// Optional illustration URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Kind-specific payload.
    #[serde(flatten)]
    pub payload: QuestionPayload,
}

impl Question {
    /// Create a question of the given kind with its default payload
    /// and the title `New {kind} question`.
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: format!("New {kind} question"),
            image: None,
            payload: QuestionPayload::default_for(kind),
        }
    }

    /// The kind of this question.
    pub fn kind(&self) -> QuestionKind {
        self.payload.kind()
    }
}

/// Kind-specific question data. The union is closed: a question's kind
/// is fixed at creation, changing it is delete + recreate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum QuestionPayload {
    Categorize(CategorizePayload),
    Cloze(ClozePayload),
    Comprehension(ComprehensionPayload),
}

impl QuestionPayload {
    /// The kind discriminant of this payload.
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionPayload::Categorize(_) => QuestionKind::Categorize,
            QuestionPayload::Cloze(_) => QuestionKind::Cloze,
            QuestionPayload::Comprehension(_) => QuestionKind::Comprehension,
        }
    }

    /// The default payload seeded for a freshly created question.
    pub fn default_for(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Categorize => QuestionPayload::Categorize(CategorizePayload {
                categories: vec!["Category 1".into(), "Category 2".into()],
                items: vec![
                    "Item 1".into(),
                    "Item 2".into(),
                    "Item 3".into(),
                    "Item 4".into(),
                ],
            }),
            QuestionKind::Cloze => QuestionPayload::Cloze(ClozePayload {
                text: "The quick brown ___ jumps over the lazy ___.".into(),
                blanks: vec!["fox".into(), "dog".into()],
            }),
            QuestionKind::Comprehension => QuestionPayload::Comprehension(ComprehensionPayload {
                passage: "Enter your passage here...".into(),
                sub_questions: vec![SubQuestion::sample()],
            }),
        }
    }
}

/// Drag-and-drop categorization data. Items are not pre-assigned to
/// categories; the answer records where the respondent placed them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizePayload {
    pub categories: Vec<String>,
    pub items: Vec<String>,
}

/// Fill-in-the-blank data. `text` contains `___` markers; `blanks`
/// holds the expected answer per marker position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClozePayload {
    pub text: String,
    #[serde(default)]
    pub blanks: Vec<String>,
}

/// Reading comprehension data: a passage plus multiple-choice
/// sub-questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensionPayload {
    pub passage: String,
    #[serde(default)]
    pub sub_questions: Vec<SubQuestion>,
}

/// A single multiple-choice sub-question of a comprehension question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    #[serde(default)]
    pub correct_index: usize,
}

impl SubQuestion {
    /// The sub-question seeded into a fresh comprehension payload.
    pub fn sample() -> Self {
        Self {
            prompt: "Sample question?".into(),
            options: default_options(),
            correct_index: 0,
        }
    }

    /// The placeholder appended by the editor.
    pub fn placeholder() -> Self {
        Self {
            prompt: "New question?".into(),
            options: default_options(),
            correct_index: 0,
        }
    }
}

fn default_options() -> Vec<String> {
    vec![
        "Option A".into(),
        "Option B".into(),
        "Option C".into(),
        "Option D".into(),
    ]
}

/// The three supported question kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Categorize,
    Cloze,
    Comprehension,
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionKind::Categorize => write!(f, "categorize"),
            QuestionKind::Cloze => write!(f, "cloze"),
            QuestionKind::Comprehension => write!(f, "comprehension"),
        }
    }
}

impl FromStr for QuestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "categorize" => Ok(QuestionKind::Categorize),
            "cloze" => Ok(QuestionKind::Cloze),
            "comprehension" | "reading" => Ok(QuestionKind::Comprehension),
            other => Err(format!("unknown question kind: {other}")),
        }
    }
}

/// Count of non-overlapping blank markers in cloze text. This is the
/// expected length of the payload's `blanks` list.
pub fn blank_marker_count(text: &str) -> usize {
    text.matches(BLANK_MARKER).count()
}

/// A respondent's answer to one question, variant-matched to the
/// question kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Answer {
    /// Category name → items placed under it. An item appears under at
    /// most one category.
    Categorize(BTreeMap<String, Vec<String>>),
    /// One entry per blank position; empty string means unanswered.
    Cloze(Vec<String>),
    /// Sub-question index → selected option index.
    Comprehension(BTreeMap<usize, usize>),
}

impl Answer {
    /// The kind discriminant of this answer.
    pub fn kind(&self) -> QuestionKind {
        match self {
            Answer::Categorize(_) => QuestionKind::Categorize,
            Answer::Cloze(_) => QuestionKind::Cloze,
            Answer::Comprehension(_) => QuestionKind::Comprehension,
        }
    }

    /// An empty answer of the right variant for the given kind.
    pub fn default_for(kind: QuestionKind) -> Self {
        match kind {
            QuestionKind::Categorize => Answer::Categorize(BTreeMap::new()),
            QuestionKind::Cloze => Answer::Cloze(Vec::new()),
            QuestionKind::Comprehension => Answer::Comprehension(BTreeMap::new()),
        }
    }
}

/// A submitted response. Created only at submission, then immutable.
///
/// Holds a weak reference to the form: deleting the form does not
/// invalidate stored responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Unique response identifier.
    pub id: Uuid,
    /// The form this response was submitted against.
    pub form_id: Uuid,
    /// Answers keyed by question id. Questions may be skipped.
    #[serde(default)]
    pub answers: HashMap<Uuid, Answer>,
    /// When the response was submitted.
    pub submitted_at: DateTime<Utc>,
}
