//! Repository trait for forms and responses.
//!
//! This async trait is the storage boundary; implementations live in
//! the `formforge-store` crate.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{Answer, Form, FormDraft, FormPatch, Response};

/// Storage backend for forms and submitted responses.
///
/// Stores assign identities and timestamps; they never validate
/// content. Responses hold a weak reference to their form: deleting a
/// form leaves its responses in place.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Create a form from a draft, assigning id, creation time, and a
    /// zero response count.
    async fn create_form(&self, draft: FormDraft) -> Result<Form, StoreError>;

    /// Fetch a form by id.
    async fn get_form(&self, id: Uuid) -> Result<Form, StoreError>;

    /// Shallow-merge a patch into a stored form. Absent patch fields
    /// leave the stored values untouched.
    async fn update_form(&self, id: Uuid, patch: FormPatch) -> Result<Form, StoreError>;

    /// Delete a form and its owned questions. Stored responses are
    /// kept.
    async fn delete_form(&self, id: Uuid) -> Result<(), StoreError>;

    /// List all stored forms.
    async fn list_forms(&self) -> Result<Vec<Form>, StoreError>;

    /// Store a response, assigning id and submission time.
    ///
    /// The form id is not required to exist; when it does, the form's
    /// response count is incremented. Answers are stored as given,
    /// never validated against the form's questions.
    async fn submit_response(
        &self,
        form_id: Uuid,
        answers: HashMap<Uuid, Answer>,
    ) -> Result<Response, StoreError>;

    /// Fetch a response by id.
    async fn get_response(&self, id: Uuid) -> Result<Response, StoreError>;

    /// List responses, optionally filtered to one form.
    async fn list_responses(&self, form_id: Option<Uuid>) -> Result<Vec<Response>, StoreError>;
}
