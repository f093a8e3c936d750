//! In-memory store for tests and embedding.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::warn;
use uuid::Uuid;

use formforge_core::error::StoreError;
use formforge_core::model::{Answer, Form, FormDraft, FormPatch, Response};
use formforge_core::traits::FormStore;

/// The plain data both store implementations operate on.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct StoreData {
    #[serde(default)]
    pub forms: HashMap<Uuid, Form>,
    #[serde(default)]
    pub responses: HashMap<Uuid, Response>,
}

impl StoreData {
    pub fn create_form(&mut self, draft: FormDraft) -> Form {
        let form = Form {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            header_image: draft.header_image,
            questions: draft.questions,
            created_at: Utc::now(),
            response_count: 0,
        };
        self.forms.insert(form.id, form.clone());
        form
    }

    pub fn get_form(&self, id: Uuid) -> Result<Form, StoreError> {
        self.forms
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { entity: "form", id })
    }

    pub fn update_form(&mut self, id: Uuid, patch: FormPatch) -> Result<Form, StoreError> {
        let form = self
            .forms
            .get_mut(&id)
            .ok_or(StoreError::NotFound { entity: "form", id })?;
        form.apply_patch(patch);
        Ok(form.clone())
    }

    pub fn delete_form(&mut self, id: Uuid) -> Result<(), StoreError> {
        // Responses are deliberately kept; they reference the form only
        // by id.
        self.forms
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { entity: "form", id })
    }

    pub fn list_forms(&self) -> Vec<Form> {
        let mut forms: Vec<Form> = self.forms.values().cloned().collect();
        forms.sort_by_key(|f| (f.created_at, f.id));
        forms
    }

    pub fn submit_response(&mut self, form_id: Uuid, answers: HashMap<Uuid, Answer>) -> Response {
        let response = Response {
            id: Uuid::new_v4(),
            form_id,
            answers,
            submitted_at: Utc::now(),
        };
        self.responses.insert(response.id, response.clone());

        match self.forms.get_mut(&form_id) {
            Some(form) => form.response_count += 1,
            None => warn!(%form_id, "response submitted against unknown form"),
        }

        response
    }

    pub fn get_response(&self, id: Uuid) -> Result<Response, StoreError> {
        self.responses.get(&id).cloned().ok_or(StoreError::NotFound {
            entity: "response",
            id,
        })
    }

    pub fn list_responses(&self, form_id: Option<Uuid>) -> Vec<Response> {
        let mut responses: Vec<Response> = self
            .responses
            .values()
            .filter(|r| form_id.is_none_or(|id| r.form_id == id))
            .cloned()
            .collect();
        responses.sort_by_key(|r| (r.submitted_at, r.id));
        responses
    }
}

/// An in-memory `FormStore` for tests and embedding. Nothing is
/// persisted; dropping the store drops the data.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn create_form(&self, draft: FormDraft) -> Result<Form, StoreError> {
        Ok(self.data.write().await.create_form(draft))
    }

    async fn get_form(&self, id: Uuid) -> Result<Form, StoreError> {
        self.data.read().await.get_form(id)
    }

    async fn update_form(&self, id: Uuid, patch: FormPatch) -> Result<Form, StoreError> {
        self.data.write().await.update_form(id, patch)
    }

    async fn delete_form(&self, id: Uuid) -> Result<(), StoreError> {
        self.data.write().await.delete_form(id)
    }

    async fn list_forms(&self) -> Result<Vec<Form>, StoreError> {
        Ok(self.data.read().await.list_forms())
    }

    async fn submit_response(
        &self,
        form_id: Uuid,
        answers: HashMap<Uuid, Answer>,
    ) -> Result<Response, StoreError> {
        Ok(self.data.write().await.submit_response(form_id, answers))
    }

    async fn get_response(&self, id: Uuid) -> Result<Response, StoreError> {
        self.data.read().await.get_response(id)
    }

    async fn list_responses(&self, form_id: Option<Uuid>) -> Result<Vec<Response>, StoreError> {
        Ok(self.data.read().await.list_responses(form_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::model::{Question, QuestionKind};

    fn draft(title: &str) -> FormDraft {
        FormDraft {
            title: title.into(),
            description: String::new(),
            header_image: None,
            questions: vec![Question::new(QuestionKind::Cloze)],
        }
    }

    #[tokio::test]
    async fn create_and_get_form() {
        let store = MemoryStore::new();
        let form = store.create_form(draft("Quiz")).await.unwrap();

        assert_eq!(form.title, "Quiz");
        assert_eq!(form.response_count, 0);

        let fetched = store.get_form(form.id).await.unwrap();
        assert_eq!(fetched.id, form.id);
        assert_eq!(fetched.questions.len(), 1);
    }

    #[tokio::test]
    async fn get_missing_form_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_form(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn update_merges_shallowly() {
        let store = MemoryStore::new();
        let form = store.create_form(draft("Before")).await.unwrap();

        let updated = store
            .update_form(
                form.id,
                FormPatch {
                    title: Some("After".into()),
                    ..FormPatch::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "After");
        assert_eq!(updated.questions.len(), 1);
    }

    #[tokio::test]
    async fn update_missing_form_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update_form(Uuid::new_v4(), FormPatch::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn submission_increments_response_count() {
        let store = MemoryStore::new();
        let form = store.create_form(draft("Quiz")).await.unwrap();

        store.submit_response(form.id, HashMap::new()).await.unwrap();
        store.submit_response(form.id, HashMap::new()).await.unwrap();

        let form = store.get_form(form.id).await.unwrap();
        assert_eq!(form.response_count, 2);
    }

    #[tokio::test]
    async fn submission_against_unknown_form_is_stored() {
        let store = MemoryStore::new();
        let response = store
            .submit_response(Uuid::new_v4(), HashMap::new())
            .await
            .unwrap();

        let fetched = store.get_response(response.id).await.unwrap();
        assert_eq!(fetched.form_id, response.form_id);
    }

    #[tokio::test]
    async fn responses_survive_form_deletion() {
        let store = MemoryStore::new();
        let form = store.create_form(draft("Quiz")).await.unwrap();
        let response = store.submit_response(form.id, HashMap::new()).await.unwrap();

        store.delete_form(form.id).await.unwrap();
        assert!(store.get_form(form.id).await.unwrap_err().is_not_found());

        let fetched = store.get_response(response.id).await.unwrap();
        assert_eq!(fetched.form_id, form.id);
    }

    #[tokio::test]
    async fn delete_missing_form_is_not_found() {
        let store = MemoryStore::new();
        let err = store.delete_form(Uuid::new_v4()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_responses_filters_by_form() {
        let store = MemoryStore::new();
        let form_a = store.create_form(draft("A")).await.unwrap();
        let form_b = store.create_form(draft("B")).await.unwrap();

        store.submit_response(form_a.id, HashMap::new()).await.unwrap();
        store.submit_response(form_b.id, HashMap::new()).await.unwrap();
        store.submit_response(form_b.id, HashMap::new()).await.unwrap();

        assert_eq!(store.list_responses(None).await.unwrap().len(), 3);
        assert_eq!(
            store.list_responses(Some(form_b.id)).await.unwrap().len(),
            2
        );
        assert_eq!(
            store.list_responses(Some(form_a.id)).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn list_forms_returns_all() {
        let store = MemoryStore::new();
        store.create_form(draft("One")).await.unwrap();
        store.create_form(draft("Two")).await.unwrap();

        let forms = store.list_forms().await.unwrap();
        assert_eq!(forms.len(), 2);
    }
}
