//! Single-file JSON store backing the CLI.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use formforge_core::error::StoreError;
use formforge_core::model::{Answer, Form, FormDraft, FormPatch, Response};
use formforge_core::traits::FormStore;

use crate::memory::StoreData;

/// A `FormStore` persisted as one JSON document.
///
/// The file is read once at open and rewritten after every mutation.
/// Reads are served from memory. Suited to a single process working
/// against a local data file, which is all the CLI needs.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    data: RwLock<StoreData>,
}

impl JsonStore {
    /// Open a store at `path`. A missing file starts empty; it is
    /// created on the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let data = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            StoreData::default()
        };
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, data: &StoreData) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "store persisted");
        Ok(())
    }
}

#[async_trait]
impl FormStore for JsonStore {
    async fn create_form(&self, draft: FormDraft) -> Result<Form, StoreError> {
        let mut data = self.data.write().await;
        let form = data.create_form(draft);
        self.persist(&data)?;
        Ok(form)
    }

    async fn get_form(&self, id: Uuid) -> Result<Form, StoreError> {
        self.data.read().await.get_form(id)
    }

    async fn update_form(&self, id: Uuid, patch: FormPatch) -> Result<Form, StoreError> {
        let mut data = self.data.write().await;
        let form = data.update_form(id, patch)?;
        self.persist(&data)?;
        Ok(form)
    }

    async fn delete_form(&self, id: Uuid) -> Result<(), StoreError> {
        let mut data = self.data.write().await;
        data.delete_form(id)?;
        self.persist(&data)?;
        Ok(())
    }

    async fn list_forms(&self) -> Result<Vec<Form>, StoreError> {
        Ok(self.data.read().await.list_forms())
    }

    async fn submit_response(
        &self,
        form_id: Uuid,
        answers: HashMap<Uuid, Answer>,
    ) -> Result<Response, StoreError> {
        let mut data = self.data.write().await;
        let response = data.submit_response(form_id, answers);
        self.persist(&data)?;
        Ok(response)
    }

    async fn get_response(&self, id: Uuid) -> Result<Response, StoreError> {
        self.data.read().await.get_response(id)
    }

    async fn list_responses(&self, form_id: Option<Uuid>) -> Result<Vec<Response>, StoreError> {
        Ok(self.data.read().await.list_responses(form_id))
    }
}
