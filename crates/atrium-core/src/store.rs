//! Form Persistence Collaborator
//!
//! The builder and the API talk to storage through [`FormStore`]; the
//! in-process [`MemoryStore`] is the only implementation shipped here.
//! Ids are assigned by the store on create. The current-form swap is
//! atomic from a reader's point of view.

use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FormsError, Result};
use crate::form::FormDefinition;
use crate::registry::Registry;
use crate::response::Response;

/// A stored definition plus its activation state, as listed to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredForm {
    #[serde(flatten)]
    pub definition: FormDefinition,
    /// Computed from the store's single current slot.
    pub is_active: bool,
}

/// Persistence contract for form definitions and captured responses.
#[async_trait]
pub trait FormStore: Send + Sync {
    async fn list_forms(&self) -> Result<Vec<StoredForm>>;

    async fn get_form(&self, id: Uuid) -> Result<StoredForm>;

    /// Store a new definition. The id is assigned here; the input's id
    /// is discarded.
    async fn create_form(&self, form: FormDefinition) -> Result<StoredForm>;

    async fn update_form(&self, id: Uuid, form: FormDefinition) -> Result<StoredForm>;

    async fn delete_form(&self, id: Uuid) -> Result<()>;

    /// Exclusive activation: the previous current form is deactivated
    /// and this one activated in one transition, or neither changes.
    async fn set_current(&self, id: Uuid) -> Result<()>;

    async fn current_form(&self) -> Result<Option<StoredForm>>;

    /// Store a captured response verbatim.
    async fn create_response(&self, response: Response) -> Result<Response>;

    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<Response>>;
}

/// In-memory store backing the portal.
#[derive(Default)]
pub struct MemoryStore {
    forms: Registry<FormDefinition>,
    responses: DashMap<Uuid, Vec<Response>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            forms: Registry::new(),
            responses: DashMap::new(),
        }
    }

    fn stored(&self, definition: FormDefinition) -> StoredForm {
        let is_active = self.forms.is_current(definition.id);
        StoredForm { definition, is_active }
    }
}

#[async_trait]
impl FormStore for MemoryStore {
    async fn list_forms(&self) -> Result<Vec<StoredForm>> {
        Ok(self
            .forms
            .list()
            .into_iter()
            .map(|f| self.stored(f))
            .collect())
    }

    async fn get_form(&self, id: Uuid) -> Result<StoredForm> {
        self.forms
            .get(id)
            .map(|f| self.stored(f))
            .ok_or(FormsError::NotFound)
    }

    async fn create_form(&self, mut form: FormDefinition) -> Result<StoredForm> {
        form.id = Uuid::new_v4();
        tracing::info!(form_id = %form.id, title = %form.title, "form created");
        self.forms.insert(form.clone());
        Ok(self.stored(form))
    }

    async fn update_form(&self, id: Uuid, mut form: FormDefinition) -> Result<StoredForm> {
        form.id = id;
        if !self.forms.replace(id, form.clone()) {
            return Err(FormsError::NotFound);
        }
        tracing::debug!(form_id = %id, "form updated");
        Ok(self.stored(form))
    }

    async fn delete_form(&self, id: Uuid) -> Result<()> {
        if !self.forms.remove(id) {
            return Err(FormsError::NotFound);
        }
        self.responses.remove(&id);
        Ok(())
    }

    async fn set_current(&self, id: Uuid) -> Result<()> {
        if !self.forms.set_current(id) {
            return Err(FormsError::NotFound);
        }
        tracing::info!(form_id = %id, "form set current");
        Ok(())
    }

    async fn current_form(&self) -> Result<Option<StoredForm>> {
        Ok(self.forms.current().map(|f| self.stored(f)))
    }

    async fn create_response(&self, response: Response) -> Result<Response> {
        self.responses
            .entry(response.form_id)
            .or_default()
            .push(response.clone());
        tracing::debug!(form_id = %response.form_id, "response stored");
        Ok(response)
    }

    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<Response>> {
        Ok(self
            .responses
            .get(&form_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldTemplate;
    use crate::render::ResponseDraft;

    #[tokio::test]
    async fn test_create_assigns_server_side_id() {
        let store = MemoryStore::new();
        let mut form = FormDefinition::new("Contact", "");
        let client_id = form.id;
        form.add_field(FieldTemplate { label: "Name".into(), ..Default::default() });

        let stored = store.create_form(form).await.unwrap();
        assert_ne!(stored.definition.id, client_id);

        // Round-trip: structurally equal fields after re-fetch.
        let fetched = store.get_form(stored.definition.id).await.unwrap();
        assert_eq!(fetched.definition.fields, stored.definition.fields);
    }

    #[tokio::test]
    async fn test_exclusive_activation_transitions() {
        let store = MemoryStore::new();
        let a = store.create_form(FormDefinition::new("A", "")).await.unwrap();
        let b = store.create_form(FormDefinition::new("B", "")).await.unwrap();
        let (a_id, b_id) = (a.definition.id, b.definition.id);

        store.set_current(a_id).await.unwrap();
        store.set_current(b_id).await.unwrap();

        let listed = store.list_forms().await.unwrap();
        let active: Vec<_> = listed.iter().filter(|f| f.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].definition.id, b_id);
        assert_eq!(
            store.current_form().await.unwrap().unwrap().definition.id,
            b_id
        );
    }

    #[tokio::test]
    async fn test_set_current_unknown_form_changes_nothing() {
        let store = MemoryStore::new();
        let a = store.create_form(FormDefinition::new("A", "")).await.unwrap();
        store.set_current(a.definition.id).await.unwrap();

        assert_eq!(
            store.set_current(Uuid::new_v4()).await,
            Err(FormsError::NotFound)
        );
        assert!(store.get_form(a.definition.id).await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_responses_are_stored_and_listed_per_form() {
        let store = MemoryStore::new();
        let form = store.create_form(FormDefinition::new("A", "")).await.unwrap();
        let form_id = form.definition.id;

        let mut draft = ResponseDraft::new(form_id);
        draft.set_text(Uuid::new_v4(), "hello");
        let response = Response::capture(&form.definition, draft).unwrap();
        store.create_response(response.clone()).await.unwrap();

        let listed = store.list_responses(form_id).await.unwrap();
        assert_eq!(listed, vec![response]);
        assert!(store.list_responses(Uuid::new_v4()).await.unwrap().is_empty());
    }
}
