//! Form Builder
//!
//! Holds an in-memory draft definition while the editor works. Edits are
//! validated locally before any persistence call; the draft only becomes
//! canonical after the store accepts it, and survives store failures so
//! the user can correct and retry. No automatic retries.

use uuid::Uuid;

use crate::error::Result;
use crate::form::{FieldTemplate, FormDefinition};
use crate::store::{FormStore, StoredForm};

/// An editing session over one form definition.
#[derive(Clone, Debug)]
pub struct FormBuilder {
    draft: FormDefinition,
    /// Set once the store has accepted the draft; `None` means the next
    /// save goes down the create path.
    saved_id: Option<Uuid>,
}

impl FormBuilder {
    /// Start a new, empty draft.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            draft: FormDefinition::new(title, description),
            saved_id: None,
        }
    }

    /// Edit an already-persisted definition.
    pub fn edit(form: FormDefinition) -> Self {
        let saved_id = Some(form.id);
        Self { draft: form, saved_id }
    }

    pub fn draft(&self) -> &FormDefinition {
        &self.draft
    }

    pub fn is_persisted(&self) -> bool {
        self.saved_id.is_some()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Append a field after validating its shape locally. A rejected
    /// template leaves no partial edit behind.
    pub fn add_field(&mut self, template: FieldTemplate) -> Result<Uuid> {
        template.validate_shape()?;
        Ok(self.draft.add_field(template))
    }

    pub fn remove_field(&mut self, field_id: Uuid) {
        self.draft.remove_field(field_id);
    }

    pub fn add_option(&mut self, field_id: Uuid, option: impl Into<String>) -> Result<()> {
        self.draft.add_option(field_id, option)
    }

    pub fn remove_option(&mut self, field_id: Uuid, index: usize) -> Result<()> {
        self.draft.remove_option(field_id, index)
    }

    pub fn reorder_field(&mut self, field_id: Uuid, index: usize) -> Result<()> {
        self.draft.reorder_field(field_id, index)
    }

    /// Persist the draft: create on first save, update afterwards.
    ///
    /// Validation runs locally first, so a malformed draft never reaches
    /// the collaborator. On success the draft adopts the stored identity
    /// and becomes canonical; on failure it is retained unmodified.
    pub async fn save(&mut self, store: &dyn FormStore) -> Result<StoredForm> {
        self.draft.validate()?;

        let stored = match self.saved_id {
            None => store.create_form(self.draft.clone()).await?,
            Some(id) => store.update_form(id, self.draft.clone()).await?,
        };

        self.draft.id = stored.definition.id;
        self.saved_id = Some(stored.definition.id);
        tracing::info!(form_id = %stored.definition.id, "draft saved");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormsError;
    use crate::form::FieldKind;
    use crate::response::Response;
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    /// A collaborator that refuses everything.
    struct DownStore;

    #[async_trait]
    impl FormStore for DownStore {
        async fn list_forms(&self) -> Result<Vec<StoredForm>> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn get_form(&self, _id: Uuid) -> Result<StoredForm> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn create_form(&self, _form: FormDefinition) -> Result<StoredForm> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn update_form(&self, _id: Uuid, _form: FormDefinition) -> Result<StoredForm> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn delete_form(&self, _id: Uuid) -> Result<()> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn set_current(&self, _id: Uuid) -> Result<()> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn current_form(&self) -> Result<Option<StoredForm>> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn create_response(&self, _response: Response) -> Result<Response> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
        async fn list_responses(&self, _form_id: Uuid) -> Result<Vec<Response>> {
            Err(FormsError::CollaboratorFailure("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_failed_save_retains_draft_for_retry() {
        let mut builder = FormBuilder::new("Feedback", "Tell us");
        builder
            .add_field(FieldTemplate { label: "Comments".into(), ..Default::default() })
            .unwrap();
        let before = builder.draft().clone();

        let err = builder.save(&DownStore).await.unwrap_err();
        assert!(matches!(err, FormsError::CollaboratorFailure(_)));
        assert_eq!(builder.draft(), &before);
        assert!(!builder.is_persisted());

        // Same draft, working store: the retry succeeds as a create.
        let store = MemoryStore::new();
        let stored = builder.save(&store).await.unwrap();
        assert_eq!(stored.definition.title, "Feedback");
        assert!(builder.is_persisted());
    }

    #[tokio::test]
    async fn test_local_validation_precedes_persistence() {
        let mut builder = FormBuilder::new("Survey", "");
        let err = builder
            .add_field(FieldTemplate {
                label: "Color".into(),
                kind: FieldKind::Select,
                options: vec![],
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, FormsError::MissingOptions(_)));
        assert!(builder.draft().fields.is_empty());
    }

    #[tokio::test]
    async fn test_second_save_updates_in_place() {
        let store = MemoryStore::new();
        let mut builder = FormBuilder::new("Survey", "");
        let first = builder.save(&store).await.unwrap();

        builder.set_title("Survey v2");
        let second = builder.save(&store).await.unwrap();

        assert_eq!(first.definition.id, second.definition.id);
        assert_eq!(store.list_forms().await.unwrap().len(), 1);
        assert_eq!(
            store
                .get_form(first.definition.id)
                .await
                .unwrap()
                .definition
                .title,
            "Survey v2"
        );
    }
}
