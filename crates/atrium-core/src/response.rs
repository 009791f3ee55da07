//! Response Capture and Viewing
//!
//! A response is a snapshot of answers against a form definition as it
//! existed at submission time. The definition may change shape afterwards;
//! stored responses are never rewritten to match.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FormsError, Result};
use crate::form::FormDefinition;
use crate::render::{Answer, ResponseDraft};

/// A captured set of answers, keyed by field id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub form_id: Uuid,
    #[serde(default)]
    pub responses: BTreeMap<Uuid, Answer>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Check a draft against the definition it was collected for.
///
/// Every `required` and active field must have a non-empty answer; an
/// empty string and an empty choice set both count as missing. Answers
/// for fields absent from the definition are tolerated, never rejected.
pub fn validate_response(form: &FormDefinition, draft: &ResponseDraft) -> Result<()> {
    for field in &form.fields {
        if !(field.required && field.is_active) {
            continue;
        }
        match draft.get(field.id) {
            Some(answer) if !answer.is_empty() => {}
            _ => return Err(FormsError::RequiredFieldMissing(field.id)),
        }
    }
    Ok(())
}

impl Response {
    /// Validate a draft and freeze it into a response. The answers are
    /// stored verbatim, including entries for fields the definition no
    /// longer (or does not yet) contain.
    pub fn capture(form: &FormDefinition, draft: ResponseDraft) -> Result<Self> {
        validate_response(form, &draft)?;
        Ok(Self {
            id: Uuid::new_v4(),
            form_id: draft.form_id,
            responses: draft.values,
            created_at: Utc::now(),
        })
    }
}

// =============================================================================
// Response Viewer
// =============================================================================

/// Column label for the fixed trailing capture-time column.
pub const CREATED_AT_COLUMN: &str = "created_at";

/// A tabular projection of heterogeneous responses to one form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseTable {
    /// Field-id columns in first-seen order, then [`CREATED_AT_COLUMN`].
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Project responses into a table.
///
/// Columns are the union of keys present across the given responses, not
/// the current definition's fields: historical responses may reference
/// retired fields and newer responses fields that did not exist yet.
/// Missing cells render empty; rows are never dropped.
pub fn project_table(responses: &[Response]) -> ResponseTable {
    let mut field_columns: Vec<Uuid> = Vec::new();
    for response in responses {
        for field_id in response.responses.keys() {
            if !field_columns.contains(field_id) {
                field_columns.push(*field_id);
            }
        }
    }

    let rows = responses
        .iter()
        .map(|response| {
            let mut row: Vec<String> = field_columns
                .iter()
                .map(|id| {
                    response
                        .responses
                        .get(id)
                        .map(Answer::display)
                        .unwrap_or_default()
                })
                .collect();
            row.push(response.created_at.to_rfc3339());
            row
        })
        .collect();

    let mut columns: Vec<String> = field_columns.iter().map(Uuid::to_string).collect();
    columns.push(CREATED_AT_COLUMN.into());

    ResponseTable { columns, rows }
}
