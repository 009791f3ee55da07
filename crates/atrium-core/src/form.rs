//! Form Definition Model
//!
//! A form is an ordered set of typed field definitions plus metadata.
//! Definitions are edited by the builder and only read by the renderer
//! and response capture.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FormsError, Result};
use crate::records::{Keyed, Records};

// =============================================================================
// Field Kinds
// =============================================================================

/// The closed set of input kinds a field can take.
///
/// `Unknown` only exists so that definitions written by a newer producer
/// deserialize without loss; it is rejected by [`FieldDefinition::validate_shape`]
/// and every dispatch site must handle it explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Select,
    Checkbox,
    Radio,
    Textarea,
    #[serde(untagged)]
    Unknown(String),
}

impl FieldKind {
    /// Kinds that present a fixed set of choices to the respondent.
    pub fn requires_options(&self) -> bool {
        matches!(self, Self::Select | Self::Checkbox | Self::Radio)
    }

    /// Whether multiple choices may be collected at once.
    pub fn is_multi_value(&self) -> bool {
        matches!(self, Self::Checkbox)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Email => write!(f, "email"),
            Self::Select => write!(f, "select"),
            Self::Checkbox => write!(f, "checkbox"),
            Self::Radio => write!(f, "radio"),
            Self::Textarea => write!(f, "textarea"),
            Self::Unknown(kind) => write!(f, "{kind}"),
        }
    }
}

// =============================================================================
// Field Definitions
// =============================================================================

/// One typed input slot within a form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    /// Inactive fields stay in the definition (historical responses still
    /// reference them) but are not presented to respondents.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Keyed for FieldDefinition {
    fn key(&self) -> Uuid {
        self.id
    }
}

fn check_shape(kind: &FieldKind, options: &[String]) -> Result<()> {
    if let FieldKind::Unknown(kind) = kind {
        return Err(FormsError::InvalidFieldKind(kind.clone()));
    }
    if kind.requires_options()
        && (options.is_empty() || options.iter().any(|o| o.trim().is_empty()))
    {
        return Err(FormsError::MissingOptions(kind.to_string()));
    }
    Ok(())
}

impl FieldDefinition {
    /// Syntactic validation. No side effects.
    pub fn validate_shape(&self) -> Result<()> {
        check_shape(&self.kind, &self.options)
    }
}

/// Field input for the builder; the definition id is assigned on append.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FieldTemplate {
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl FieldTemplate {
    /// Same shape rules as a stored definition's.
    pub fn validate_shape(&self) -> Result<()> {
        check_shape(&self.kind, &self.options)
    }
}

impl Default for FieldTemplate {
    fn default() -> Self {
        Self {
            label: String::new(),
            kind: FieldKind::Text,
            options: Vec::new(),
            required: false,
            is_active: true,
        }
    }
}

// =============================================================================
// Form Definitions
// =============================================================================

/// A named, ordered set of field definitions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormDefinition {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Records<FieldDefinition>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Keyed for FormDefinition {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl FormDefinition {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            fields: Records::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a field with a fresh id; returns the assigned id.
    pub fn add_field(&mut self, template: FieldTemplate) -> Uuid {
        let field = FieldDefinition {
            id: Uuid::new_v4(),
            label: template.label,
            kind: template.kind,
            options: template.options,
            required: template.required,
            is_active: template.is_active,
        };
        let id = field.id;
        self.fields.push(field);
        self.touch();
        id
    }

    /// Remove a field by id. Idempotent: an absent id is a no-op.
    pub fn remove_field(&mut self, field_id: Uuid) {
        if self.fields.remove(field_id) {
            self.touch();
        }
    }

    /// Append an option to the targeted field's option list.
    pub fn add_option(&mut self, field_id: Uuid, option: impl Into<String>) -> Result<()> {
        let option = option.into();
        if !self.fields.update(field_id, |f| f.options.push(option)) {
            return Err(FormsError::FieldNotFound(field_id));
        }
        self.touch();
        Ok(())
    }

    /// Remove the option at `index` from the targeted field. An
    /// out-of-bounds index is a no-op.
    pub fn remove_option(&mut self, field_id: Uuid, index: usize) -> Result<()> {
        if !self.fields.update(field_id, |f| {
            if index < f.options.len() {
                f.options.remove(index);
            }
        }) {
            return Err(FormsError::FieldNotFound(field_id));
        }
        self.touch();
        Ok(())
    }

    /// Move a field to a new position. Display order is significant.
    pub fn reorder_field(&mut self, field_id: Uuid, index: usize) -> Result<()> {
        if !self.fields.move_to(field_id, index) {
            return Err(FormsError::FieldNotFound(field_id));
        }
        self.touch();
        Ok(())
    }

    /// Validate every field's shape.
    pub fn validate(&self) -> Result<()> {
        for field in &self.fields {
            field.validate_shape()?;
        }
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
