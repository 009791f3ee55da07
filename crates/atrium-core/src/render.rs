//! Form Renderer
//!
//! Turns a form definition into a render plan of input controls and
//! accumulates a response draft while the respondent types. The widget
//! toolkit that draws the controls is an external collaborator; this
//! module only decides what to present and what was collected.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FormsError, Result};
use crate::form::{FieldDefinition, FieldKind, FormDefinition};

// =============================================================================
// Controls
// =============================================================================

/// The input control presented for a field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput,
    EmailInput,
    TextArea,
    SelectOne { options: Vec<String> },
    RadioGroup { options: Vec<String> },
    CheckboxGroup { options: Vec<String> },
}

impl Control {
    /// Total dispatch over the field kind. An unrecognized kind is a
    /// visible failure, never an empty render.
    pub fn for_field(field: &FieldDefinition) -> Result<Self> {
        match &field.kind {
            FieldKind::Text => Ok(Self::TextInput),
            FieldKind::Email => Ok(Self::EmailInput),
            FieldKind::Textarea => Ok(Self::TextArea),
            FieldKind::Select => Ok(Self::SelectOne { options: field.options.clone() }),
            FieldKind::Radio => Ok(Self::RadioGroup { options: field.options.clone() }),
            FieldKind::Checkbox => Ok(Self::CheckboxGroup { options: field.options.clone() }),
            FieldKind::Unknown(kind) => Err(FormsError::UnsupportedFieldKind(kind.clone())),
        }
    }
}

/// One entry of a render plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderedField {
    pub field_id: Uuid,
    pub label: String,
    pub required: bool,
    #[serde(flatten)]
    pub control: Control,
}

/// Build the render plan for a definition: one control per active field,
/// in definition order. Inactive fields stay in the definition but are
/// omitted here.
pub fn render_plan(form: &FormDefinition) -> Result<Vec<RenderedField>> {
    form.fields
        .iter()
        .filter(|f| f.is_active)
        .map(|f| {
            Ok(RenderedField {
                field_id: f.id,
                label: f.label.clone(),
                required: f.required,
                control: Control::for_field(f)?,
            })
        })
        .collect()
}

// =============================================================================
// Answers and Drafts
// =============================================================================

/// A collected value: a string for scalar kinds, a set of chosen
/// options for checkbox groups.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Choices(BTreeSet<String>),
}

impl Answer {
    /// An empty string and an empty set both count as "no answer".
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::Choices(chosen) => chosen.is_empty(),
        }
    }

    /// Single-cell rendering for the response table.
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Choices(chosen) => chosen.iter().cloned().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Answers accumulated while a respondent fills in a form.
///
/// Every edit replaces only the targeted field's entry; sibling answers
/// are never rebuilt or lost between keystrokes.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResponseDraft {
    pub form_id: Uuid,
    #[serde(default)]
    pub values: BTreeMap<Uuid, Answer>,
}

impl ResponseDraft {
    pub fn new(form_id: Uuid) -> Self {
        Self { form_id, values: BTreeMap::new() }
    }

    /// Replace the scalar answer for one field.
    pub fn set_text(&mut self, field_id: Uuid, value: impl Into<String>) {
        self.values.insert(field_id, Answer::Text(value.into()));
    }

    /// Toggle a single option of a checkbox group. Other chosen options
    /// and other fields are untouched.
    pub fn set_choice(&mut self, field_id: Uuid, option: impl Into<String>, selected: bool) {
        let entry = self
            .values
            .entry(field_id)
            .or_insert_with(|| Answer::Choices(BTreeSet::new()));
        // A scalar answer left over from a kind change is replaced wholesale.
        if !matches!(entry, Answer::Choices(_)) {
            *entry = Answer::Choices(BTreeSet::new());
        }
        if let Answer::Choices(chosen) = entry {
            let option = option.into();
            if selected {
                chosen.insert(option);
            } else {
                chosen.remove(&option);
            }
        }
    }

    pub fn get(&self, field_id: Uuid) -> Option<&Answer> {
        self.values.get(&field_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldTemplate;

    fn survey() -> FormDefinition {
        let mut form = FormDefinition::new("Survey", "");
        form.add_field(FieldTemplate { label: "Name".into(), ..Default::default() });
        form.add_field(FieldTemplate {
            label: "Color".into(),
            kind: FieldKind::Select,
            options: vec!["Red".into(), "Blue".into()],
            ..Default::default()
        });
        form.add_field(FieldTemplate {
            label: "Toppings".into(),
            kind: FieldKind::Checkbox,
            options: vec!["A".into(), "B".into(), "C".into()],
            ..Default::default()
        });
        form
    }

    #[test]
    fn test_render_plan_dispatches_by_kind() {
        let form = survey();
        let plan = render_plan(&form).unwrap();

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].control, Control::TextInput);
        assert_eq!(
            plan[1].control,
            Control::SelectOne { options: vec!["Red".into(), "Blue".into()] }
        );
        assert_eq!(
            plan[2].control,
            Control::CheckboxGroup { options: vec!["A".into(), "B".into(), "C".into()] }
        );
    }

    #[test]
    fn test_render_plan_omits_inactive_fields() {
        let mut form = survey();
        let first = form.fields.iter().next().unwrap().id;
        form.fields.update(first, |f| f.is_active = false);

        let plan = render_plan(&form).unwrap();
        assert_eq!(plan.len(), 2);
        assert!(plan.iter().all(|r| r.field_id != first));
    }

    #[test]
    fn test_render_plan_fails_loudly_on_unknown_kind() {
        let mut form = survey();
        let first = form.fields.iter().next().unwrap().id;
        form.fields
            .update(first, |f| f.kind = FieldKind::Unknown("signature".into()));

        assert_eq!(
            render_plan(&form),
            Err(FormsError::UnsupportedFieldKind("signature".into()))
        );
    }

    #[test]
    fn test_draft_edits_merge_per_field() {
        let mut draft = ResponseDraft::new(Uuid::new_v4());
        let name = Uuid::new_v4();
        let color = Uuid::new_v4();

        draft.set_text(name, "Ada");
        draft.set_text(color, "Red");
        draft.set_text(name, "Ada L.");

        assert_eq!(draft.get(name), Some(&Answer::Text("Ada L.".into())));
        assert_eq!(draft.get(color), Some(&Answer::Text("Red".into())));
    }

    #[test]
    fn test_checkbox_choices_accumulate_as_a_set() {
        let mut draft = ResponseDraft::new(Uuid::new_v4());
        let toppings = Uuid::new_v4();

        draft.set_choice(toppings, "A", true);
        draft.set_choice(toppings, "C", true);
        draft.set_choice(toppings, "B", true);
        draft.set_choice(toppings, "B", false);

        let expected: BTreeSet<String> = ["A".to_string(), "C".to_string()].into();
        assert_eq!(draft.get(toppings), Some(&Answer::Choices(expected)));
    }

    #[test]
    fn test_answer_emptiness() {
        assert!(Answer::Text(String::new()).is_empty());
        assert!(Answer::Choices(BTreeSet::new()).is_empty());
        assert!(!Answer::Text("x".into()).is_empty());
    }
}
