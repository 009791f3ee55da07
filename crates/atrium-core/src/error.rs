//! Error Types

use thiserror::Error;
use uuid::Uuid;

/// Domain errors for form editing, capture and storage.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormsError {
    #[error("unrecognized field kind: {0}")]
    InvalidFieldKind(String),

    #[error("field kind '{0}' requires at least one non-blank option")]
    MissingOptions(String),

    #[error("field not found: {0}")]
    FieldNotFound(Uuid),

    #[error("no input control for field kind: {0}")]
    UnsupportedFieldKind(String),

    #[error("required field missing: {0}")]
    RequiredFieldMissing(Uuid),

    #[error("not found")]
    NotFound,

    #[error("storage failure: {0}")]
    CollaboratorFailure(String),
}

pub type Result<T> = std::result::Result<T, FormsError>;
