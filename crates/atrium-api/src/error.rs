//! API Error Mapping

use atrium_core::FormsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ApiResponse;

/// Wrapper that turns domain errors into enveloped HTTP responses.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub FormsError);

impl ApiError {
    pub fn not_found() -> Self {
        Self(FormsError::NotFound)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self.0 {
            FormsError::InvalidFieldKind(_) => (StatusCode::UNPROCESSABLE_ENTITY, "invalid_field_kind"),
            FormsError::MissingOptions(_) => (StatusCode::UNPROCESSABLE_ENTITY, "missing_options"),
            FormsError::UnsupportedFieldKind(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unsupported_field_kind")
            }
            FormsError::RequiredFieldMissing(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "required_field_missing")
            }
            FormsError::FieldNotFound(_) => (StatusCode::NOT_FOUND, "field_not_found"),
            FormsError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
            FormsError::CollaboratorFailure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "storage_failure")
            }
        };
        if status.is_server_error() {
            tracing::error!(%code, error = %self.0, "request failed");
        }
        (status, Json(ApiResponse::<()>::error(code, &self.0.to_string()))).into_response()
    }
}

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiError>;
