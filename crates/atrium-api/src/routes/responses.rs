//! Response capture and viewing endpoints

use atrium_core::{project_table, FormStore, Response, ResponseDraft, ResponseTable};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, SubmitResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_response))
        .route("/form/:form_id", get(list_responses))
        .route("/form/:form_id/table", get(response_table))
}

/// Submit a completed response
///
/// Validates the submitted draft against its form, then stores it verbatim.
#[utoipa::path(
    post,
    path = "/api/responses",
    request_body = SubmitResponse,
    responses(
        (status = 201, description = "Response captured"),
        (status = 404, description = "Form not found"),
        (status = 422, description = "A required active field has no answer")
    ),
    tag = "responses"
)]
pub async fn submit_response(
    State(state): State<AppState>,
    Json(submission): Json<SubmitResponse>,
) -> Result<(StatusCode, Json<ApiResponse<Response>>), ApiError> {
    let form = state.forms.get_form(submission.form_id).await?;
    let draft = ResponseDraft {
        form_id: submission.form_id,
        values: submission.responses,
    };
    let response = Response::capture(&form.definition, draft)?;
    let stored = state.forms.create_response(response).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(stored))))
}

/// List responses to a form
#[utoipa::path(
    get,
    path = "/api/responses/form/{form_id}",
    params(("form_id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Responses captured against the form")
    ),
    tag = "responses"
)]
pub async fn list_responses(
    Path(form_id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<Vec<Response>> {
    let responses = state.forms.list_responses(form_id).await?;
    Ok(Json(ApiResponse::success(responses)))
}

/// Tabular view of a form's responses
///
/// Columns come from the stored responses, not the current definition, so
/// answers to retired fields stay visible.
#[utoipa::path(
    get,
    path = "/api/responses/form/{form_id}/table",
    params(("form_id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Column set and rows projected from the responses")
    ),
    tag = "responses"
)]
pub async fn response_table(
    Path(form_id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<ResponseTable> {
    let responses = state.forms.list_responses(form_id).await?;
    Ok(Json(ApiResponse::success(project_table(&responses))))
}
