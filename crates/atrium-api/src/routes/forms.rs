//! Form definition endpoints

use atrium_core::{render_plan, FormDefinition, FormStore, RenderedField, StoredForm};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, FormPayload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forms).post(create_form))
        .route("/current", get(current_form))
        .route("/:id", get(get_form).put(update_form).delete(delete_form))
        .route("/:id/set", put(set_current))
        .route("/:id/preview", get(preview_form))
}

fn definition_from(payload: FormPayload) -> FormDefinition {
    let mut definition = FormDefinition::new(payload.title, payload.description);
    definition.fields = payload.fields.into_iter().collect();
    definition
}

/// List all form definitions
#[utoipa::path(
    get,
    path = "/api/forms",
    responses(
        (status = 200, description = "Stored form definitions with activation state")
    ),
    tag = "forms"
)]
pub async fn list_forms(State(state): State<AppState>) -> ApiResult<Vec<StoredForm>> {
    let forms = state.forms.list_forms().await?;
    Ok(Json(ApiResponse::success(forms)))
}

/// Get a form definition by ID
#[utoipa::path(
    get,
    path = "/api/forms/{id}",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form definition"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn get_form(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<StoredForm> {
    let form = state.forms.get_form(id).await?;
    Ok(Json(ApiResponse::success(form)))
}

/// Get the currently active form
#[utoipa::path(
    get,
    path = "/api/forms/current",
    responses(
        (status = 200, description = "The single currently active form"),
        (status = 404, description = "No form is currently active")
    ),
    tag = "forms"
)]
pub async fn current_form(State(state): State<AppState>) -> ApiResult<StoredForm> {
    let current = state.forms.current_form().await?.ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(current)))
}

/// Create a form definition
#[utoipa::path(
    post,
    path = "/api/forms",
    request_body = FormPayload,
    responses(
        (status = 201, description = "Form created, id assigned server-side"),
        (status = 422, description = "A field failed shape validation")
    ),
    tag = "forms"
)]
pub async fn create_form(
    State(state): State<AppState>,
    Json(payload): Json<FormPayload>,
) -> Result<(StatusCode, Json<ApiResponse<StoredForm>>), ApiError> {
    let definition = definition_from(payload);
    // Shape problems are reported here, before the store is involved.
    definition.validate()?;
    let stored = state.forms.create_form(definition).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(stored))))
}

/// Update a form definition
#[utoipa::path(
    put,
    path = "/api/forms/{id}",
    params(("id" = Uuid, Path, description = "Form ID")),
    request_body = FormPayload,
    responses(
        (status = 200, description = "Updated form definition"),
        (status = 404, description = "Form not found"),
        (status = 422, description = "A field failed shape validation")
    ),
    tag = "forms"
)]
pub async fn update_form(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<FormPayload>,
) -> ApiResult<StoredForm> {
    let definition = definition_from(payload);
    definition.validate()?;
    let stored = state.forms.update_form(id, definition).await?;
    Ok(Json(ApiResponse::success(stored)))
}

/// Delete a form definition
#[utoipa::path(
    delete,
    path = "/api/forms/{id}",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form and its responses deleted"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn delete_form(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<()> {
    state.forms.delete_form(id).await?;
    Ok(Json(ApiResponse::success(())))
}

/// Make a form the active one
///
/// Exclusive activation: the previously current form is deactivated in
/// the same transition.
#[utoipa::path(
    put,
    path = "/api/forms/{id}/set",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "The form is now the single active one"),
        (status = 404, description = "Form not found")
    ),
    tag = "forms"
)]
pub async fn set_current(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<StoredForm> {
    state.forms.set_current(id).await?;
    let form = state.forms.get_form(id).await?;
    Ok(Json(ApiResponse::success(form)))
}

/// Preview the render plan of a form
///
/// The plan a client-side renderer would present: one control per active
/// field, in definition order.
#[utoipa::path(
    get,
    path = "/api/forms/{id}/preview",
    params(("id" = Uuid, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Render plan for the form's active fields"),
        (status = 404, description = "Form not found"),
        (status = 422, description = "A field has no renderable control")
    ),
    tag = "forms"
)]
pub async fn preview_form(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<Vec<RenderedField>> {
    let form = state.forms.get_form(id).await?;
    let plan = render_plan(&form.definition)?;
    Ok(Json(ApiResponse::success(plan)))
}
