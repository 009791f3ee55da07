//! History timeline endpoints

use atrium_core::HistoryEntry;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::ApiResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", get(get_entry).put(update_entry).delete(delete_entry))
}

/// List history entries in timeline order
#[utoipa::path(
    get,
    path = "/api/history",
    responses(
        (status = 200, description = "History entries sorted by curated index")
    ),
    tag = "history"
)]
pub async fn list_entries(State(state): State<AppState>) -> ApiResult<Vec<HistoryEntry>> {
    let mut entries = state.history.list();
    // Timeline order is the curated index, not insertion order.
    entries.sort_by_key(|e| e.index);
    Ok(Json(ApiResponse::success(entries)))
}

/// Get a history entry by ID
#[utoipa::path(
    get,
    path = "/api/history/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "History entry"),
        (status = 404, description = "Entry not found")
    ),
    tag = "history"
)]
pub async fn get_entry(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<HistoryEntry> {
    let entry = state.history.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(entry)))
}

/// Create a history entry
#[utoipa::path(
    post,
    path = "/api/history",
    responses(
        (status = 201, description = "Entry created, id assigned server-side")
    ),
    tag = "history"
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(mut entry): Json<HistoryEntry>,
) -> Result<(StatusCode, Json<ApiResponse<HistoryEntry>>), ApiError> {
    entry.id = Uuid::new_v4();
    state.history.insert(entry.clone());
    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

/// Replace a history entry
#[utoipa::path(
    put,
    path = "/api/history/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Updated entry"),
        (status = 404, description = "Entry not found")
    ),
    tag = "history"
)]
pub async fn update_entry(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(mut entry): Json<HistoryEntry>,
) -> ApiResult<HistoryEntry> {
    entry.id = id;
    if !state.history.replace(id, entry.clone()) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(entry)))
}

/// Delete a history entry
#[utoipa::path(
    delete,
    path = "/api/history/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    ),
    tag = "history"
)]
pub async fn delete_entry(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<()> {
    if !state.history.remove(id) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(())))
}
