//! Business directory endpoints

use atrium_core::DirectoryEntry;
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

/// List directory entries
#[utoipa::path(
    get,
    path = "/api/directories",
    responses(
        (status = 200, description = "Business directory entries")
    ),
    tag = "directory"
)]
pub async fn list_entries(State(state): State<AppState>) -> ApiResult<Vec<DirectoryEntry>> {
    Ok(Json(ApiResponse::success(state.directory.list())))
}

/// Get a directory entry by ID
#[utoipa::path(
    get,
    path = "/api/directories/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Directory entry"),
        (status = 404, description = "Entry not found")
    ),
    tag = "directory"
)]
pub async fn get_entry(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<DirectoryEntry> {
    let entry = state.directory.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(entry)))
}

/// Create a directory entry
#[utoipa::path(
    post,
    path = "/api/directories",
    responses(
        (status = 201, description = "Entry created, id assigned server-side")
    ),
    tag = "directory"
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Json(mut entry): Json<DirectoryEntry>,
) -> Result<(StatusCode, Json<ApiResponse<DirectoryEntry>>), ApiError> {
    entry.id = Uuid::new_v4();
    state.directory.insert(entry.clone());
    Ok((StatusCode::CREATED, Json(ApiResponse::success(entry))))
}

/// Replace a directory entry
#[utoipa::path(
    put,
    path = "/api/directories/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Updated entry"),
        (status = 404, description = "Entry not found")
    ),
    tag = "directory"
)]
pub async fn update_entry(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(mut entry): Json<DirectoryEntry>,
) -> ApiResult<DirectoryEntry> {
    entry.id = id;
    if !state.directory.replace(id, entry.clone()) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(entry)))
}

/// Delete a directory entry
#[utoipa::path(
    delete,
    path = "/api/directories/{id}",
    params(("id" = Uuid, Path, description = "Entry ID")),
    responses(
        (status = 200, description = "Entry deleted"),
        (status = 404, description = "Entry not found")
    ),
    tag = "directory"
)]
pub async fn delete_entry(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<()> {
    if !state.directory.remove(id) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(())))
}
