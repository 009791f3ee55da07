//! Navigation layout endpoints

use atrium_core::{NavLayout, RouteEntry};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, LayoutPayload, RouteUpdate};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_layouts).post(create_layout))
        .route("/current", get(current_layout))
        .route("/:id", get(get_layout).put(update_layout).delete(delete_layout))
        .route("/:id/set", put(set_current))
        .route("/:id/routes", post(add_route))
        .route("/:id/routes/:route_id", put(update_route).delete(remove_route))
}

/// Listed layouts carry an `is_current` flag computed from the registry's
/// exclusive slot.
#[derive(serde::Serialize, serde::Deserialize)]
pub struct LayoutView {
    #[serde(flatten)]
    pub layout: NavLayout,
    pub is_current: bool,
}

fn view(state: &AppState, layout: NavLayout) -> LayoutView {
    let is_current = state.layouts.is_current(layout.id);
    LayoutView { layout, is_current }
}

/// List all navigation layouts
#[utoipa::path(
    get,
    path = "/api/layouts",
    responses(
        (status = 200, description = "Layouts with their current-selection flag")
    ),
    tag = "layouts"
)]
pub async fn list_layouts(State(state): State<AppState>) -> ApiResult<Vec<LayoutView>> {
    let layouts = state
        .layouts
        .list()
        .into_iter()
        .map(|l| view(&state, l))
        .collect();
    Ok(Json(ApiResponse::success(layouts)))
}

/// Get a layout by ID
#[utoipa::path(
    get,
    path = "/api/layouts/{id}",
    params(("id" = Uuid, Path, description = "Layout ID")),
    responses(
        (status = 200, description = "Layout details"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn get_layout(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<LayoutView> {
    let layout = state.layouts.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, layout))))
}

/// Get the layout currently in effect
#[utoipa::path(
    get,
    path = "/api/layouts/current",
    responses(
        (status = 200, description = "The single layout currently in effect"),
        (status = 404, description = "No layout is currently set")
    ),
    tag = "layouts"
)]
pub async fn current_layout(State(state): State<AppState>) -> ApiResult<LayoutView> {
    let layout = state.layouts.current().ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, layout))))
}

/// Create a layout
#[utoipa::path(
    post,
    path = "/api/layouts",
    request_body = LayoutPayload,
    responses(
        (status = 201, description = "Layout created")
    ),
    tag = "layouts"
)]
pub async fn create_layout(
    State(state): State<AppState>,
    Json(payload): Json<LayoutPayload>,
) -> Result<(StatusCode, Json<ApiResponse<LayoutView>>), ApiError> {
    let mut layout = NavLayout::new(payload.name);
    for route in payload.routes {
        layout.add_route(route);
    }
    state.layouts.insert(layout.clone());
    tracing::info!(layout_id = %layout.id, "layout created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(view(&state, layout)))))
}

/// Replace a layout's name and routes
#[utoipa::path(
    put,
    path = "/api/layouts/{id}",
    params(("id" = Uuid, Path, description = "Layout ID")),
    request_body = LayoutPayload,
    responses(
        (status = 200, description = "Updated layout"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn update_layout(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<LayoutPayload>,
) -> ApiResult<LayoutView> {
    let updated = state
        .layouts
        .update(id, |layout| {
            layout.name = payload.name.clone();
            layout.routes = payload.routes.iter().cloned().collect();
        })
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}

/// Delete a layout
#[utoipa::path(
    delete,
    path = "/api/layouts/{id}",
    params(("id" = Uuid, Path, description = "Layout ID")),
    responses(
        (status = 200, description = "Layout deleted"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn delete_layout(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<()> {
    if !state.layouts.remove(id) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(())))
}

/// Make a layout the one in effect
#[utoipa::path(
    put,
    path = "/api/layouts/{id}/set",
    params(("id" = Uuid, Path, description = "Layout ID")),
    responses(
        (status = 200, description = "The layout is now the single one in effect"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn set_current(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<LayoutView> {
    if !state.layouts.set_current(id) {
        return Err(ApiError::not_found());
    }
    let layout = state.layouts.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, layout))))
}

/// Append a route to a layout
#[utoipa::path(
    post,
    path = "/api/layouts/{id}/routes",
    params(("id" = Uuid, Path, description = "Layout ID")),
    responses(
        (status = 200, description = "Layout with the route appended"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn add_route(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(route): Json<RouteEntry>,
) -> ApiResult<LayoutView> {
    let updated = state
        .layouts
        .update(id, |layout| {
            layout.add_route(route.clone());
        })
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}

/// Patch one route of a layout
#[utoipa::path(
    put,
    path = "/api/layouts/{id}/routes/{route_id}",
    params(
        ("id" = Uuid, Path, description = "Layout ID"),
        ("route_id" = Uuid, Path, description = "Route ID")
    ),
    request_body = RouteUpdate,
    responses(
        (status = 200, description = "Layout with the route updated"),
        (status = 404, description = "Layout or route not found")
    ),
    tag = "layouts"
)]
pub async fn update_route(
    Path((id, route_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    Json(patch): Json<RouteUpdate>,
) -> ApiResult<LayoutView> {
    let mut route_found = false;
    let updated = state
        .layouts
        .update(id, |layout| {
            route_found = layout.routes.update(route_id, |route| patch.apply(route));
        })
        .ok_or_else(ApiError::not_found)?;
    if !route_found {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(view(&state, updated))))
}

/// Remove a route from a layout
///
/// Removing an already-removed route is a no-op, not an error.
#[utoipa::path(
    delete,
    path = "/api/layouts/{id}/routes/{route_id}",
    params(
        ("id" = Uuid, Path, description = "Layout ID"),
        ("route_id" = Uuid, Path, description = "Route ID")
    ),
    responses(
        (status = 200, description = "Layout without the route"),
        (status = 404, description = "Layout not found")
    ),
    tag = "layouts"
)]
pub async fn remove_route(
    Path((id, route_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> ApiResult<LayoutView> {
    let updated = state
        .layouts
        .update(id, |layout| layout.remove_route(route_id))
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}
