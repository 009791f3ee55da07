//! Carousel endpoints

use atrium_core::{Carousel, CarouselImage};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{ApiResponse, CarouselPayload};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_carousels).post(create_carousel))
        .route("/current", get(current_carousel))
        .route("/:id", get(get_carousel).put(update_carousel).delete(delete_carousel))
        .route("/:id/set", put(set_current))
        .route("/:id/images", post(add_image))
        .route("/:id/images/:image_id", axum::routing::delete(remove_image))
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct CarouselView {
    #[serde(flatten)]
    pub carousel: Carousel,
    pub is_current: bool,
}

fn view(state: &AppState, carousel: Carousel) -> CarouselView {
    let is_current = state.carousels.is_current(carousel.id);
    CarouselView { carousel, is_current }
}

/// List all carousels
#[utoipa::path(
    get,
    path = "/api/carousels",
    responses(
        (status = 200, description = "Carousels with their current-selection flag")
    ),
    tag = "carousels"
)]
pub async fn list_carousels(State(state): State<AppState>) -> ApiResult<Vec<CarouselView>> {
    let carousels = state
        .carousels
        .list()
        .into_iter()
        .map(|c| view(&state, c))
        .collect();
    Ok(Json(ApiResponse::success(carousels)))
}

/// Get a carousel by ID
#[utoipa::path(
    get,
    path = "/api/carousels/{id}",
    params(("id" = Uuid, Path, description = "Carousel ID")),
    responses(
        (status = 200, description = "Carousel details"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn get_carousel(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<CarouselView> {
    let carousel = state.carousels.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, carousel))))
}

/// Get the carousel currently in effect
#[utoipa::path(
    get,
    path = "/api/carousels/current",
    responses(
        (status = 200, description = "The single carousel currently in effect"),
        (status = 404, description = "No carousel is currently set")
    ),
    tag = "carousels"
)]
pub async fn current_carousel(State(state): State<AppState>) -> ApiResult<CarouselView> {
    let carousel = state.carousels.current().ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, carousel))))
}

/// Create a carousel
#[utoipa::path(
    post,
    path = "/api/carousels",
    request_body = CarouselPayload,
    responses(
        (status = 201, description = "Carousel created")
    ),
    tag = "carousels"
)]
pub async fn create_carousel(
    State(state): State<AppState>,
    Json(payload): Json<CarouselPayload>,
) -> Result<(StatusCode, Json<ApiResponse<CarouselView>>), ApiError> {
    let mut carousel = Carousel::new(payload.name);
    for image in payload.images {
        carousel.add_image(image);
    }
    state.carousels.insert(carousel.clone());
    tracing::info!(carousel_id = %carousel.id, "carousel created");
    Ok((StatusCode::CREATED, Json(ApiResponse::success(view(&state, carousel)))))
}

/// Replace a carousel's name and images
#[utoipa::path(
    put,
    path = "/api/carousels/{id}",
    params(("id" = Uuid, Path, description = "Carousel ID")),
    request_body = CarouselPayload,
    responses(
        (status = 200, description = "Updated carousel"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn update_carousel(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<CarouselPayload>,
) -> ApiResult<CarouselView> {
    let updated = state
        .carousels
        .update(id, |carousel| {
            carousel.name = payload.name.clone();
            carousel.images = payload.images.iter().cloned().collect();
        })
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}

/// Delete a carousel
#[utoipa::path(
    delete,
    path = "/api/carousels/{id}",
    params(("id" = Uuid, Path, description = "Carousel ID")),
    responses(
        (status = 200, description = "Carousel deleted"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn delete_carousel(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<()> {
    if !state.carousels.remove(id) {
        return Err(ApiError::not_found());
    }
    Ok(Json(ApiResponse::success(())))
}

/// Make a carousel the one in effect
#[utoipa::path(
    put,
    path = "/api/carousels/{id}/set",
    params(("id" = Uuid, Path, description = "Carousel ID")),
    responses(
        (status = 200, description = "The carousel is now the single one in effect"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn set_current(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<CarouselView> {
    if !state.carousels.set_current(id) {
        return Err(ApiError::not_found());
    }
    let carousel = state.carousels.get(id).ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, carousel))))
}

/// Append an image to a carousel
#[utoipa::path(
    post,
    path = "/api/carousels/{id}/images",
    params(("id" = Uuid, Path, description = "Carousel ID")),
    responses(
        (status = 200, description = "Carousel with the image appended"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn add_image(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(image): Json<CarouselImage>,
) -> ApiResult<CarouselView> {
    let updated = state
        .carousels
        .update(id, |carousel| {
            carousel.add_image(image.clone());
        })
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}

/// Remove an image from a carousel
#[utoipa::path(
    delete,
    path = "/api/carousels/{id}/images/{image_id}",
    params(
        ("id" = Uuid, Path, description = "Carousel ID"),
        ("image_id" = Uuid, Path, description = "Image ID")
    ),
    responses(
        (status = 200, description = "Carousel without the image"),
        (status = 404, description = "Carousel not found")
    ),
    tag = "carousels"
)]
pub async fn remove_image(
    Path((id, image_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
) -> ApiResult<CarouselView> {
    let updated = state
        .carousels
        .update(id, |carousel| carousel.remove_image(image_id))
        .ok_or_else(ApiError::not_found)?;
    Ok(Json(ApiResponse::success(view(&state, updated))))
}
