//! Atrium Content Portal API
//!
//! Rust/Axum backend for the site's admin dashboard: navigation layouts,
//! carousels, the business directory, the history timeline, and dynamic
//! forms with collected responses. Every resource is a CRUD surface over
//! the in-memory stores in [`state::AppState`].

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Atrium API",
        version = "0.1.0",
        description = "Admin backend for the Atrium content portal",
        license(name = "Apache-2.0")
    ),
    paths(
        routes::health::health_check,
        routes::forms::list_forms,
        routes::forms::get_form,
        routes::forms::current_form,
        routes::forms::create_form,
        routes::forms::update_form,
        routes::forms::delete_form,
        routes::forms::set_current,
        routes::forms::preview_form,
        routes::responses::submit_response,
        routes::responses::list_responses,
        routes::responses::response_table,
        routes::layouts::list_layouts,
        routes::layouts::get_layout,
        routes::layouts::current_layout,
        routes::layouts::create_layout,
        routes::layouts::update_layout,
        routes::layouts::delete_layout,
        routes::layouts::set_current,
        routes::layouts::add_route,
        routes::layouts::update_route,
        routes::layouts::remove_route,
        routes::carousels::list_carousels,
        routes::carousels::get_carousel,
        routes::carousels::current_carousel,
        routes::carousels::create_carousel,
        routes::carousels::update_carousel,
        routes::carousels::delete_carousel,
        routes::carousels::set_current,
        routes::carousels::add_image,
        routes::carousels::remove_image,
        routes::history::list_entries,
        routes::history::get_entry,
        routes::history::create_entry,
        routes::history::update_entry,
        routes::history::delete_entry,
        routes::directory::list_entries,
        routes::directory::get_entry,
        routes::directory::create_entry,
        routes::directory::update_entry,
        routes::directory::delete_entry,
    ),
    components(
        schemas(
            models::ErrorResponse,
            models::FormPayload,
            models::SubmitResponse,
            models::LayoutPayload,
            models::RouteUpdate,
            models::CarouselPayload,
            routes::health::HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forms", description = "Dynamic form definition management"),
        (name = "responses", description = "Form response capture and viewing"),
        (name = "layouts", description = "Navigation layout management"),
        (name = "carousels", description = "Image carousel management"),
        (name = "history", description = "History timeline management"),
        (name = "directory", description = "Business directory management")
    )
)]
pub struct ApiDoc;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health::health_check))
        .nest("/api", api_routes())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/forms", routes::forms::router())
        .nest("/responses", routes::responses::router())
        .nest("/layouts", routes::layouts::router())
        .nest("/carousels", routes::carousels::router())
        .nest("/history", routes::history::router())
        .nest("/directories", routes::directory::router())
}
