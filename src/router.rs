use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::path::Path;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::api::middleware::{ApiError, AppState};

pub fn build_router(state: AppState, static_dir: &str) -> Router {
    // API routes; anything else under /api is an unknown endpoint
    let api_routes = Router::new()
        .route("/persons", get(api::persons::list_persons))
        .route("/persons", post(api::persons::create_person))
        .route("/persons/:id", get(api::persons::get_person))
        .route("/persons/:id", put(api::persons::update_person))
        .route("/persons/:id", delete(api::persons::delete_person))
        .route("/persons/name/:name", get(api::persons::get_person_by_name))
        .fallback(unknown_endpoint);

    // Bundled frontend; unmatched non-API paths get its entry document
    let frontend = ServeDir::new(static_dir)
        .not_found_service(ServeFile::new(Path::new(static_dir).join("index.html")));

    Router::new()
        .route("/info", get(api::info::info))
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn unknown_endpoint() -> ApiError {
    ApiError::NotFound("unknown endpoint".to_string())
}
