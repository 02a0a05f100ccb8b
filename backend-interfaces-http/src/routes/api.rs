use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use backend_application::AppState;

use crate::handlers::{catalogue_handlers, ops_handlers, page_handlers};

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);
    Router::new()
        .route("/", get(page_handlers::home_page))
        .route(
            "/api/item-of-the-day",
            get(catalogue_handlers::item_of_the_day),
        )
        .route("/api/status", get(ops_handlers::service_status))
        // Paths served by earlier releases of the service.
        .route(
            "/api/origami-of-the-day",
            get(catalogue_handlers::item_of_the_day),
        )
        .route(
            "/api/recommendation-status",
            get(ops_handlers::service_status),
        )
        .nest_service("/static", static_files)
        .with_state(state)
}
