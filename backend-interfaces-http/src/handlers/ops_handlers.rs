use axum::extract::State;
use axum::Json;

use backend_application::queries::status_queries;
use backend_application::AppState;
use backend_domain::ServiceStatus;

pub async fn service_status(State(state): State<AppState>) -> Json<ServiceStatus> {
    Json(status_queries::service_status(&state))
}
