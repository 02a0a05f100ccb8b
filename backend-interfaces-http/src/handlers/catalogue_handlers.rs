use axum::extract::State;
use axum::Json;

use backend_application::queries::item_queries;
use backend_application::AppState;
use backend_domain::Item;

use crate::error::HttpError;

pub async fn item_of_the_day(State(state): State<AppState>) -> Result<Json<Item>, HttpError> {
    let item = item_queries::item_of_the_day(&state).await?;
    Ok(Json(item))
}
