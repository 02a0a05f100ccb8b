use axum::extract::State;
use axum::response::Html;

use backend_application::queries::home_queries;
use backend_application::AppState;

use crate::error::HttpError;
use crate::views::render_home;

pub async fn home_page(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let page = home_queries::home_page(&state).await?;
    Ok(Html(render_home(&page)))
}
