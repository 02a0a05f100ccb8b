use tracing::{info, warn};

use crate::AppError;
use crate::AppState;
use backend_domain::{pick_one, Item};

pub const NO_ITEMS_MESSAGE: &str = "No item data available. Please check catalogue service.";

pub async fn item_of_the_day(state: &AppState) -> Result<Item, AppError> {
    let items = state.catalogue.fetch_catalogue().await;
    if items.is_empty() {
        warn!("catalogue returned no items, item of the day unavailable");
        return Err(AppError::Unavailable(NO_ITEMS_MESSAGE.to_string()));
    }
    let picked = pick_one(&items, state.random.as_ref())
        .cloned()
        .ok_or_else(|| AppError::Unavailable(NO_ITEMS_MESSAGE.to_string()))?;
    info!(item_id = picked.id, candidates = items.len(), "selected item of the day");
    Ok(picked)
}
