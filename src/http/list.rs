use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::entry::Entry;
use crate::state::AppState;

/// POST /GET_ALL_TODOS
///
/// Re-reads the whole worksheet and returns it as the current list.
/// Always 200, with an empty array when the sheet is empty or unreadable.
pub async fn list_todos(State(state): State<AppState>) -> Json<Vec<Entry>> {
    info!("POST /GET_ALL_TODOS endpoint hit");
    Json(state.list().await)
}
