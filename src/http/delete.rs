use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// POST /DELETE_TODO_BY_ID/{name}
///
/// 204 with no body, 404 when the name resolves in neither the list nor
/// the worksheet, 500 on persist failure.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    info!("POST /DELETE_TODO_BY_ID/{} endpoint hit", name);
    state.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
