use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::entry::Entry;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /ADD_TODO
///
/// Both fields optional so presence can be validated explicitly: a missing
/// or empty name fails, a missing priority fails, an empty priority passes.
#[derive(Debug, Deserialize)]
pub struct AddTodo {
    pub name: Option<String>,
    pub priority: Option<String>,
}

impl AddTodo {
    fn into_entry(self) -> Result<Entry, ApiError> {
        match (self.name, self.priority) {
            (Some(name), Some(priority)) if !name.is_empty() => Ok(Entry::new(name, priority)),
            _ => Err(ApiError::validation(
                "Please provide both name and priority.",
            )),
        }
    }
}

/// POST /ADD_TODO
///
/// 201 with the created entry, 400 on missing fields, 500 when the
/// workbook cannot be written back.
pub async fn add_todo(
    State(state): State<AppState>,
    Json(body): Json<AddTodo>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    info!("POST /ADD_TODO endpoint hit with body: {:?}", body);
    let entry = body.into_entry()?;
    let created = state.add(entry).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
